//! Physical constants (CODATA 2018).

use std::f64::consts::PI;

/// Bohr radius in meters.
pub const BOHR_RADIUS_M: f64 = 5.291_772_109_03e-11;

/// Bohr radius in centimeters.
pub const BOHR_RADIUS_CM: f64 = BOHR_RADIUS_M * 1.0e2;

/// Electron rest energy (m c²) in electronvolts.
pub const ELECTRON_REST_ENERGY_EV: f64 = 510_998.950_00;

/// 4π a0², the prefactor shared by every Bote–Salvat regime, in cm².
pub const FOUR_PI_BOHR_RADIUS_SQUARED_CM2: f64 = 4.0 * PI * BOHR_RADIUS_CM * BOHR_RADIUS_CM;
