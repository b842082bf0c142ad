//! Jakoby, Genz and Richter (1987) K-shell cross section.
//!
//! The Z-dependent coefficients a, b and c carry the element dependence; the subshell
//! argument of [`CrossSectionModel::cross_section_nm2`] is ignored.

use super::CrossSectionModel;
use super::error::CrossSectionError;
use crate::core::kinematics;
use crate::core::shell::Subshell;
use crate::core::units;

const REST_ENERGY_EV: f64 = 511.0e3;
const PREFACTOR_BARN_KEV: f64 = 254.9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jakoby1987;

impl Jakoby1987 {
    pub const NAME: &'static str = "Jakoby (1987)";

    /// Cross section in barn.
    pub fn cross_section_barn(
        atomic_number: u32,
        ionization_energy_ev: f64,
        electron_energy_ev: f64,
    ) -> f64 {
        if electron_energy_ev / ionization_energy_ev < 1.0 {
            return 0.0;
        }
        let beta2 = kinematics::beta_squared(electron_energy_ev, REST_ENERGY_EV);
        let beta02 = kinematics::beta_squared(ionization_energy_ev, REST_ENERGY_EV);

        let f1 = PREFACTOR_BARN_KEV / (units::ev_to_kev(ionization_energy_ev) * beta2);
        let f2 = (beta2 / (1.0 - beta2)).ln() - beta2;
        let f3 = 1.0 - beta02 / beta2;
        let f4 = (1.0 / beta02).ln();
        let f5 = beta02 / beta2;

        let z = f64::from(atomic_number);
        let a = 5.14 * z.powf(-0.48);
        let b = 5.76 - 0.04 * z;
        let c = 0.72 + 0.039 * z - 0.0006 * z * z;

        a * f1 * (f2 + b * f3 + f4 * f5.powf(c))
    }
}

impl CrossSectionModel for Jakoby1987 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn cross_section_nm2(
        &self,
        atomic_number: u32,
        ionization_energy_ev: f64,
        electron_energy_ev: f64,
        _shell: Subshell,
    ) -> Result<f64, CrossSectionError> {
        Ok(units::barn_to_nm2(Self::cross_section_barn(
            atomic_number,
            ionization_energy_ev,
            electron_energy_ev,
        )))
    }
}
