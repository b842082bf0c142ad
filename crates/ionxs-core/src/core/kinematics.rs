use super::constants::ELECTRON_REST_ENERGY_EV;
use thiserror::Error;
use tracing::error;

/// A kinematic or cross-section quantity fell outside its physical range.
///
/// Never clamped: a violation means the inputs or the coefficient table are wrong.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("{quantity} = {value} lies outside its physical domain {domain}")]
pub struct DomainViolation {
    pub quantity: &'static str,
    pub value: f64,
    pub domain: &'static str,
}

#[inline]
fn momentum_ev(energy_ev: f64, rest_energy_ev: f64) -> f64 {
    (energy_ev * (energy_ev + 2.0 * rest_energy_ev)).sqrt()
}

/// Relativistic velocity ratio v/c of an electron with kinetic energy `energy_ev`.
///
/// β = √(E(E + 2mc²)) / (E + mc²), required to lie in [0, 1].
pub fn beta(energy_ev: f64) -> Result<f64, DomainViolation> {
    let value = momentum_ev(energy_ev, ELECTRON_REST_ENERGY_EV)
        / (energy_ev + ELECTRON_REST_ENERGY_EV);
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        error!(energy_ev, value, "Velocity ratio outside [0, 1]");
        Err(DomainViolation {
            quantity: "beta",
            value,
            domain: "[0, 1]",
        })
    }
}

/// Reduced momentum ξ = √(E(E + 2mc²)) / mc², required to be non-negative.
pub fn xi(energy_ev: f64) -> Result<f64, DomainViolation> {
    let value = momentum_ev(energy_ev, ELECTRON_REST_ENERGY_EV) / ELECTRON_REST_ENERGY_EV;
    if value >= 0.0 {
        Ok(value)
    } else {
        error!(energy_ev, value, "Reduced momentum is negative or undefined");
        Err(DomainViolation {
            quantity: "xi",
            value,
            domain: "[0, inf)",
        })
    }
}

/// β² = 1 − (1 + E/mc²)⁻² for an arbitrary rest energy.
#[inline]
pub fn beta_squared(energy_ev: f64, rest_energy_ev: f64) -> f64 {
    1.0 - (1.0 + energy_ev / rest_energy_ev).powi(-2)
}
