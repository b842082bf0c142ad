//! Brown (1974) K and L subshell cross sections.

use super::CrossSectionModel;
use super::error::CrossSectionError;
use crate::core::shell::Subshell;
use crate::core::units;

const PREFACTOR_CM2_KEV2: f64 = 7.92e-20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Brown1974;

impl Brown1974 {
    pub const NAME: &'static str = "Brown (1974)";

    /// The Z-dependent shell constant C, if the shell is parameterized.
    pub fn shell_constant(atomic_number: u32, shell: Subshell) -> Option<f64> {
        let z = f64::from(atomic_number);
        match shell {
            Subshell::K => Some(0.85 + 0.0047 * z),
            // L1 and L2 share one fit.
            Subshell::L1 | Subshell::L2 => Some(0.61 + 0.0058 * z),
            Subshell::L3 => Some(2.19 + 0.0098 * z),
            _ => None,
        }
    }
}

impl CrossSectionModel for Brown1974 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn cross_section_nm2(
        &self,
        atomic_number: u32,
        ionization_energy_ev: f64,
        electron_energy_ev: f64,
        shell: Subshell,
    ) -> Result<f64, CrossSectionError> {
        let c = Self::shell_constant(atomic_number, shell).ok_or(
            CrossSectionError::UnsupportedShell {
                model: Self::NAME,
                shell,
            },
        )?;
        if electron_energy_ev / ionization_energy_ev < 1.0 {
            return Ok(0.0);
        }

        let ionization_kev = units::ev_to_kev(ionization_energy_ev);
        let electron_kev = units::ev_to_kev(electron_energy_ev);
        let sigma_cm2 = PREFACTOR_CM2_KEV2 * c / (ionization_kev * electron_kev)
            * (electron_kev / ionization_kev).ln();
        Ok(units::cm2_to_nm2(sigma_cm2))
    }
}
