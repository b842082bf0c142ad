//! # Models Module
//!
//! Inner-shell ionization cross-section models behind one interface.
//!
//! - **[`BoteSalvat2009`]** - table-driven, three-regime model for electrons and positrons
//! - **[`Casnati1982`]**, **[`Brown1974`]**, **[`Jakoby1987`]** - closed-form electron models
//! - **[`comparison`]** - overvoltage grids and sampled curves for comparing models

pub mod bote2009;
pub mod brown;
pub mod casnati;
pub mod comparison;
pub mod error;
pub mod jakoby;

pub use bote2009::BoteSalvat2009;
pub use brown::Brown1974;
pub use casnati::Casnati1982;
pub use error::{CrossSectionError, ModelLoadError};
pub use jakoby::Jakoby1987;

use crate::core::shell::Subshell;

/// Electron-impact ionization cross section of one atomic subshell.
pub trait CrossSectionModel {
    /// Human-readable model name, e.g. `"Casnati (1982)"`.
    fn name(&self) -> &'static str;

    /// Cross section in nm² for an electron of kinetic energy `electron_energy_ev`
    /// ionizing `shell` of element `atomic_number`, whose ionization energy is
    /// `ionization_energy_ev`. Below threshold the result is zero.
    ///
    /// # Errors
    ///
    /// Returns [`CrossSectionError::UnsupportedShell`] if the model has no
    /// parameterization for `shell`, or another [`CrossSectionError`] specific to the
    /// model.
    fn cross_section_nm2(
        &self,
        atomic_number: u32,
        ionization_energy_ev: f64,
        electron_energy_ev: f64,
        shell: Subshell,
    ) -> Result<f64, CrossSectionError>;
}
