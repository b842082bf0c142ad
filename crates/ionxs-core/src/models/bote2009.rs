//! Bote and Salvat (2009) inner-shell ionization cross sections.
//!
//! Near threshold the cross section is a fitted DWBA expression with separate electron
//! and positron coefficients. Above sixteen times the ionization energy it switches to
//! a PWBA expression scaled by `E / (E + b I)`, where `b` depends on the particle.

use super::CrossSectionModel;
use super::error::{CrossSectionError, ModelLoadError};
use crate::config::{ParameterConfig, ParameterFormat};
use crate::core::constants::FOUR_PI_BOHR_RADIUS_SQUARED_CM2;
use crate::core::kinematics::{self, DomainViolation};
use crate::core::params::{
    ParameterFile, ParameterRecord, ParameterTable, SectionedFile, TableLoadError, TabulatedFile,
};
use crate::core::shell::{Particle, Subshell};
use crate::core::units;
use std::path::Path;
use tracing::{debug, error, instrument, trace};

/// Overvoltage above which the scaled PWBA expression replaces the DWBA fits.
pub const HIGH_ENERGY_OVERVOLTAGE: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    HighEnergy,
    ElectronDwba,
    PositronDwba,
}

impl Regime {
    pub fn select(record: &ParameterRecord, energy_ev: f64, particle: Particle) -> Self {
        if energy_ev > HIGH_ENERGY_OVERVOLTAGE * record.ionization_energy_ev {
            Regime::HighEnergy
        } else {
            match particle {
                Particle::Electron => Regime::ElectronDwba,
                Particle::Positron => Regime::PositronDwba,
            }
        }
    }
}

fn ensure_non_negative(quantity: &'static str, value: f64) -> Result<f64, DomainViolation> {
    if value >= 0.0 {
        Ok(value)
    } else {
        error!(quantity, value, "Negative or undefined cross section; check the coefficient table");
        Err(DomainViolation {
            quantity,
            value,
            domain: "[0, inf)",
        })
    }
}

#[inline]
fn threshold_factor_cm2(overvoltage: f64) -> f64 {
    FOUR_PI_BOHR_RADIUS_SQUARED_CM2 * (overvoltage - 1.0) / (overvoltage * overvoltage)
}

/// Electron DWBA fit, in cm². Zero below threshold (U < 1).
pub fn dwba_electron_cm2(
    record: &ParameterRecord,
    overvoltage: f64,
) -> Result<f64, DomainViolation> {
    if overvoltage < 1.0 {
        return Ok(0.0);
    }
    let u = overvoltage;
    let [a1, a2, a3, a4, a5] = record.a;
    let factor_b = a1 + a2 * u + a3 / (1.0 + u) + a4 / (1.0 + u).powi(3) + a5 / (1.0 + u).powi(5);
    ensure_non_negative(
        "electron DWBA cross section",
        threshold_factor_cm2(u) * factor_b * factor_b,
    )
}

/// Positron DWBA fit, in cm². Zero below threshold (U < 1).
pub fn dwba_positron_cm2(
    record: &ParameterRecord,
    overvoltage: f64,
) -> Result<f64, DomainViolation> {
    if overvoltage < 1.0 {
        return Ok(0.0);
    }
    let u = overvoltage;
    let [d1, d2, d3, d4, d5] = record.d;
    let factor_b = d1
        + d2 * u
        + d3 / (1.0 + u)
        + d4 * u.sqrt() / (1.0 + u).powi(3)
        + d5 * u / (1.0 + u).powi(5);
    ensure_non_negative(
        "positron DWBA cross section",
        threshold_factor_cm2(u) * factor_b.powi(4),
    )
}

/// Unscaled PWBA cross section, in cm². Zero below [`HIGH_ENERGY_OVERVOLTAGE`], where
/// the expression is not valid.
pub fn pwba_cm2(record: &ParameterRecord, energy_ev: f64) -> Result<f64, DomainViolation> {
    if record.overvoltage(energy_ev) < HIGH_ENERGY_OVERVOLTAGE {
        return Ok(0.0);
    }
    let beta = kinematics::beta(energy_ev)?;
    let xi = kinematics::xi(energy_ev)?;
    let beta2 = beta * beta;
    let [g1, g2, g3, g4] = record.g;

    let factor_a = FOUR_PI_BOHR_RADIUS_SQUARED_CM2 * record.anlj / beta2;
    let factor_b = ((xi * xi).ln() - beta2) * (1.0 + g1 / xi)
        + g2
        + g3 * (1.0 - beta2).powf(0.25)
        + g4 / xi;
    ensure_non_negative("PWBA cross section", factor_a * factor_b)
}

/// Table-driven Bote–Salvat model.
///
/// Holds its [`ParameterTable`] by value and only reads it, so one instance can be
/// shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct BoteSalvat2009 {
    table: ParameterTable,
}

impl BoteSalvat2009 {
    pub const NAME: &'static str = "Bote-Salvat (2009)";

    pub fn new(table: ParameterTable) -> Self {
        Self { table }
    }

    pub fn from_sectioned_path<P: AsRef<Path>>(path: P) -> Result<Self, TableLoadError> {
        Ok(Self::new(SectionedFile::default().read_from_path(path)?))
    }

    pub fn from_tabulated_path<P: AsRef<Path>>(path: P) -> Result<Self, TableLoadError> {
        Ok(Self::new(TabulatedFile::default().read_from_path(path)?))
    }

    #[instrument(skip_all, fields(path = %config.parameters_path.display(), format = ?config.format))]
    pub fn from_config(config: &ParameterConfig) -> Result<Self, TableLoadError> {
        let table = match config.format {
            ParameterFormat::Sectioned => SectionedFile::new(config.ionization_energy_tolerance)
                .read_from_path(&config.parameters_path)?,
            ParameterFormat::Tabulated => {
                TabulatedFile::default().read_from_path(&config.parameters_path)?
            }
        };
        debug!(records = table.record_count(), "Loaded Bote-Salvat model");
        Ok(Self::new(table))
    }

    /// Loads a [`ParameterConfig`] from TOML and builds the model it describes.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelLoadError> {
        let config = ParameterConfig::load(path.as_ref())?;
        Ok(Self::from_config(&config)?)
    }

    pub fn table(&self) -> &ParameterTable {
        &self.table
    }

    pub fn record(
        &self,
        atomic_number: u32,
        subshell: Subshell,
    ) -> Result<&ParameterRecord, CrossSectionError> {
        self.table
            .get(atomic_number, subshell)
            .ok_or(CrossSectionError::NotFound {
                atomic_number,
                subshell,
            })
    }

    /// Ionization cross section in cm² for a particle of kinetic energy `energy_ev`.
    ///
    /// # Arguments
    ///
    /// * `energy_ev` - Kinetic energy of the incident particle in eV.
    /// * `atomic_number` - Atomic number Z of the target element.
    /// * `subshell` - The subshell being ionized.
    /// * `particle` - Electron or positron.
    ///
    /// # Return
    ///
    /// Returns the cross section in cm², zero at or below the ionization threshold.
    ///
    /// # Errors
    ///
    /// Returns [`CrossSectionError::NotFound`] if the (Z, subshell) pair is not
    /// tabulated, or [`CrossSectionError::NumericDomain`] if the kinematics or the
    /// result leave their physical range.
    pub fn cross_section_cm2(
        &self,
        energy_ev: f64,
        atomic_number: u32,
        subshell: Subshell,
        particle: Particle,
    ) -> Result<f64, CrossSectionError> {
        let record = self.record(atomic_number, subshell)?;
        let regime = Regime::select(record, energy_ev, particle);
        trace!(energy_ev, atomic_number, %subshell, %particle, ?regime, "Evaluating cross section");

        let sigma = match regime {
            Regime::HighEnergy => {
                let b = record.b(particle);
                let scaling = energy_ev / (energy_ev + b * record.ionization_energy_ev);
                ensure_non_negative(
                    "scaled PWBA cross section",
                    scaling * pwba_cm2(record, energy_ev)?,
                )?
            }
            Regime::ElectronDwba => dwba_electron_cm2(record, record.overvoltage(energy_ev))?,
            Regime::PositronDwba => dwba_positron_cm2(record, record.overvoltage(energy_ev))?,
        };
        Ok(sigma)
    }

    /// Same as [`BoteSalvat2009::cross_section_cm2`] with the subshell and particle
    /// given as labels, e.g. `"L3"` and `"Positron"`.
    ///
    /// # Errors
    ///
    /// Returns [`CrossSectionError::InvalidArgument`] for an unrecognized label.
    pub fn query_cm2(
        &self,
        energy_ev: f64,
        atomic_number: u32,
        subshell: &str,
        particle: &str,
    ) -> Result<f64, CrossSectionError> {
        let subshell: Subshell = subshell.parse()?;
        let particle: Particle = particle.parse()?;
        self.cross_section_cm2(energy_ev, atomic_number, subshell, particle)
    }
}

impl CrossSectionModel for BoteSalvat2009 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Electron-impact cross section. The tabulated ionization energy is used; the
    /// supplied one only matters for the debug log when the two disagree.
    fn cross_section_nm2(
        &self,
        atomic_number: u32,
        ionization_energy_ev: f64,
        electron_energy_ev: f64,
        shell: Subshell,
    ) -> Result<f64, CrossSectionError> {
        let tabulated_ev = self.record(atomic_number, shell)?.ionization_energy_ev;
        if (tabulated_ev - ionization_energy_ev).abs() > 1e-6 * tabulated_ev.abs() {
            debug!(
                atomic_number,
                %shell,
                tabulated_ev,
                ionization_energy_ev,
                "Supplied ionization energy differs from the tabulated value"
            );
        }
        let sigma_cm2 =
            self.cross_section_cm2(electron_energy_ev, atomic_number, shell, Particle::Electron)?;
        Ok(units::cm2_to_nm2(sigma_cm2))
    }
}
