use crate::core::shell::Particle;

/// Bote–Salvat coefficients for one (atomic number, subshell) pair.
///
/// All fields are always populated; partially parsed records live in
/// [`RecordAccumulator`] until they are complete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRecord {
    /// Subshell ionization energy in eV.
    pub ionization_energy_ev: f64,
    /// Electron DWBA shape coefficients a1..a5.
    pub a: [f64; 5],
    /// Positron DWBA shape coefficients d1..d5.
    pub d: [f64; 5],
    /// High-energy scaling coefficient for electrons (b-).
    pub b_electron: f64,
    /// High-energy scaling coefficient for positrons (b+).
    pub b_positron: f64,
    /// Subshell normalization constant Anlj.
    pub anlj: f64,
    /// PWBA correction coefficients g1..g4.
    pub g: [f64; 4],
}

impl ParameterRecord {
    #[inline]
    pub fn b(&self, particle: Particle) -> f64 {
        match particle {
            Particle::Electron => self.b_electron,
            Particle::Positron => self.b_positron,
        }
    }

    #[inline]
    pub fn overvoltage(&self, energy_ev: f64) -> f64 {
        energy_ev / self.ionization_energy_ev
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShapeGroup {
    pub ionization_energy_ev: f64,
    pub coefficients: [f64; 5],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HighEnergyGroup {
    pub b_electron: f64,
    pub b_positron: f64,
    pub anlj: f64,
    pub g: [f64; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AccumulatorError {
    Missing(Vec<&'static str>),
    IonizationEnergyMismatch { electron_ev: f64, positron_ev: f64 },
}

/// Collects the three coefficient groups of one record as the sections are scanned.
///
/// A group seen twice keeps the last value, matching how later rows of the source
/// overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RecordAccumulator {
    electron: Option<ShapeGroup>,
    positron: Option<ShapeGroup>,
    high_energy: Option<HighEnergyGroup>,
}

impl RecordAccumulator {
    pub fn set_electron(&mut self, group: ShapeGroup) {
        self.electron = Some(group);
    }

    pub fn set_positron(&mut self, group: ShapeGroup) {
        self.positron = Some(group);
    }

    pub fn set_high_energy(&mut self, group: HighEnergyGroup) {
        self.high_energy = Some(group);
    }

    /// Finalizes the record. The electron-section ionization energy is canonical; the
    /// positron copy must agree with it within `relative_tolerance`.
    pub fn finish(self, relative_tolerance: f64) -> Result<ParameterRecord, AccumulatorError> {
        let (electron, positron, high_energy) =
            match (self.electron, self.positron, self.high_energy) {
                (Some(e), Some(p), Some(h)) => (e, p, h),
                (e, p, h) => {
                    let mut missing = Vec::new();
                    if e.is_none() {
                        missing.push("a1..a5");
                    }
                    if p.is_none() {
                        missing.push("d1..d5");
                    }
                    if h.is_none() {
                        missing.push("b-, b+, Anlj, g1..g4");
                    }
                    return Err(AccumulatorError::Missing(missing));
                }
            };

        let scale = electron.ionization_energy_ev.abs().max(1.0);
        if (electron.ionization_energy_ev - positron.ionization_energy_ev).abs()
            > relative_tolerance * scale
        {
            return Err(AccumulatorError::IonizationEnergyMismatch {
                electron_ev: electron.ionization_energy_ev,
                positron_ev: positron.ionization_energy_ev,
            });
        }

        Ok(ParameterRecord {
            ionization_energy_ev: electron.ionization_energy_ev,
            a: electron.coefficients,
            d: positron.coefficients,
            b_electron: high_energy.b_electron,
            b_positron: high_energy.b_positron,
            anlj: high_energy.anlj,
            g: high_energy.g,
        })
    }
}
