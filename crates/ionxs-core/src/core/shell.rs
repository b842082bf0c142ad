use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Atomic subshells covered by the ionization models, ordered from the innermost out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subshell {
    K,
    L1,
    L2,
    L3,
    M1,
    M2,
    M3,
    M4,
    M5,
}

// Both the Bote–Salvat labels (L1..M5) and the spectroscopic Roman labels (LI..MV).
static SUBSHELL_LABELS: Map<&'static str, Subshell> = phf_map! {
    "K" => Subshell::K,
    "L1" => Subshell::L1, "LI" => Subshell::L1,
    "L2" => Subshell::L2, "LII" => Subshell::L2,
    "L3" => Subshell::L3, "LIII" => Subshell::L3,
    "M1" => Subshell::M1, "MI" => Subshell::M1,
    "M2" => Subshell::M2, "MII" => Subshell::M2,
    "M3" => Subshell::M3, "MIII" => Subshell::M3,
    "M4" => Subshell::M4, "MIV" => Subshell::M4,
    "M5" => Subshell::M5, "MV" => Subshell::M5,
};

impl Subshell {
    pub const ALL: [Subshell; 9] = [
        Subshell::K,
        Subshell::L1,
        Subshell::L2,
        Subshell::L3,
        Subshell::M1,
        Subshell::M2,
        Subshell::M3,
        Subshell::M4,
        Subshell::M5,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subshell::K => "K",
            Subshell::L1 => "L1",
            Subshell::L2 => "L2",
            Subshell::L3 => "L3",
            Subshell::M1 => "M1",
            Subshell::M2 => "M2",
            Subshell::M3 => "M3",
            Subshell::M4 => "M4",
            Subshell::M5 => "M5",
        }
    }
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subshell {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUBSHELL_LABELS
            .get(s.trim())
            .copied()
            .ok_or_else(|| ParseIdentifierError::UnknownSubshell(s.to_string()))
    }
}

/// The incident charged particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Particle {
    Electron,
    Positron,
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Particle::Electron => f.write_str("Electron"),
            Particle::Positron => f.write_str("Positron"),
        }
    }
}

impl FromStr for Particle {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electron" | "e-" => Ok(Particle::Electron),
            "positron" | "e+" => Ok(Particle::Positron),
            _ => Err(ParseIdentifierError::UnknownParticle(s.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseIdentifierError {
    #[error("Unknown subshell label '{0}'")]
    UnknownSubshell(String),
    #[error("Unknown particle kind '{0}' (expected Electron or Positron)")]
    UnknownParticle(String),
}
