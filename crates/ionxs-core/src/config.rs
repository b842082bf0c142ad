use crate::core::params::sectioned::DEFAULT_IONIZATION_ENERGY_TOLERANCE;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// On-disk layout of a Bote–Salvat parameter file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterFormat {
    /// The multi-section source export.
    Sectioned,
    /// One row per (Z, subshell) record.
    #[default]
    Tabulated,
}

fn default_tolerance() -> f64 {
    DEFAULT_IONIZATION_ENERGY_TOLERANCE
}

/// Where a parameter table lives and how it is validated on load.
///
/// ```toml
/// parameters_path = "data/bote2009_Parameters.csv"
/// format = "tabulated"
/// ionization_energy_tolerance = 1e-9
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterConfig {
    pub parameters_path: PathBuf,
    #[serde(default)]
    pub format: ParameterFormat,
    /// Allowed relative difference between the electron and positron copies of the
    /// ionization energy. Only used by the sectioned format.
    #[serde(default = "default_tolerance")]
    pub ionization_energy_tolerance: f64,
}

impl ParameterConfig {
    /// Reads a config from a TOML file. A relative `parameters_path` is resolved
    /// against the directory holding the config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        if config.parameters_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.parameters_path = dir.join(&config.parameters_path);
            }
        }
        config.validate()?;
        debug!(
            config = %path.display(),
            parameters = %config.parameters_path.display(),
            format = ?config.format,
            "Loaded parameter config"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ionization_energy_tolerance >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "ionization_energy_tolerance",
                reason: format!(
                    "must be a non-negative number, got {}",
                    self.ionization_energy_tolerance
                ),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ParameterConfigBuilder {
    parameters_path: Option<PathBuf>,
    format: Option<ParameterFormat>,
    ionization_energy_tolerance: Option<f64>,
}

impl ParameterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameters_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.parameters_path = Some(path.into());
        self
    }

    pub fn format(mut self, format: ParameterFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn ionization_energy_tolerance(mut self, tolerance: f64) -> Self {
        self.ionization_energy_tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> Result<ParameterConfig, ConfigError> {
        let config = ParameterConfig {
            parameters_path: self
                .parameters_path
                .ok_or(ConfigError::MissingParameter("parameters_path"))?,
            format: self.format.unwrap_or_default(),
            ionization_energy_tolerance: self
                .ionization_energy_tolerance
                .unwrap_or(DEFAULT_IONIZATION_ENERGY_TOLERANCE),
        };
        config.validate()?;
        Ok(config)
    }
}
