use crate::config::ConfigError;
use crate::core::kinematics::DomainViolation;
use crate::core::params::TableLoadError;
use crate::core::shell::{ParseIdentifierError, Subshell};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CrossSectionError {
    #[error("No parameters tabulated for Z={atomic_number} subshell {subshell}")]
    NotFound {
        atomic_number: u32,
        subshell: Subshell,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ParseIdentifierError),

    #[error("The {model} model has no parameterization for the {shell} subshell")]
    UnsupportedShell {
        model: &'static str,
        shell: Subshell,
    },

    #[error("Numeric domain violation: {0}")]
    NumericDomain(#[from] DomainViolation),
}

/// Failure to build a model from a config file.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Parameter table error: {0}")]
    Table(#[from] TableLoadError),
}
