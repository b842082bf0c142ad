use crate::core::shell::Subshell;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File I/O error for '{path}': {source}")]
    File { path: String, source: io::Error },

    #[error("CSV error on line {line}: {source}")]
    Csv { line: u64, source: csv::Error },

    #[error("Malformed record on line {line}: {kind}")]
    MalformedRecord {
        line: usize,
        kind: MalformedRecordKind,
    },

    #[error("Incomplete parameters for Z={atomic_number} {subshell}: missing {}", .missing.join(", "))]
    IncompleteRecord {
        atomic_number: u32,
        subshell: Subshell,
        missing: Vec<&'static str>,
    },

    #[error(
        "Inconsistent ionization energies for Z={atomic_number} {subshell}: {electron_ev} eV (electron section) vs {positron_ev} eV (positron section)"
    )]
    InconsistentIonizationEnergy {
        atomic_number: u32,
        subshell: Subshell,
        electron_ev: f64,
        positron_ev: f64,
    },

    #[error("Refusing to overwrite the source parameter file '{path}'")]
    SourceOverwrite { path: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedRecordKind {
    #[error("section {section} expects at least {expected} fields, found {found}")]
    TooFewFields {
        section: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid integer in field {field} (value: '{value}')")]
    InvalidInt { field: usize, value: String },
    #[error("invalid float in field {field} (value: '{value}')")]
    InvalidFloat { field: usize, value: String },
    #[error("unknown subshell label '{0}'")]
    UnknownSubshell(String),
    #[error("continuation line before any atomic number was given in section {0}")]
    MissingContext(&'static str),
}
