//! Bote–Salvat (2009) parameter tables and their file formats.
//!
//! The published coefficients come as a sectioned text export ([`SectionedFile`]);
//! once parsed they can be re-serialized to a flat one-row-per-record CSV
//! ([`TabulatedFile`]) that loads without any section tracking. Both formats produce
//! the same immutable [`ParameterTable`].

pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod record;
pub mod sectioned;
pub mod table;
pub mod tabulated;
pub mod traits;

pub use error::{MalformedRecordKind, TableLoadError};
pub use record::ParameterRecord;
pub use sectioned::SectionedFile;
pub use table::ParameterTable;
pub use tabulated::{TABULATED_FILE_NAME, TabulatedFile};
pub use traits::ParameterFile;

use std::path::{Path, PathBuf};
use tracing::info;

/// Parses a sectioned source file and writes its tabulated form next to it as
/// [`TABULATED_FILE_NAME`].
///
/// # Arguments
///
/// * `source` - Path of the sectioned source file.
/// * `format` - Reader settings, e.g. the ionization-energy tolerance.
///
/// # Return
///
/// Returns the path of the tabulated file written.
///
/// # Errors
///
/// Returns [`TableLoadError::SourceOverwrite`] if the source already has the
/// tabulated file name, otherwise any read or write error.
pub fn create_tabulated_file(
    source: &Path,
    format: &SectionedFile,
) -> Result<PathBuf, TableLoadError> {
    let destination = source
        .parent()
        .map_or_else(|| PathBuf::from(TABULATED_FILE_NAME), |dir| dir.join(TABULATED_FILE_NAME));
    if destination == source {
        return Err(TableLoadError::SourceOverwrite {
            path: source.to_string_lossy().to_string(),
        });
    }

    let table = format.read_from_path(source)?;
    TabulatedFile::default().write_to_path(&table, &destination)?;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        records = table.record_count(),
        "Created tabulated Bote-Salvat parameter file"
    );
    Ok(destination)
}
