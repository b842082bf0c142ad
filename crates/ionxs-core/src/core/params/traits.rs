use super::error::TableLoadError;
use super::table::ParameterTable;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading a [`ParameterTable`] from one of its file formats.
pub trait ParameterFile {
    /// Reads a complete table from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or any record is malformed or incomplete.
    /// No partial table is ever returned.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<ParameterTable, TableLoadError>;

    /// Reads a complete table from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`TableLoadError::File`] if the file cannot be opened, otherwise the
    /// errors of [`ParameterFile::read_from`].
    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<ParameterTable, TableLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TableLoadError::File {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}
