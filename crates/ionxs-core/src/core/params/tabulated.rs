//! Flat one-row-per-record CSV form of a [`ParameterTable`].
//!
//! Column order: Z, subshell, ionization energy (eV), a1..a5, d1..d5, b-, b+, Anlj,
//! g1..g4. Files are written without a header row unless asked for one; a leading
//! header row is skipped on read.

use super::error::{MalformedRecordKind, TableLoadError};
use super::record::ParameterRecord;
use super::table::ParameterTable;
use super::traits::ParameterFile;
use crate::core::shell::Subshell;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument, warn};

/// File name used when a tabulated table is generated next to its sectioned source.
pub const TABULATED_FILE_NAME: &str = "bote2009_Parameters.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TabulatedRow {
    #[serde(rename = "Z")]
    atomic_number: u32,
    #[serde(rename = "Subshell")]
    subshell: String,
    #[serde(rename = "Ec (eV)")]
    ionization_energy_ev: f64,
    a1: f64,
    a2: f64,
    a3: f64,
    a4: f64,
    a5: f64,
    d1: f64,
    d2: f64,
    d3: f64,
    d4: f64,
    d5: f64,
    #[serde(rename = "b-")]
    b_electron: f64,
    #[serde(rename = "b+")]
    b_positron: f64,
    #[serde(rename = "Anlj")]
    anlj: f64,
    g1: f64,
    g2: f64,
    g3: f64,
    g4: f64,
}

impl TabulatedRow {
    fn new(atomic_number: u32, subshell: Subshell, record: &ParameterRecord) -> Self {
        let [a1, a2, a3, a4, a5] = record.a;
        let [d1, d2, d3, d4, d5] = record.d;
        let [g1, g2, g3, g4] = record.g;
        Self {
            atomic_number,
            subshell: subshell.to_string(),
            ionization_energy_ev: record.ionization_energy_ev,
            a1,
            a2,
            a3,
            a4,
            a5,
            d1,
            d2,
            d3,
            d4,
            d5,
            b_electron: record.b_electron,
            b_positron: record.b_positron,
            anlj: record.anlj,
            g1,
            g2,
            g3,
            g4,
        }
    }

    fn record(&self) -> ParameterRecord {
        ParameterRecord {
            ionization_energy_ev: self.ionization_energy_ev,
            a: [self.a1, self.a2, self.a3, self.a4, self.a5],
            d: [self.d1, self.d2, self.d3, self.d4, self.d5],
            b_electron: self.b_electron,
            b_positron: self.b_positron,
            anlj: self.anlj,
            g: [self.g1, self.g2, self.g3, self.g4],
        }
    }
}

/// The flat tabulated file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabulatedFile {
    /// Write a header row with the column names.
    pub include_header: bool,
}

impl TabulatedFile {
    pub fn with_header() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Writes one row per record, ordered by atomic number then subshell.
    ///
    /// # Errors
    ///
    /// Returns [`TableLoadError::Csv`] if serialization or the underlying write fails.
    pub fn write_to(
        &self,
        table: &ParameterTable,
        writer: &mut impl Write,
    ) -> Result<(), TableLoadError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(self.include_header)
            .from_writer(writer);
        for (row_index, (atomic_number, subshell, record)) in table.iter().enumerate() {
            csv_writer
                .serialize(TabulatedRow::new(atomic_number, subshell, record))
                .map_err(|e| TableLoadError::Csv {
                    line: row_index as u64 + 1,
                    source: e,
                })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(
        &self,
        table: &ParameterTable,
        path: P,
    ) -> Result<(), TableLoadError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| TableLoadError::File {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        self.write_to(table, &mut writer)?;
        writer.flush()?;
        debug!(
            path = %path.display(),
            records = table.record_count(),
            "Wrote tabulated parameter file"
        );
        Ok(())
    }
}

impl ParameterFile for TabulatedFile {
    #[instrument(skip_all, name = "read_tabulated")]
    fn read_from(&self, reader: &mut impl BufRead) -> Result<ParameterTable, TableLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (row_index, result) in csv_reader.records().enumerate() {
            let raw = result.map_err(|e| TableLoadError::Csv {
                line: e.position().map_or(row_index as u64 + 1, |p| p.line()),
                source: e,
            })?;
            let line = raw.position().map_or(row_index as u64 + 1, |p| p.line());
            if row_index == 0 && raw.get(0) == Some("Z") {
                continue;
            }
            let row: TabulatedRow = raw
                .deserialize(None)
                .map_err(|e| TableLoadError::Csv { line, source: e })?;
            let subshell: Subshell =
                row.subshell
                    .parse()
                    .map_err(|_| TableLoadError::MalformedRecord {
                        line: line as usize,
                        kind: MalformedRecordKind::UnknownSubshell(row.subshell.clone()),
                    })?;
            records.push((row.atomic_number, subshell, row.record()));
        }

        let row_count = records.len();
        let table = ParameterTable::from_records(records);
        if table.record_count() != row_count {
            warn!(
                rows = row_count,
                records = table.record_count(),
                "Duplicate (Z, subshell) rows in tabulated file; later rows win"
            );
        }
        debug!(
            elements = table.element_count(),
            records = table.record_count(),
            "Read tabulated parameter table"
        );
        Ok(table)
    }
}
