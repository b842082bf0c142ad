//! Reader for the sectioned Bote–Salvat source tables.
//!
//! The published dataset is a comma-separated export of three tables: electron
//! coefficients (section A), positron coefficients (section D) and high-energy
//! coefficients (section G). Each section starts with a fixed header line. Rows
//! belonging to one element run consecutively and only the first row of a group
//! carries the atomic number; group boundaries are marked by a line of bare commas
//! or, in sections D and G only, by a blank line. Lines starting with `Table` are
//! page footers and close the current section.

use super::error::{MalformedRecordKind, TableLoadError};
use super::record::{HighEnergyGroup, RecordAccumulator, ShapeGroup};
use super::table::ParameterTable;
use super::traits::ParameterFile;
use crate::core::shell::Subshell;
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::{debug, instrument, trace};

pub const HEADER_ELECTRON: &str = "Z,S,,a1,a2,a3,a4,a5";
pub const HEADER_POSITRON: &str = "Z,S,,d1,d2,d3,d4,d5";
pub const HEADER_HIGH_ENERGY: &str = "Z,S,b-,b+,Anlj,g1,g2,g3,g4";
pub const GROUP_SEPARATOR: &str = ",,,,,,,";
pub const FOOTER_PREFIX: &str = "Table";

pub const DEFAULT_IONIZATION_ENERGY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Section A: ionization energy, a1..a5.
    Electron,
    /// Section D: ionization energy, d1..d5.
    Positron,
    /// Section G: b-, b+, Anlj, g1..g4.
    HighEnergy,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Electron => "A",
            Section::Positron => "D",
            Section::HighEnergy => "G",
        }
    }

    /// Number of numeric columns following the key columns.
    pub fn value_count(&self) -> usize {
        match self {
            Section::Electron | Section::Positron => 6,
            Section::HighEnergy => 7,
        }
    }

    /// Whether a blank line starts a new element group. Section A only uses the
    /// comma separator.
    pub fn blank_line_starts_group(&self) -> bool {
        !matches!(self, Section::Electron)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Header(Section),
    Separator,
    Blank,
    Footer,
    Data(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classifies an already trimmed line.
    pub fn classify(line: &'a str) -> Self {
        match line {
            HEADER_ELECTRON => LineKind::Header(Section::Electron),
            HEADER_POSITRON => LineKind::Header(Section::Positron),
            HEADER_HIGH_ENERGY => LineKind::Header(Section::HighEnergy),
            GROUP_SEPARATOR => LineKind::Separator,
            "" => LineKind::Blank,
            _ if line.starts_with(FOOTER_PREFIX) => LineKind::Footer,
            _ => LineKind::Data(line),
        }
    }
}

/// Parser state: the active section and whether the next data row carries its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    pub section: Option<Section>,
    pub expect_key: bool,
}

impl ScanState {
    /// Applies one line to the state. Returns the section a data line must be parsed
    /// under, or `None` when the line carries no data.
    pub fn advance(&mut self, kind: &LineKind<'_>) -> Option<Section> {
        match *kind {
            LineKind::Header(section) => {
                self.section = Some(section);
                self.expect_key = true;
                None
            }
            LineKind::Separator => {
                self.expect_key = true;
                None
            }
            LineKind::Blank => {
                if self.section.is_some_and(|s| s.blank_line_starts_group()) {
                    self.expect_key = true;
                }
                None
            }
            LineKind::Footer => {
                self.section = None;
                None
            }
            LineKind::Data(_) => self.section,
        }
    }
}

/// Streaming parser over the lines of a sectioned source. Holds all of its state
/// locally, so independent parses never interfere.
#[derive(Debug)]
pub(crate) struct SectionedParser {
    state: ScanState,
    context: Option<(u32, Subshell)>,
    accumulators: BTreeMap<(u32, Subshell), RecordAccumulator>,
    rows_per_section: [usize; 3],
    ionization_energy_tolerance: f64,
}

impl SectionedParser {
    pub fn new(ionization_energy_tolerance: f64) -> Self {
        Self {
            state: ScanState::default(),
            context: None,
            accumulators: BTreeMap::new(),
            rows_per_section: [0; 3],
            ionization_energy_tolerance,
        }
    }

    /// Feeds one raw line; `line_num` is 1-based and only used for error reports.
    pub fn feed(&mut self, line_num: usize, raw_line: &str) -> Result<(), TableLoadError> {
        let line = raw_line.trim();
        let kind = LineKind::classify(line);
        match self.state.advance(&kind) {
            Some(section) => self.parse_row(line_num, line, section),
            None => {
                if let LineKind::Data(text) = kind {
                    trace!(line = line_num, text, "Skipping line outside any section");
                }
                Ok(())
            }
        }
    }

    fn parse_row(
        &mut self,
        line_num: usize,
        line: &str,
        section: Section,
    ) -> Result<(), TableLoadError> {
        let malformed = |kind| TableLoadError::MalformedRecord {
            line: line_num,
            kind,
        };
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let needed = section.value_count();

        let (key, values_start) = if self.state.expect_key {
            if fields.len() < needed + 2 {
                return Err(malformed(MalformedRecordKind::TooFewFields {
                    section: section.name(),
                    expected: needed + 2,
                    found: fields.len(),
                }));
            }
            let atomic_number: u32 = fields[0].parse().map_err(|_| {
                malformed(MalformedRecordKind::InvalidInt {
                    field: 1,
                    value: fields[0].to_string(),
                })
            })?;
            let subshell: Subshell = fields[1]
                .parse()
                .map_err(|_| malformed(MalformedRecordKind::UnknownSubshell(fields[1].into())))?;
            self.state.expect_key = false;
            ((atomic_number, subshell), 2)
        } else {
            let (atomic_number, current_subshell) = self
                .context
                .ok_or_else(|| malformed(MalformedRecordKind::MissingContext(section.name())))?;
            // Continuation rows normally restate the subshell; a row that starts with
            // a number reuses the current one.
            match fields[0].parse::<Subshell>() {
                Ok(subshell) => {
                    if fields.len() < needed + 1 {
                        return Err(malformed(MalformedRecordKind::TooFewFields {
                            section: section.name(),
                            expected: needed + 1,
                            found: fields.len(),
                        }));
                    }
                    ((atomic_number, subshell), 1)
                }
                Err(_) if fields[0].parse::<f64>().is_ok() => {
                    if fields.len() < needed {
                        return Err(malformed(MalformedRecordKind::TooFewFields {
                            section: section.name(),
                            expected: needed,
                            found: fields.len(),
                        }));
                    }
                    ((atomic_number, current_subshell), 0)
                }
                Err(_) => {
                    return Err(malformed(MalformedRecordKind::UnknownSubshell(
                        fields[0].into(),
                    )));
                }
            }
        };
        self.context = Some(key);

        let mut values = [0.0_f64; 7];
        for (offset, value) in values.iter_mut().take(needed).enumerate() {
            let index = values_start + offset;
            *value = fields[index].parse().map_err(|_| {
                malformed(MalformedRecordKind::InvalidFloat {
                    field: index + 1,
                    value: fields[index].to_string(),
                })
            })?;
        }

        let accumulator = self.accumulators.entry(key).or_default();
        match section {
            Section::Electron => {
                accumulator.set_electron(shape_group(&values));
                self.rows_per_section[0] += 1;
            }
            Section::Positron => {
                accumulator.set_positron(shape_group(&values));
                self.rows_per_section[1] += 1;
            }
            Section::HighEnergy => {
                accumulator.set_high_energy(HighEnergyGroup {
                    b_electron: values[0],
                    b_positron: values[1],
                    anlj: values[2],
                    g: [values[3], values[4], values[5], values[6]],
                });
                self.rows_per_section[2] += 1;
            }
        }
        Ok(())
    }

    pub fn finish(self) -> Result<ParameterTable, TableLoadError> {
        let [electron_rows, positron_rows, high_energy_rows] = self.rows_per_section;
        debug!(
            electron_rows,
            positron_rows, high_energy_rows, "Finished scanning sectioned parameter source"
        );
        let table =
            ParameterTable::from_accumulators(self.accumulators, self.ionization_energy_tolerance)?;
        debug!(
            elements = table.element_count(),
            records = table.record_count(),
            "Built Bote-Salvat parameter table"
        );
        Ok(table)
    }
}

fn shape_group(values: &[f64; 7]) -> ShapeGroup {
    ShapeGroup {
        ionization_energy_ev: values[0],
        coefficients: [values[1], values[2], values[3], values[4], values[5]],
    }
}

/// The sectioned (published) file format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionedFile {
    /// Allowed relative difference between the section A and section D ionization energies.
    pub ionization_energy_tolerance: f64,
}

impl Default for SectionedFile {
    fn default() -> Self {
        Self {
            ionization_energy_tolerance: DEFAULT_IONIZATION_ENERGY_TOLERANCE,
        }
    }
}

impl SectionedFile {
    pub fn new(ionization_energy_tolerance: f64) -> Self {
        Self {
            ionization_energy_tolerance,
        }
    }

    /// Parses an in-memory sequence of lines.
    ///
    /// # Arguments
    ///
    /// * `lines` - The lines of a sectioned source, with or without surrounding whitespace.
    ///
    /// # Return
    ///
    /// Returns the complete table, or the first error met; no partial table is built.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<ParameterTable, TableLoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = SectionedParser::new(self.ionization_energy_tolerance);
        for (index, line) in lines.into_iter().enumerate() {
            parser.feed(index + 1, line.as_ref())?;
        }
        parser.finish()
    }
}

impl ParameterFile for SectionedFile {
    #[instrument(skip_all, name = "read_sectioned")]
    fn read_from(&self, reader: &mut impl BufRead) -> Result<ParameterTable, TableLoadError> {
        let mut parser = SectionedParser::new(self.ionization_energy_tolerance);
        for (index, line) in reader.lines().enumerate() {
            parser.feed(index + 1, &line?)?;
        }
        parser.finish()
    }
}
