use super::error::TableLoadError;
use super::record::{AccumulatorError, ParameterRecord, RecordAccumulator};
use crate::core::shell::Subshell;
use std::collections::BTreeMap;

/// Immutable Bote–Salvat coefficient table keyed by atomic number, then subshell.
///
/// A table is only ever produced whole: by a file reader, by
/// [`FromIterator`], or by [`ParameterTable::from_records`]. No API mutates it
/// afterwards, so a shared reference can be read from any number of threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterTable {
    elements: BTreeMap<u32, BTreeMap<Subshell, ParameterRecord>>,
}

impl ParameterTable {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (u32, Subshell, ParameterRecord)>,
    {
        records.into_iter().collect()
    }

    pub(crate) fn from_accumulators(
        accumulators: BTreeMap<(u32, Subshell), RecordAccumulator>,
        ionization_energy_tolerance: f64,
    ) -> Result<Self, TableLoadError> {
        let mut elements: BTreeMap<u32, BTreeMap<Subshell, ParameterRecord>> = BTreeMap::new();
        for ((atomic_number, subshell), accumulator) in accumulators {
            let record = accumulator
                .finish(ionization_energy_tolerance)
                .map_err(|e| match e {
                    AccumulatorError::Missing(missing) => TableLoadError::IncompleteRecord {
                        atomic_number,
                        subshell,
                        missing,
                    },
                    AccumulatorError::IonizationEnergyMismatch {
                        electron_ev,
                        positron_ev,
                    } => TableLoadError::InconsistentIonizationEnergy {
                        atomic_number,
                        subshell,
                        electron_ev,
                        positron_ev,
                    },
                })?;
            elements
                .entry(atomic_number)
                .or_default()
                .insert(subshell, record);
        }
        Ok(Self { elements })
    }

    pub fn get(&self, atomic_number: u32, subshell: Subshell) -> Option<&ParameterRecord> {
        self.elements
            .get(&atomic_number)
            .and_then(|shells| shells.get(&subshell))
    }

    pub fn contains(&self, atomic_number: u32, subshell: Subshell) -> bool {
        self.get(atomic_number, subshell).is_some()
    }

    /// Atomic numbers present in the table, ascending.
    pub fn atomic_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.elements.keys().copied()
    }

    /// Subshells tabulated for `atomic_number`, innermost first. Empty for unknown elements.
    pub fn subshells(&self, atomic_number: u32) -> impl Iterator<Item = Subshell> + '_ {
        self.elements
            .get(&atomic_number)
            .into_iter()
            .flat_map(|shells| shells.keys().copied())
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn record_count(&self) -> usize {
        self.elements.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All records ordered by atomic number, then subshell.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Subshell, &ParameterRecord)> + '_ {
        self.elements.iter().flat_map(|(&atomic_number, shells)| {
            shells
                .iter()
                .map(move |(&subshell, record)| (atomic_number, subshell, record))
        })
    }
}

impl FromIterator<(u32, Subshell, ParameterRecord)> for ParameterTable {
    fn from_iter<T: IntoIterator<Item = (u32, Subshell, ParameterRecord)>>(iter: T) -> Self {
        let mut elements: BTreeMap<u32, BTreeMap<Subshell, ParameterRecord>> = BTreeMap::new();
        for (atomic_number, subshell, record) in iter {
            elements
                .entry(atomic_number)
                .or_default()
                .insert(subshell, record);
        }
        Self { elements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::record::{HighEnergyGroup, ShapeGroup};

    fn record(ionization_energy_ev: f64) -> ParameterRecord {
        ParameterRecord {
            ionization_energy_ev,
            a: [1.0; 5],
            d: [1.0; 5],
            b_electron: 1.0,
            b_positron: 1.0,
            anlj: 1.0,
            g: [0.0; 4],
        }
    }

    fn sample_table() -> ParameterTable {
        ParameterTable::from_records([
            (29, Subshell::L1, record(1096.0)),
            (1, Subshell::K, record(13.6)),
            (29, Subshell::K, record(8979.0)),
        ])
    }

    #[test]
    fn get_returns_record_for_known_pair() {
        let table = sample_table();
        assert_eq!(table.get(29, Subshell::K).unwrap().ionization_energy_ev, 8979.0);
        assert!(table.contains(1, Subshell::K));
    }

    #[test]
    fn get_returns_none_for_unknown_element_or_subshell() {
        let table = sample_table();
        assert!(table.get(2, Subshell::K).is_none());
        assert!(table.get(1, Subshell::L1).is_none());
    }

    #[test]
    fn counts_report_elements_and_records() {
        let table = sample_table();
        assert_eq!(table.element_count(), 2);
        assert_eq!(table.record_count(), 3);
        assert!(!table.is_empty());
        assert!(ParameterTable::default().is_empty());
    }

    #[test]
    fn iteration_is_ordered_by_atomic_number_then_subshell() {
        let table = sample_table();
        let keys: Vec<_> = table.iter().map(|(z, s, _)| (z, s)).collect();
        assert_eq!(
            keys,
            vec![(1, Subshell::K), (29, Subshell::K), (29, Subshell::L1)]
        );
        assert_eq!(table.atomic_numbers().collect::<Vec<_>>(), vec![1, 29]);
        assert_eq!(
            table.subshells(29).collect::<Vec<_>>(),
            vec![Subshell::K, Subshell::L1]
        );
        assert_eq!(table.subshells(92).count(), 0);
    }

    #[test]
    fn from_accumulators_rejects_incomplete_records() {
        let mut accumulator = RecordAccumulator::default();
        accumulator.set_electron(ShapeGroup {
            ionization_energy_ev: 10.0,
            coefficients: [0.0; 5],
        });
        accumulator.set_high_energy(HighEnergyGroup {
            b_electron: 0.0,
            b_positron: 0.0,
            anlj: 0.0,
            g: [0.0; 4],
        });
        let mut accumulators = BTreeMap::new();
        accumulators.insert((8, Subshell::K), accumulator);

        let result = ParameterTable::from_accumulators(accumulators, 1e-9);
        match result {
            Err(TableLoadError::IncompleteRecord {
                atomic_number,
                subshell,
                missing,
            }) => {
                assert_eq!(atomic_number, 8);
                assert_eq!(subshell, Subshell::K);
                assert_eq!(missing, vec!["d1..d5"]);
            }
            other => panic!("expected IncompleteRecord, got {other:?}"),
        }
    }
}
