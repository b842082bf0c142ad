//! Small parameter tables shared by the unit tests.
//!
//! The Au K-shell coefficients are not the published ones; a1 and d1 are chosen so
//! that the DWBA and scaled PWBA branches meet at U = 16, which lets the regime
//! switch be tested for continuity. Z = 99 carries every subshell from K to M5, with
//! Roman labels in the high-energy section.

use super::record::ParameterRecord;
use super::table::ParameterTable;
use crate::core::shell::Subshell;

pub const SECTIONED_SAMPLE: &str = "\
Bote and Salvat (2009), ionization of K, L and M subshells
Table 1. Electron DWBA coefficients
Z,S,,a1,a2,a3,a4,a5
1,K,1.360E+01,1.000E-01,1.000E-03,0.000E+00,0.000E+00,0.000E+00
,,,,,,,
6,K,2.838E+02,5.000E-02,2.000E-03,1.000E-02,0.000E+00,0.000E+00
L1,1.600E+01,3.000E-01,1.000E-03,0.000E+00,0.000E+00,0.000E+00
,,,,,,,
79,K,8.096E+04,6.679E-04,0.000E+00,0.000E+00,0.000E+00,0.000E+00
L1,1.4353E+04,2.100E-01,1.000E-03,0.000E+00,0.000E+00,0.000E+00
L2,1.3734E+04,1.900E-01,1.000E-03,0.000E+00,0.000E+00,0.000E+00
,,,,,,,
99,K,1.3949E+05,1.000E-02,2.000E-03,0.000E+00,0.000E+00,0.000E+00
L1,2.7574E+04,2.000E-02,2.000E-03,1.000E-02,0.000E+00,0.000E+00
L2,2.6654E+04,3.000E-02,2.000E-03,2.000E-02,0.000E+00,0.000E+00
L3,2.0835E+04,4.000E-02,2.000E-03,0.000E+00,0.000E+00,0.000E+00
M1,7.094E+03,5.000E-02,2.000E-03,1.000E-02,0.000E+00,1.000E-01
M2,6.725E+03,6.000E-02,2.000E-03,2.000E-02,0.000E+00,1.000E-01
M3,5.637E+03,7.000E-02,2.000E-03,0.000E+00,0.000E+00,1.000E-01
M4,5.114E+03,8.000E-02,2.000E-03,1.000E-02,0.000E+00,1.000E-01
M5,4.892E+03,9.000E-02,2.000E-03,2.000E-02,0.000E+00,1.000E-01

Table 1 (continued). Positron DWBA coefficients
Z,S,,d1,d2,d3,d4,d5
1,K,1.360E+01,3.000E-01,0.000E+00,0.000E+00,0.000E+00,0.000E+00

6,K,2.838E+02,4.000E-01,0.000E+00,0.000E+00,0.000E+00,0.000E+00
L1,1.600E+01,5.000E-01,0.000E+00,0.000E+00,0.000E+00,0.000E+00

79,K,8.096E+04,2.596E-02,0.000E+00,0.000E+00,0.000E+00,0.000E+00
L1,1.4353E+04,4.000E-01,0.000E+00,0.000E+00,0.000E+00,3.000E-02
L2,1.3734E+04,4.100E-01,0.000E+00,0.000E+00,0.000E+00,0.000E+00

99,K,1.3949E+05,2.000E-02,0.000E+00,0.000E+00,0.000E+00,0.000E+00
L1,2.7574E+04,3.000E-02,0.000E+00,5.000E-03,0.000E+00,0.000E+00
L2,2.6654E+04,4.000E-02,0.000E+00,0.000E+00,0.000E+00,0.000E+00
L3,2.0835E+04,5.000E-02,0.000E+00,5.000E-03,0.000E+00,0.000E+00
M1,7.094E+03,6.000E-02,0.000E+00,0.000E+00,1.000E-02,0.000E+00
M2,6.725E+03,7.000E-02,0.000E+00,5.000E-03,1.000E-02,0.000E+00
M3,5.637E+03,8.000E-02,0.000E+00,0.000E+00,1.000E-02,0.000E+00
M4,5.114E+03,9.000E-02,0.000E+00,5.000E-03,1.000E-02,0.000E+00
M5,4.892E+03,1.000E-01,0.000E+00,0.000E+00,1.000E-02,0.000E+00
Table 2. High-energy coefficients
Z,S,b-,b+,Anlj,g1,g2,g3,g4
1,K,1.000E+00,1.000E+00,1.000E-01,0.000E+00,0.000E+00,0.000E+00,0.000E+00

6,K,1.100E+00,8.000E-01,1.000E-04,1.000E-01,2.000E+00,0.000E+00,0.000E+00
L1,1.000E+00,7.000E-01,1.000E-03,1.000E-01,2.000E+00,0.000E+00,0.000E+00

79,K,1.200E+00,9.000E-01,2.000E-08,3.000E-01,-5.000E-01,2.000E-01,1.000E-01
L1,1.300E+00,9.500E-01,1.000E-07,1.000E-01,1.000E+00,0.000E+00,4.000E-02
L2,1.300E+00,9.500E-01,1.100E-07,1.000E-01,1.000E+00,0.000E+00,0.000E+00

99,K,1.100E+00,8.000E-01,1.000E-08,1.000E-01,1.000E+00,0.000E+00,0.000E+00
LI,1.200E+00,8.500E-01,2.000E-08,1.000E-01,1.000E+00,0.000E+00,2.000E-02
LII,1.300E+00,8.000E-01,3.000E-08,1.000E-01,1.000E+00,0.000E+00,0.000E+00
LIII,1.100E+00,8.500E-01,4.000E-08,1.000E-01,1.000E+00,0.000E+00,2.000E-02
MI,1.200E+00,8.000E-01,5.000E-08,1.000E-01,1.000E+00,0.000E+00,0.000E+00
MII,1.300E+00,8.500E-01,6.000E-08,1.000E-01,1.000E+00,0.000E+00,2.000E-02
MIII,1.100E+00,8.000E-01,7.000E-08,1.000E-01,1.000E+00,0.000E+00,0.000E+00
MIV,1.200E+00,8.500E-01,8.000E-08,1.000E-01,1.000E+00,0.000E+00,2.000E-02
MV,1.300E+00,8.000E-01,9.000E-08,1.000E-01,1.000E+00,0.000E+00,0.000E+00
Table 3. End of data
";

/// The table [`SECTIONED_SAMPLE`] describes.
pub fn sectioned_sample_table() -> ParameterTable {
    ParameterTable::from_records([
        (
            1,
            Subshell::K,
            ParameterRecord {
                ionization_energy_ev: 1.360e1,
                a: [1.0e-1, 1.0e-3, 0.0, 0.0, 0.0],
                d: [3.0e-1, 0.0, 0.0, 0.0, 0.0],
                b_electron: 1.0,
                b_positron: 1.0,
                anlj: 1.0e-1,
                g: [0.0, 0.0, 0.0, 0.0],
            },
        ),
        (
            6,
            Subshell::K,
            ParameterRecord {
                ionization_energy_ev: 2.838e2,
                a: [5.0e-2, 2.0e-3, 1.0e-2, 0.0, 0.0],
                d: [4.0e-1, 0.0, 0.0, 0.0, 0.0],
                b_electron: 1.1,
                b_positron: 8.0e-1,
                anlj: 1.0e-4,
                g: [1.0e-1, 2.0, 0.0, 0.0],
            },
        ),
        (
            6,
            Subshell::L1,
            ParameterRecord {
                ionization_energy_ev: 1.6e1,
                a: [3.0e-1, 1.0e-3, 0.0, 0.0, 0.0],
                d: [5.0e-1, 0.0, 0.0, 0.0, 0.0],
                b_electron: 1.0,
                b_positron: 7.0e-1,
                anlj: 1.0e-3,
                g: [1.0e-1, 2.0, 0.0, 0.0],
            },
        ),
        (79, Subshell::K, gold_k_record()),
        (
            79,
            Subshell::L1,
            ParameterRecord {
                ionization_energy_ev: 1.4353e4,
                a: [2.1e-1, 1.0e-3, 0.0, 0.0, 0.0],
                d: [4.0e-1, 0.0, 0.0, 0.0, 3.0e-2],
                b_electron: 1.3,
                b_positron: 9.5e-1,
                anlj: 1.0e-7,
                g: [1.0e-1, 1.0, 0.0, 4.0e-2],
            },
        ),
        (
            79,
            Subshell::L2,
            ParameterRecord {
                ionization_energy_ev: 1.3734e4,
                a: [1.9e-1, 1.0e-3, 0.0, 0.0, 0.0],
                d: [4.1e-1, 0.0, 0.0, 0.0, 0.0],
                b_electron: 1.3,
                b_positron: 9.5e-1,
                anlj: 1.1e-7,
                g: [1.0e-1, 1.0, 0.0, 0.0],
            },
        ),
    ]
    .into_iter()
    .chain(einsteinium_records()))
}

// (subshell, I, a1..a5, d1..d5, [b-, b+, Anlj, g1..g4])
#[allow(clippy::type_complexity)]
const EINSTEINIUM: [(Subshell, f64, [f64; 5], [f64; 5], [f64; 7]); 9] = [
    (
        Subshell::K,
        1.3949e5,
        [1.0e-2, 2.0e-3, 0.0, 0.0, 0.0],
        [2.0e-2, 0.0, 0.0, 0.0, 0.0],
        [1.1, 0.8, 1.0e-8, 0.1, 1.0, 0.0, 0.0],
    ),
    (
        Subshell::L1,
        2.7574e4,
        [2.0e-2, 2.0e-3, 1.0e-2, 0.0, 0.0],
        [3.0e-2, 0.0, 5.0e-3, 0.0, 0.0],
        [1.2, 0.85, 2.0e-8, 0.1, 1.0, 0.0, 2.0e-2],
    ),
    (
        Subshell::L2,
        2.6654e4,
        [3.0e-2, 2.0e-3, 2.0e-2, 0.0, 0.0],
        [4.0e-2, 0.0, 0.0, 0.0, 0.0],
        [1.3, 0.8, 3.0e-8, 0.1, 1.0, 0.0, 0.0],
    ),
    (
        Subshell::L3,
        2.0835e4,
        [4.0e-2, 2.0e-3, 0.0, 0.0, 0.0],
        [5.0e-2, 0.0, 5.0e-3, 0.0, 0.0],
        [1.1, 0.85, 4.0e-8, 0.1, 1.0, 0.0, 2.0e-2],
    ),
    (
        Subshell::M1,
        7.094e3,
        [5.0e-2, 2.0e-3, 1.0e-2, 0.0, 1.0e-1],
        [6.0e-2, 0.0, 0.0, 1.0e-2, 0.0],
        [1.2, 0.8, 5.0e-8, 0.1, 1.0, 0.0, 0.0],
    ),
    (
        Subshell::M2,
        6.725e3,
        [6.0e-2, 2.0e-3, 2.0e-2, 0.0, 1.0e-1],
        [7.0e-2, 0.0, 5.0e-3, 1.0e-2, 0.0],
        [1.3, 0.85, 6.0e-8, 0.1, 1.0, 0.0, 2.0e-2],
    ),
    (
        Subshell::M3,
        5.637e3,
        [7.0e-2, 2.0e-3, 0.0, 0.0, 1.0e-1],
        [8.0e-2, 0.0, 0.0, 1.0e-2, 0.0],
        [1.1, 0.8, 7.0e-8, 0.1, 1.0, 0.0, 0.0],
    ),
    (
        Subshell::M4,
        5.114e3,
        [8.0e-2, 2.0e-3, 1.0e-2, 0.0, 1.0e-1],
        [9.0e-2, 0.0, 5.0e-3, 1.0e-2, 0.0],
        [1.2, 0.85, 8.0e-8, 0.1, 1.0, 0.0, 2.0e-2],
    ),
    (
        Subshell::M5,
        4.892e3,
        [9.0e-2, 2.0e-3, 2.0e-2, 0.0, 1.0e-1],
        [1.0e-1, 0.0, 0.0, 1.0e-2, 0.0],
        [1.3, 0.8, 9.0e-8, 0.1, 1.0, 0.0, 0.0],
    ),
];

fn einsteinium_records() -> impl Iterator<Item = (u32, Subshell, ParameterRecord)> {
    EINSTEINIUM.into_iter().map(|(subshell, ionization_energy_ev, a, d, high)| {
        let [b_electron, b_positron, anlj, g1, g2, g3, g4] = high;
        (
            99,
            subshell,
            ParameterRecord {
                ionization_energy_ev,
                a,
                d,
                b_electron,
                b_positron,
                anlj,
                g: [g1, g2, g3, g4],
            },
        )
    })
}

pub fn gold_k_record() -> ParameterRecord {
    ParameterRecord {
        ionization_energy_ev: 8.096e4,
        a: [6.679e-4, 0.0, 0.0, 0.0, 0.0],
        d: [2.596e-2, 0.0, 0.0, 0.0, 0.0],
        b_electron: 1.2,
        b_positron: 9.0e-1,
        anlj: 2.0e-8,
        g: [3.0e-1, -5.0e-1, 2.0e-1, 1.0e-1],
    }
}
