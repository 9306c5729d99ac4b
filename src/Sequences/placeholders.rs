//! Stand-in secondary structure and conservation figures.
//!
//! These are fixed composition formulas, not predictions. Every record carries
//! `method = "placeholder"` so a consumer cannot mistake them for the output of
//! a folding or alignment tool.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Utils::numeric::{percent, round_to};

pub const PLACEHOLDER_METHOD: &str = "placeholder";

const HELIX_FORMERS: &str = "AELMQKRH";
const SHEET_FORMERS: &str = "VIYFWT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryStructure {
    pub method: String,
    /// state name -> percent of the sequence
    pub fractions: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationScore {
    pub method: String,
    pub score: f64,
    pub dominant_symbol: Option<String>,
}

fn count_in(sequence: &str, set: &str) -> usize {
    sequence.chars().filter(|c| set.contains(*c)).count()
}

/// Helix / sheet / coil shares from residue propensity classes.
pub fn protein_secondary_structure(sequence: &str) -> SecondaryStructure {
    let length = sequence.chars().count();
    let helix = percent(count_in(sequence, HELIX_FORMERS), length);
    let sheet = percent(count_in(sequence, SHEET_FORMERS), length);
    let coil = if length == 0 {
        0.0
    } else {
        round_to(100.0 - helix - sheet, 2)
    };
    SecondaryStructure {
        method: PLACEHOLDER_METHOD.to_string(),
        fractions: BTreeMap::from([
            ("helix".to_string(), helix),
            ("sheet".to_string(), sheet),
            ("coil".to_string(), coil),
        ]),
    }
}

/// Paired share taken as the GC content, the rest unpaired.
pub fn nucleic_secondary_structure(gc_content: f64, length: usize) -> SecondaryStructure {
    let unpaired = if length == 0 {
        0.0
    } else {
        round_to(100.0 - gc_content, 2)
    };
    SecondaryStructure {
        method: PLACEHOLDER_METHOD.to_string(),
        fractions: BTreeMap::from([
            ("paired".to_string(), gc_content),
            ("unpaired".to_string(), unpaired),
        ]),
    }
}

/// Share of the most frequent symbol. Ties go to the alphabetically first symbol.
pub fn conservation_score(composition: &BTreeMap<String, usize>) -> ConservationScore {
    let total: usize = composition.values().sum();
    // max_by_key keeps the last maximum, so walk the map backwards
    let dominant = composition
        .iter()
        .rev()
        .max_by_key(|(_, count)| **count)
        .filter(|(_, count)| **count > 0);
    ConservationScore {
        method: PLACEHOLDER_METHOD.to_string(),
        score: dominant.map_or(0.0, |(_, count)| percent(*count, total)),
        dominant_symbol: dominant.map(|(symbol, _)| symbol.clone()),
    }
}
