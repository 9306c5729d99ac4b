//! # SMILES atom counter
//!
//! Recovers element symbols from a SMILES string without building a molecular
//! graph. Structural syntax (branches, brackets, bonds, stereo and charge marks)
//! and ring-closure digits are stripped, then every uppercase letter starts an
//! atom and a directly following lowercase letter is glued to it (`Cl`, `Br`).
//!
//! ## Known limitation
//! Aromatic atoms written in lowercase (`c1ccccc1`) are never counted on their
//! own, and a lowercase aromatic atom right after an uppercase one is read as
//! part of a two-letter symbol (`Cc` in `CCc1ccccc1`). Downstream numbers rely
//! on this behaviour, so it is kept.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::molmass::weight_of_counts;

const STRUCTURAL_CHARS: [char; 11] = ['(', ')', '[', ']', '=', '-', '#', '@', '+', '\\', '/'];

/// Element symbol -> number of atoms, as recovered from one SMILES string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AtomProfile {
    pub atom_counts: BTreeMap<String, usize>,
    pub atom_count: usize,
}

impl AtomProfile {
    pub fn from_smiles(smiles: &str) -> Self {
        let atom_counts = count_atoms(&simplify_smiles(smiles));
        let atom_count = atom_counts.values().sum();
        Self {
            atom_counts,
            atom_count,
        }
    }

    pub fn count_of(&self, symbol: &str) -> usize {
        self.atom_counts.get(symbol).copied().unwrap_or(0)
    }

    /// Hill-free canonical formula: symbols in ascending byte order, a count of
    /// one is implicit.
    pub fn molecular_formula(&self) -> String {
        let mut formula = String::new();
        for (atom, count) in &self.atom_counts {
            formula.push_str(atom);
            if *count != 1 {
                formula.push_str(&count.to_string());
            }
        }
        formula
    }

    /// Weight of the profile in g/mol, 2 decimals; unknown symbols weigh nothing.
    pub fn molecular_weight(&self) -> f64 {
        weight_of_counts(&self.atom_counts)
    }
}

/// Result of the basic SMILES parse as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmilesSummary {
    pub atom_counts: BTreeMap<String, usize>,
    pub molecular_formula: String,
    pub molecular_weight: f64,
    pub atom_count: usize,
}

/// Removes bond, branch, bracket, stereo and charge characters and ring-closure digits.
pub fn simplify_smiles(smiles: &str) -> String {
    smiles
        .chars()
        .filter(|c| !STRUCTURAL_CHARS.contains(c) && !c.is_ascii_digit())
        .collect()
}

/// Counts atom symbols in an already simplified SMILES string.
pub fn count_atoms(simplified: &str) -> BTreeMap<String, usize> {
    let chars: Vec<char> = simplified.chars().collect();
    let mut counts = BTreeMap::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_uppercase() {
            let mut atom = chars[i].to_string();
            // two-letter element, e.g. Cl or Br
            if i + 1 < chars.len() && chars[i + 1].is_lowercase() {
                atom.push(chars[i + 1]);
                i += 1;
            }
            *counts.entry(atom).or_insert(0) += 1;
        }
        i += 1;
    }
    counts
}

/// Atom counts, canonical formula, weight and total atom count of a SMILES string.
pub fn parse_smiles_basic(smiles: &str) -> SmilesSummary {
    let profile = AtomProfile::from_smiles(smiles);
    SmilesSummary {
        molecular_formula: profile.molecular_formula(),
        molecular_weight: profile.molecular_weight(),
        atom_count: profile.atom_count,
        atom_counts: profile.atom_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ethanol() {
        let summary = parse_smiles_basic("CCO");
        let expected = BTreeMap::from([("C".to_string(), 2), ("O".to_string(), 1)]);
        assert_eq!(summary.atom_counts, expected);
        assert_eq!(summary.molecular_formula, "C2O");
        assert_relative_eq!(summary.molecular_weight, 40.02);
        assert_eq!(summary.atom_count, 3);
    }

    #[test]
    fn test_simplify_smiles() {
        assert_eq!(simplify_smiles("CC(=O)O"), "CCOO");
        assert_eq!(simplify_smiles("[NH4+]"), "NH");
        assert_eq!(simplify_smiles("F/C=C/F"), "FCCF");
        assert_eq!(simplify_smiles("C1CC[C@@H]1"), "CCCCH");
    }

    #[test]
    fn test_two_letter_symbols() {
        let profile = AtomProfile::from_smiles("ClCCBr");
        assert_eq!(profile.count_of("Cl"), 1);
        assert_eq!(profile.count_of("Br"), 1);
        assert_eq!(profile.count_of("C"), 2);
        assert_eq!(profile.molecular_formula(), "BrC2Cl");
    }

    #[test]
    fn test_aromatic_atoms_are_not_counted() {
        // benzene written in aromatic form has no uppercase letters at all
        let profile = AtomProfile::from_smiles("c1ccccc1");
        assert!(profile.atom_counts.is_empty());
        assert_eq!(profile.atom_count, 0);
        assert_eq!(profile.molecular_formula(), "");
        assert_eq!(profile.molecular_weight(), 0.0);
    }

    #[test]
    fn test_lowercase_after_uppercase_is_glued() {
        // toluene: the methyl C takes the first aromatic c with it
        let profile = AtomProfile::from_smiles("Cc1ccccc1");
        let expected = BTreeMap::from([("Cc".to_string(), 1)]);
        assert_eq!(profile.atom_counts, expected);
        // "Cc" is not an element, so nothing is weighed
        assert_eq!(profile.molecular_weight(), 0.0);
    }

    #[test]
    fn test_aspirin() {
        let summary = parse_smiles_basic("CC(=O)OC1=CC=CC=C1C(=O)O");
        assert_eq!(summary.atom_counts.get("C"), Some(&9));
        assert_eq!(summary.atom_counts.get("O"), Some(&4));
        assert_eq!(summary.molecular_formula, "C9O4");
        // 9*12.011 + 4*15.999
        assert_relative_eq!(summary.molecular_weight, 172.09);
    }

    #[test]
    fn test_empty_input() {
        let summary = parse_smiles_basic("");
        assert!(summary.atom_counts.is_empty());
        assert_eq!(summary.molecular_formula, "");
        assert_eq!(summary.molecular_weight, 0.0);
    }
}
