//! # Sequence profile
//!
//! Normalizes a DNA, RNA, gene or protein string (FASTA header, whitespace,
//! case), checks it against the alphabet of its type and derives composition,
//! weight and, for nucleotides, GC content and melting temperature.
//! Nucleotide and protein chains implement `SequenceCalculator`; `SequenceBody`
//! dispatches to them without boxing.
use enum_dispatch::enum_dispatch;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::orf::{OrfRecord, find_orfs};
use super::placeholders::{
    ConservationScore, SecondaryStructure, conservation_score, nucleic_secondary_structure,
    protein_secondary_structure,
};
use super::residue_weights::{
    DNA_ALPHABET, PROTEIN_ALPHABET, RNA_ALPHABET, WATER_WEIGHT, amino_acid_weight,
    nucleotide_weight,
};
use crate::Utils::numeric::{percent, round_to};

/// Below this length the Wallace rule is used for the melting temperature.
pub const SHORT_OLIGO_LENGTH: usize = 14;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SequenceError {
    #[error("Unsupported sequence type: {0}")]
    UnsupportedSequenceType(String),
    /// `position` indexes the normalized sequence.
    #[error("Invalid {sequence_type} sequence: character '{character}' at position {position}")]
    InvalidCharacter {
        sequence_type: SequenceType,
        character: char,
        position: usize,
    },
    #[error("Unknown analysis option: {0}")]
    UnknownOption(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceType {
    Dna,
    Rna,
    Protein,
    Gene,
}

impl SequenceType {
    pub fn alphabet(&self) -> &'static str {
        match self {
            SequenceType::Dna | SequenceType::Gene => DNA_ALPHABET,
            SequenceType::Rna => RNA_ALPHABET,
            SequenceType::Protein => PROTEIN_ALPHABET,
        }
    }

    pub fn is_nucleic(&self) -> bool {
        !matches!(self, SequenceType::Protein)
    }

    /// Types whose strings are scanned for ORFs.
    pub fn supports_orfs(&self) -> bool {
        matches!(self, SequenceType::Dna | SequenceType::Gene)
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SequenceType::Dna => write!(f, "DNA"),
            SequenceType::Rna => write!(f, "RNA"),
            SequenceType::Protein => write!(f, "protein"),
            SequenceType::Gene => write!(f, "gene"),
        }
    }
}

impl FromStr for SequenceType {
    type Err = SequenceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dna" => Ok(SequenceType::Dna),
            "rna" => Ok(SequenceType::Rna),
            "protein" => Ok(SequenceType::Protein),
            "gene" => Ok(SequenceType::Gene),
            _ => Err(SequenceError::UnsupportedSequenceType(s.to_string())),
        }
    }
}

/// Optional parts of a sequence analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SequenceOptions {
    pub secondary_structure: bool,
    pub gene_annotation: bool,
    pub conservation_analysis: bool,
}

impl SequenceOptions {
    pub fn all() -> Self {
        Self {
            secondary_structure: true,
            gene_annotation: true,
            conservation_analysis: true,
        }
    }

    /// Reads option names (`secondaryStructure`, `geneAnnotation`,
    /// `conservationAnalysis` or their snake_case forms).
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, SequenceError> {
        let mut options = Self::default();
        for name in names {
            match name.as_ref().trim() {
                "secondaryStructure" | "secondary_structure" => options.secondary_structure = true,
                "geneAnnotation" | "gene_annotation" => options.gene_annotation = true,
                "conservationAnalysis" | "conservation_analysis" => {
                    options.conservation_analysis = true
                }
                "" => {}
                other => return Err(SequenceError::UnknownOption(other.to_string())),
            }
        }
        Ok(options)
    }
}

/// Drops a leading FASTA header line, all whitespace, and uppercases the rest.
pub fn normalize_sequence(raw: &str) -> String {
    let trimmed = raw.trim_start();
    let body = if trimmed.starts_with('>') {
        trimmed.split_once('\n').map_or("", |(_, rest)| rest)
    } else {
        trimmed
    };
    body.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Checks every symbol against the alphabet of `sequence_type`. Reports the first offender.
/// `position` is the 0-based index in the normalized sequence (FASTA header and
/// whitespace already removed), not in the caller's raw text.
pub fn validate_sequence(sequence: &str, sequence_type: SequenceType) -> Result<(), SequenceError> {
    let alphabet = sequence_type.alphabet();
    match sequence
        .chars()
        .enumerate()
        .find(|(_, c)| !alphabet.contains(*c))
    {
        Some((position, character)) => Err(SequenceError::InvalidCharacter {
            sequence_type,
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Symbol counts, only for symbols that occur.
pub fn composition(sequence: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for c in sequence.chars() {
        *counts.entry(c.to_string()).or_insert(0) += 1;
    }
    counts
}

#[enum_dispatch]
pub trait SequenceCalculator {
    fn sequence(&self) -> &str;
    fn length(&self) -> usize {
        self.sequence().chars().count()
    }
    fn composition(&self) -> BTreeMap<String, usize> {
        composition(self.sequence())
    }
    /// g/mol, 2 decimals
    fn molecular_weight(&self) -> f64;
    fn secondary_structure(&self) -> SecondaryStructure;
}

/// DNA, gene or RNA strand.
#[derive(Debug, Clone, PartialEq)]
pub struct NucleicAcid {
    pub sequence: String,
}

impl NucleicAcid {
    pub fn new(sequence: String) -> Self {
        Self { sequence }
    }

    fn count_of(&self, bases: &str) -> usize {
        self.sequence.chars().filter(|c| bases.contains(*c)).count()
    }

    /// (G + C) / length in percent, 0 for an empty strand.
    pub fn gc_content(&self) -> f64 {
        percent(self.count_of("GC"), self.length())
    }

    /// Wallace rule below 14 nt, GC-corrected formula above, 1 decimal.
    pub fn melting_temperature(&self) -> f64 {
        let length = self.length();
        let at_count = self.count_of("AT") as f64;
        let gc_count = self.count_of("GC") as f64;
        let tm = if length < SHORT_OLIGO_LENGTH {
            2.0 * at_count + 4.0 * gc_count
        } else {
            64.9 + 41.0 * (gc_count - 16.4) / length as f64
        };
        round_to(tm, 1)
    }
}

impl SequenceCalculator for NucleicAcid {
    fn sequence(&self) -> &str {
        &self.sequence
    }

    fn molecular_weight(&self) -> f64 {
        let total: f64 = self.sequence.chars().map(nucleotide_weight).sum();
        round_to(total, 2)
    }

    fn secondary_structure(&self) -> SecondaryStructure {
        nucleic_secondary_structure(self.gc_content(), self.length())
    }
}

/// Amino acid chain in one-letter code.
#[derive(Debug, Clone, PartialEq)]
pub struct Protein {
    pub sequence: String,
}

impl Protein {
    pub fn new(sequence: String) -> Self {
        Self { sequence }
    }
}

impl SequenceCalculator for Protein {
    fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Residue weights minus one water per peptide bond. An empty chain weighs 0.
    fn molecular_weight(&self) -> f64 {
        let length = self.length();
        if length == 0 {
            return 0.0;
        }
        let residues: f64 = self.sequence.chars().map(amino_acid_weight).sum();
        round_to(residues - (length - 1) as f64 * WATER_WEIGHT, 2)
    }

    fn secondary_structure(&self) -> SecondaryStructure {
        protein_secondary_structure(&self.sequence)
    }
}

#[enum_dispatch(SequenceCalculator)]
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceBody {
    NucleicAcid(NucleicAcid),
    Protein(Protein),
}

impl SequenceBody {
    pub fn new(sequence: String, sequence_type: SequenceType) -> Self {
        if sequence_type.is_nucleic() {
            SequenceBody::NucleicAcid(NucleicAcid::new(sequence))
        } else {
            SequenceBody::Protein(Protein::new(sequence))
        }
    }
}

/// Everything derived from one sequence string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceProfile {
    pub sequence_type: SequenceType,
    pub sequence: String,
    pub length: usize,
    pub composition: BTreeMap<String, usize>,
    pub molecular_weight: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gc_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub melting_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub orfs: Option<Vec<OrfRecord>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secondary_structure: Option<SecondaryStructure>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub conservation: Option<ConservationScore>,
}

impl SequenceProfile {
    /// Normalizes, validates and profiles `raw`. ORFs shorter than
    /// `min_orf_length` nucleotides are dropped.
    pub fn build(
        raw: &str,
        sequence_type: SequenceType,
        options: &SequenceOptions,
        min_orf_length: usize,
    ) -> Result<Self, SequenceError> {
        let sequence = normalize_sequence(raw);
        validate_sequence(&sequence, sequence_type)?;
        info!("profiling {} sequence of length {}", sequence_type, sequence.len());

        let body = SequenceBody::new(sequence.clone(), sequence_type);
        let composition = body.composition();

        let (gc_content, melting_temp) = match &body {
            SequenceBody::NucleicAcid(strand) => {
                (Some(strand.gc_content()), Some(strand.melting_temperature()))
            }
            SequenceBody::Protein(_) => (None, None),
        };

        let orfs = if options.gene_annotation && sequence_type.supports_orfs() {
            let orfs = find_orfs(&sequence, min_orf_length);
            debug!("found {} ORFs of at least {} nt", orfs.len(), min_orf_length);
            Some(orfs)
        } else {
            None
        };

        let secondary_structure = options
            .secondary_structure
            .then(|| body.secondary_structure());
        let conservation = options
            .conservation_analysis
            .then(|| conservation_score(&composition));

        Ok(Self {
            sequence_type,
            length: body.length(),
            molecular_weight: body.molecular_weight(),
            composition,
            gc_content,
            melting_temp,
            orfs,
            secondary_structure,
            conservation,
            sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_sequence() {
        assert_eq!(normalize_sequence(">seq1 test\nacgt\nAC GT\n"), "ACGTACGT");
        assert_eq!(normalize_sequence("  ggcc "), "GGCC");
        assert_eq!(normalize_sequence(">header only"), "");
    }

    #[test]
    fn test_validate_sequence() {
        assert!(validate_sequence("ACGT", SequenceType::Dna).is_ok());
        assert!(validate_sequence("ACGU", SequenceType::Rna).is_ok());
        let err = validate_sequence("ACGU", SequenceType::Dna).unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidCharacter {
                sequence_type: SequenceType::Dna,
                character: 'U',
                position: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid DNA sequence: character 'U' at position 3"
        );
        assert!(validate_sequence("MKTB", SequenceType::Protein).is_err());
        assert!(validate_sequence("ACGT", SequenceType::Gene).is_ok());
    }

    #[test]
    fn test_invalid_position_counts_normalized_symbols() {
        // header and line breaks are not counted
        let err = SequenceProfile::build(
            ">seq1 sample\nac\n gu\n",
            SequenceType::Dna,
            &SequenceOptions::default(),
            150,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidCharacter {
                sequence_type: SequenceType::Dna,
                character: 'U',
                position: 3
            }
        );
    }

    #[test]
    fn test_sequence_type_from_str() {
        assert_eq!("DNA".parse::<SequenceType>(), Ok(SequenceType::Dna));
        assert_eq!("gene".parse::<SequenceType>(), Ok(SequenceType::Gene));
        assert_eq!(
            "peptide".parse::<SequenceType>(),
            Err(SequenceError::UnsupportedSequenceType("peptide".to_string()))
        );
    }

    #[test]
    fn test_options_from_names() {
        let options = SequenceOptions::from_names(&["geneAnnotation", "conservation_analysis"]).unwrap();
        assert!(options.gene_annotation);
        assert!(options.conservation_analysis);
        assert!(!options.secondary_structure);
        assert_eq!(
            SequenceOptions::from_names(&["folding"]),
            Err(SequenceError::UnknownOption("folding".to_string()))
        );
        let none: [&str; 0] = [];
        assert_eq!(SequenceOptions::from_names(&none), Ok(SequenceOptions::default()));
    }

    #[test]
    fn test_gc_content() {
        let strand = NucleicAcid::new("GGCC".to_string());
        assert_relative_eq!(strand.gc_content(), 100.0);
        assert_eq!(strand.composition(), BTreeMap::from([("C".to_string(), 2), ("G".to_string(), 2)]));
        assert_eq!(NucleicAcid::new("AATT".to_string()).gc_content(), 0.0);
        assert_eq!(NucleicAcid::new(String::new()).gc_content(), 0.0);
    }

    #[test]
    fn test_melting_temperature() {
        // Wallace rule: 2*2 + 4*2
        assert_relative_eq!(NucleicAcid::new("AGCT".to_string()).melting_temperature(), 12.0);
        // 20 nt, 10 GC: 64.9 + 41*(10-16.4)/20 = 51.78
        let strand = NucleicAcid::new("ACGTACGTACGTACGTACGT".to_string());
        assert_relative_eq!(strand.melting_temperature(), 51.8);
        assert_eq!(NucleicAcid::new(String::new()).melting_temperature(), 0.0);
    }

    #[test]
    fn test_nucleic_weight() {
        let strand = NucleicAcid::new("ATGC".to_string());
        // 331.2 + 322.2 + 347.2 + 307.2
        assert_relative_eq!(strand.molecular_weight(), 1307.8);
        let rna = SequenceBody::new("AU".to_string(), SequenceType::Rna);
        assert_relative_eq!(rna.molecular_weight(), 639.4);
    }

    #[test]
    fn test_protein_weight() {
        // G + A - one water: 75.07 + 89.09 - 18.015 = 146.145
        let dipeptide = Protein::new("GA".to_string());
        assert!((dipeptide.molecular_weight() - 146.145).abs() < 1e-2);
        // a single residue loses no water
        assert_relative_eq!(Protein::new("W".to_string()).molecular_weight(), 204.23);
        assert_eq!(Protein::new(String::new()).molecular_weight(), 0.0);
    }

    #[test]
    fn test_profile_for_protein_has_no_nucleotide_fields() {
        let profile =
            SequenceProfile::build("MKT", SequenceType::Protein, &SequenceOptions::all(), 150).unwrap();
        assert_eq!(profile.gc_content, None);
        assert_eq!(profile.melting_temp, None);
        assert_eq!(profile.orfs, None);
        assert!(profile.secondary_structure.is_some());
        assert!(profile.conservation.is_some());
    }

    #[test]
    fn test_rna_is_never_scanned_for_orfs() {
        let profile =
            SequenceProfile::build("AUGAAAUAA", SequenceType::Rna, &SequenceOptions::all(), 3).unwrap();
        assert_eq!(profile.orfs, None);
    }
}
