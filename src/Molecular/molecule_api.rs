//! # Molecule analysis entry point
//!
//! ## Aim
//! Takes a molecular string with an explicit kind tag (SMILES, InChI or plain
//! formula) and returns a flat report record. The caller always gets a record
//! back: unsupported kinds produce `success = false` with a message instead of
//! an error value, so a request layer can serialize the report as is.
//!
//! ## Per kind
//! - `smiles`: atom counts, canonical formula, weight, atom total and all
//!   heuristic descriptors from `properties`
//! - `inchi`: the formula layer (first `/C…` or `/H…` block) and its weight, when present
//! - `formula`: the weight of the formula
//!
//! ## Usage
//! ```rust
//! use ChemSeq::Molecular::molecule_api::analyze_molecule;
//! let report = analyze_molecule("CCO", "smiles");
//! assert!(report.success);
//! assert_eq!(report.molecular_formula.as_deref(), Some("C2O"));
//! ```
use log::{error, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

use super::molmass::calculate_weight;
use super::properties::{PropertyEstimate, estimate_properties};
use super::smiles_parser::parse_smiles_basic;
use super::validators::{validate_inchi, validate_smiles};

static INCHI_FORMULA_LAYER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/([CH][0-9]*[A-Z][0-9A-Za-z]*)").expect("inchi formula pattern")
});

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoleculeError {
    #[error("Unsupported input type: {0}")]
    UnsupportedInputType(String),
}

/// Kind tag supplied by the caller; never guessed from the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Smiles,
    Inchi,
    Formula,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Smiles => "smiles",
            InputKind::Inchi => "inchi",
            InputKind::Formula => "formula",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = MoleculeError;
    /// Case-insensitive: "SMILES" and "smiles" are the same kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smiles" => Ok(InputKind::Smiles),
            "inchi" => Ok(InputKind::Inchi),
            "formula" => Ok(InputKind::Formula),
            _ => Err(MoleculeError::UnsupportedInputType(s.to_string())),
        }
    }
}

/// A molecular string together with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MolecularInput {
    Smiles(String),
    Inchi(String),
    Formula(String),
}

impl MolecularInput {
    pub fn new(value: &str, input_type: &str) -> Result<Self, MoleculeError> {
        let input = match input_type.parse::<InputKind>()? {
            InputKind::Smiles => MolecularInput::Smiles(value.to_string()),
            InputKind::Inchi => MolecularInput::Inchi(value.to_string()),
            InputKind::Formula => MolecularInput::Formula(value.to_string()),
        };
        Ok(input)
    }

    pub fn kind(&self) -> InputKind {
        match self {
            MolecularInput::Smiles(_) => InputKind::Smiles,
            MolecularInput::Inchi(_) => InputKind::Inchi,
            MolecularInput::Formula(_) => InputKind::Formula,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            MolecularInput::Smiles(v) | MolecularInput::Inchi(v) | MolecularInput::Formula(v) => v,
        }
    }
}

/// Flat analysis record. Fields that do not apply to the input kind are absent
/// from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeReport {
    pub input_value: String,
    pub input_type: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub smiles: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inchi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub molecular_formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub molecular_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub atom_counts: Option<BTreeMap<String, usize>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub atom_count: Option<usize>,
    #[serde(flatten)]
    pub properties: Option<PropertyEstimate>,
}

impl MoleculeReport {
    fn empty(input_value: &str, input_type: &str) -> Self {
        Self {
            input_value: input_value.to_string(),
            input_type: input_type.to_string(),
            success: true,
            error: None,
            smiles: None,
            inchi: None,
            molecular_formula: None,
            molecular_weight: None,
            atom_counts: None,
            atom_count: None,
            properties: None,
        }
    }

    fn failed(input_value: &str, input_type: &str, err: &MoleculeError) -> Self {
        let mut report = Self::empty(input_value, input_type);
        report.success = false;
        report.error = Some(err.to_string());
        report
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Formula layer of an InChI string, e.g. `C2H6O` from `InChI=1S/C2H6O/c1-2-3/...`.
pub fn extract_inchi_formula(inchi: &str) -> Option<String> {
    INCHI_FORMULA_LAYER
        .captures(inchi)
        .map(|caps| caps[1].to_string())
}

fn fill_smiles(report: &mut MoleculeReport, smiles: &str) {
    if !validate_smiles(smiles) {
        warn!("SMILES {} has unbalanced brackets, counting atoms anyway", smiles);
    }
    let summary = parse_smiles_basic(smiles);
    report.atom_counts = Some(summary.atom_counts);
    report.molecular_formula = Some(summary.molecular_formula);
    report.molecular_weight = Some(summary.molecular_weight);
    report.atom_count = Some(summary.atom_count);
    report.properties = Some(estimate_properties(smiles));
    report.smiles = Some(smiles.to_string());
}

fn fill_inchi(report: &mut MoleculeReport, inchi: &str) {
    if !validate_inchi(inchi) {
        warn!("InChI {} does not start with the InChI= prefix", inchi);
    }
    report.inchi = Some(inchi.to_string());
    if let Some(formula) = extract_inchi_formula(inchi) {
        report.molecular_weight = Some(calculate_weight(&formula));
        report.molecular_formula = Some(formula);
    }
}

/// Analyzes a tagged molecular input.
pub fn analyze_input(input: &MolecularInput, input_type: &str) -> MoleculeReport {
    let mut report = MoleculeReport::empty(input.value(), input_type);
    match input {
        MolecularInput::Smiles(smiles) => fill_smiles(&mut report, smiles),
        MolecularInput::Inchi(inchi) => fill_inchi(&mut report, inchi),
        MolecularInput::Formula(formula) => {
            report.molecular_formula = Some(formula.clone());
            report.molecular_weight = Some(calculate_weight(formula));
        }
    }
    report
}

/// Analyzes `input_value` read as `input_type` ("smiles", "inchi" or "formula",
/// any case). Always returns a report; check `success` before reading the
/// derived fields.
pub fn analyze_molecule(input_value: &str, input_type: &str) -> MoleculeReport {
    info!("analyzing {} input {}", input_type, input_value);
    match MolecularInput::new(input_value, input_type) {
        Ok(input) => analyze_input(&input, input_type),
        Err(err) => {
            error!("Error in molecular analysis: {}", err);
            MoleculeReport::failed(input_value, input_type, &err)
        }
    }
}
