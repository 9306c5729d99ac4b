//! # Sequence analysis entry point
//!
//! ## Aim
//! Request-level wrapper around `SequenceProfile`: takes the sequence string,
//! the type name and the option names exactly as a caller sends them and
//! always answers with a `SequenceReport`. Validation problems (unknown type,
//! unknown option, symbol outside the alphabet) end up in `error` with
//! `success = false`.
//!
//! ## Usage
//! ```rust
//! use ChemSeq::Sequences::sequence_api::analyze_sequence;
//! let report = analyze_sequence("GGCC", "dna", &["secondaryStructure"]);
//! assert!(report.success);
//! let profile = report.profile.unwrap();
//! assert_eq!(profile.gc_content, Some(100.0));
//! ```
use log::error;
use serde::{Deserialize, Serialize};

use super::sequence_analyzer::{SequenceError, SequenceOptions, SequenceProfile, SequenceType};
use crate::settings::AnalyzerSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceReport {
    pub sequence_type: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub profile: Option<SequenceProfile>,
}

impl SequenceReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn profile_from_request<S: AsRef<str>>(
    sequence: &str,
    sequence_type: &str,
    options: &[S],
    settings: &AnalyzerSettings,
) -> Result<SequenceProfile, SequenceError> {
    let sequence_type: SequenceType = sequence_type.parse()?;
    let options = SequenceOptions::from_names(options)?;
    SequenceProfile::build(sequence, sequence_type, &options, settings.min_orf_length)
}

/// Same as `analyze_sequence` with explicit settings (ORF length threshold).
pub fn analyze_sequence_with<S: AsRef<str>>(
    sequence: &str,
    sequence_type: &str,
    options: &[S],
    settings: &AnalyzerSettings,
) -> SequenceReport {
    match profile_from_request(sequence, sequence_type, options, settings) {
        Ok(profile) => SequenceReport {
            sequence_type: sequence_type.to_string(),
            success: true,
            error: None,
            profile: Some(profile),
        },
        Err(err) => {
            error!("Error in sequence analysis: {}", err);
            SequenceReport {
                sequence_type: sequence_type.to_string(),
                success: false,
                error: Some(err.to_string()),
                profile: None,
            }
        }
    }
}

/// Analyzes `sequence` as `sequence_type` ("dna", "rna", "protein" or "gene")
/// with the named options, using default settings.
pub fn analyze_sequence<S: AsRef<str>>(
    sequence: &str,
    sequence_type: &str,
    options: &[S],
) -> SequenceReport {
    analyze_sequence_with(sequence, sequence_type, options, &AnalyzerSettings::default())
}
