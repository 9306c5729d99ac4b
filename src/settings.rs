//! # Settings Module
//!
//! ## Purpose
//! Persistent configuration of the `chemseq` tool. The analyzers never read
//! this module on their own: the binary loads the settings once and hands
//! `AnalyzerSettings` to the functions that need them (`analyze_sequence_with`).
//!
//! ## Architecture
//! - **AnalyzerSettings**: serializable configuration structure
//! - **SettingsManager**: loading, validation of updates and persistence
//! - **Global Access**: `with_settings` / `with_settings_mut` over a
//!   `OnceLock<Mutex<_>>`, with a separate manager under `cfg(test)`
//!
//! ## Configuration Format
//! ```json
//! {
//!   "min_orf_length": 150,
//!   "log_level": "info",
//!   "output_format": "table",
//!   "default_sequence_options": []
//! }
//! ```
//!
//! ## Usage
//! ```rust
//! use ChemSeq::settings::with_settings;
//! let min_orf = with_settings(|manager| manager.settings().min_orf_length);
//! assert!(min_orf > 0);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use crate::Sequences::orf::DEFAULT_MIN_ORF_LENGTH;
use crate::Sequences::sequence_analyzer::SequenceOptions;
use crate::Utils::logging::LEVEL_NAMES;

pub const DEFAULT_CONFIG_FILE: &str = "chemseq_config.json";
pub const OUTPUT_FORMATS: [&str; 2] = ["table", "json"];

/// Configuration of the analysis tool.
///
/// # Fields
/// * `min_orf_length` - shortest ORF, in nucleotides, reported by gene annotation
/// * `log_level` - level name for the terminal logger
/// * `output_format` - "table" or "json" for the command line output
/// * `default_sequence_options` - option names applied when a sequence command names none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSettings {
    pub min_orf_length: usize,
    pub log_level: String,
    pub output_format: String,
    pub default_sequence_options: Vec<String>,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            min_orf_length: DEFAULT_MIN_ORF_LENGTH,
            log_level: "info".to_string(),
            output_format: "table".to_string(),
            default_sequence_options: Vec::new(),
        }
    }
}

impl AnalyzerSettings {
    pub fn wants_json(&self) -> bool {
        self.output_format == "json"
    }
}

/// Loads, updates and saves `AnalyzerSettings`.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings: AnalyzerSettings,
    config_file: String,
}

impl SettingsManager {
    /// Reads `chemseq_config.json` from the working directory, or uses defaults
    /// if it is missing or unreadable.
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    pub fn with_config_file(config_file: &str) -> Self {
        let settings = Self::load_config(config_file).unwrap_or_default();
        Self {
            settings,
            config_file: config_file.to_string(),
        }
    }

    /// Missing file -> defaults. Malformed JSON is an error.
    fn load_config(config_file: &str) -> Result<AnalyzerSettings, Box<dyn std::error::Error>> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let settings: AnalyzerSettings = serde_json::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(AnalyzerSettings::default())
        }
    }

    /// Writes the current settings to the config file.
    pub fn save_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn set_min_orf_length(&mut self, length: usize) -> Result<(), Box<dyn std::error::Error>> {
        if length == 0 {
            return Err("ORF length threshold must be positive".into());
        }
        self.settings.min_orf_length = length;
        Ok(())
    }

    pub fn set_log_level(&mut self, level: &str) -> Result<(), Box<dyn std::error::Error>> {
        let level = level.trim().to_lowercase();
        if !LEVEL_NAMES.contains(&level.as_str()) {
            return Err(format!("Unknown log level: {}", level).into());
        }
        self.settings.log_level = level;
        Ok(())
    }

    pub fn set_output_format(&mut self, format: &str) -> Result<(), Box<dyn std::error::Error>> {
        let format = format.trim().to_lowercase();
        if !OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(format!("Unknown output format: {}", format).into());
        }
        self.settings.output_format = format;
        Ok(())
    }

    /// Every name must be a known sequence option.
    pub fn set_default_sequence_options(
        &mut self,
        options: &[&str],
    ) -> Result<(), Box<dyn std::error::Error>> {
        SequenceOptions::from_names(options)?;
        self.settings.default_sequence_options = options.iter().map(|s| s.to_string()).collect();
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) {
        self.settings = AnalyzerSettings::default();
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(test))]
static SETTINGS_MANAGER: OnceLock<Mutex<SettingsManager>> = OnceLock::new();

#[cfg(test)]
static TEST_SETTINGS_MANAGER: OnceLock<Mutex<SettingsManager>> = OnceLock::new();

fn global_manager() -> &'static Mutex<SettingsManager> {
    #[cfg(test)]
    {
        TEST_SETTINGS_MANAGER.get_or_init(|| {
            Mutex::new(SettingsManager {
                settings: AnalyzerSettings::default(),
                config_file: DEFAULT_CONFIG_FILE.to_string(),
            })
        })
    }
    #[cfg(not(test))]
    {
        SETTINGS_MANAGER.get_or_init(|| Mutex::new(SettingsManager::new()))
    }
}

/// Read access to the process-wide settings manager.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&SettingsManager) -> R,
{
    let manager = global_manager()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&manager)
}

/// Write access to the process-wide settings manager.
pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut SettingsManager) -> R,
{
    let mut manager = global_manager()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut manager)
}
