//! Terminal logger setup for the `chemseq` binary.
//!
//! The library only talks to the `log` facade; the binary decides where the
//! records go. The level name comes from `AnalyzerSettings::log_level`.
use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Maps a level name from the settings file onto a `LevelFilter`.
/// Unknown names fall back to `Info`.
pub fn level_from_name(name: &str) -> LevelFilter {
    match name.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Level names accepted by `level_from_name` without falling back.
pub const LEVEL_NAMES: [&str; 7] = ["off", "error", "warn", "warning", "info", "debug", "trace"];

fn logger_config() -> Config {
    ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build()
}

/// Installs the terminal logger. Returns `false` when a logger is already set
/// (second initialisation in the same process), which is not treated as an error.
pub fn init_logging(level_name: &str) -> bool {
    let level = level_from_name(level_name);
    TermLogger::init(
        level,
        logger_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_ok()
}
