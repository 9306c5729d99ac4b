use ChemSeq::Utils::logging::init_logging;
use ChemSeq::cli::cli_commands::parse;
use ChemSeq::cli::cli_main::run_interactive_menu;
use ChemSeq::settings::with_settings;
use log::debug;
use std::process::ExitCode;

pub fn main() -> ExitCode {
    let cli = parse();
    let (settings, config_file) = with_settings(|manager| {
        (manager.settings().clone(), manager.config_file().to_string())
    });
    init_logging(&settings.log_level);
    debug!("settings from {}", config_file);

    let Some(command) = cli.command else {
        run_interactive_menu();
        return ExitCode::SUCCESS;
    };
    if command.run(cli.json, &settings) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
