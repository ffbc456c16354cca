use crate::cli::commands::Cli;
use crate::io::config_io::{config_to_string, load_config};
use crate::io::logging::init_logging;

/// Resolve config and logging, then print the config or launch the TUI
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(cli.log_file.as_deref())?;

    let cwd = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    tracing::debug!(?config, "config loaded");

    if cli.print_config {
        print!("{}", config_to_string(&config)?);
        return Ok(());
    }

    crate::tui::run(&config)
}
