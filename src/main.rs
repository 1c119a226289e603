use std::path::Path;

use clap::Parser;
use todo_tui::cli::commands::{Cli, Commands};
use todo_tui::cli::handlers;
use todo_tui::io::{config_io, logging};
use todo_tui::model::Config;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // Logging only goes to a file; without one no subscriber is installed
    if let Some(file) = &config.log.file
        && let Err(e) = logging::init_file_logging(Path::new(file), &config.log.level)
    {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        // No subcommand → launch TUI
        None => todo_tui::tui::run(&config),
        Some(Commands::Replay(args)) => handlers::cmd_replay(args),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Read the config file and let command-line flags override it
fn load_config(cli: &Cli) -> Result<Config, config_io::ConfigError> {
    let mut config = config_io::load_config(cli.config.as_deref())?;
    if let Some(path) = &cli.log_file {
        config.log.file = Some(path.display().to_string());
    }
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
    Ok(config)
}
