use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo", about = concat!("todo v", env!("CARGO_PKG_VERSION"), " - a todo list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: $XDG_CONFIG_HOME/todo/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level or filter directive (e.g. debug, todo_tui=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a script of actions to an empty list and print the result
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file (default: read stdin)
    pub file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::parse_from(["todo", "--log-level", "debug"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn replay_args() {
        let cli = Cli::parse_from(["todo", "replay", "script.txt", "--json"]);
        match cli.command {
            Some(Commands::Replay(args)) => {
                assert_eq!(args.file, Some(PathBuf::from("script.txt")));
                assert!(args.json);
            }
            None => panic!("expected replay"),
        }
    }
}
