use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "wallety", about = "Terminal expense tracker (CLI + TUI)")]
pub struct Cli {
    /// Directory with config.yaml and credentials.yaml (default: ./config)
    #[arg(short, long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the interactive prompt shell
    Run,
    /// Load configuration and initialize logging without starting the shell
    Headless,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["wallety"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
    }

    #[test]
    fn parses_headless_command_with_config_dir() {
        let cli = Cli::parse_from(["wallety", "headless", "--config-dir", "custom"]);

        assert!(matches!(cli.command_or_default(), Command::Headless));
        assert_eq!(
            cli.config_dir
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom".to_owned())
        );
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["wallety", "run"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
    }
}
