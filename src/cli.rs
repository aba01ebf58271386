use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::demos::DemoKind;

#[derive(Debug, Parser)]
#[command(
    name = "minidemos",
    version,
    about = "Small interactive demos: dice simulator, click counter, three-screen form, activity tracker"
)]
pub struct Cli {
    /// Config file (default: <config dir>/minidemos/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file for the terminal UI
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open the interactive terminal UI (default)
    Tui {
        /// Tab to open first
        #[arg(long, value_enum)]
        demo: Option<DemoKind>,
    },

    /// Roll dice once and print the results
    Roll {
        /// Number of dice, 1 to 5
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        count: String,

        /// Maximum face value, 1 to 6. Once for all dice, or once per die
        #[arg(long = "max", value_name = "VALUE", allow_hyphen_values = true)]
        max: Vec<String>,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Parse durations (45, 1:30, 1.30) and print them in minutes
    Duration {
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The subcommand to run; no subcommand means the terminal UI.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Tui { demo: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["minidemos"]).unwrap();
        assert_eq!(cli.command(), Command::Tui { demo: None });
    }

    #[test]
    fn roll_collects_repeated_max() {
        let cli =
            Cli::try_parse_from(["minidemos", "roll", "--count", "2", "--max", "4", "--max", "6"])
                .unwrap();
        assert_eq!(
            cli.command(),
            Command::Roll {
                count: "2".to_string(),
                max: vec!["4".to_string(), "6".to_string()],
                json: false,
            }
        );
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["minidemos", "tui", "--demo", "tracker", "--config", "c.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(
            cli.command(),
            Command::Tui {
                demo: Some(DemoKind::Tracker)
            }
        );
    }

    #[test]
    fn duration_requires_input() {
        assert!(Cli::try_parse_from(["minidemos", "duration"]).is_err());
    }
}
