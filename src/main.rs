use anyhow::{Context, Result};
use clap::Parser;

use minidemos::cli::{Cli, Command};
use minidemos::config::Config;
use minidemos::headless;
use minidemos::logging::{expand_tilde, init_tracing, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }?;

    match cli.command() {
        Command::Tui { demo } => {
            let log_path = cli
                .log_file
                .clone()
                .or_else(|| config.logging.file.clone())
                .map(|path| expand_tilde(&path))
                .unwrap_or_else(Config::default_log_path);
            init_tracing(&config.logging, &LogTarget::File(log_path))?;
            if let Some(demo) = demo {
                config.ui.start_demo = demo;
            }
            minidemos::ui::run(&config).context("terminal UI failed")?;
        }
        Command::Roll { count, max, json } => {
            init_tracing(&config.logging, &LogTarget::Stderr)?;
            let report = headless::roll(&count, &max)?;
            if json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("{report}");
            }
        }
        Command::Duration { inputs, json } => {
            init_tracing(&config.logging, &LogTarget::Stderr)?;
            let report = headless::durations(&inputs);
            if json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("{report}");
            }
        }
    }

    Ok(())
}
