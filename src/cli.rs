//! Command-line interface for form-pages.
//!
//! This module handles CLI argument parsing and the headless subcommands
//! (`replay` and `dump-config`).

use crate::page::{PageCoordinator, PageMessage, PageState};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use form_pages_config::Config;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// form-pages - A form builder page tab bar
#[derive(Parser)]
#[command(name = "form-pages")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log level for the debug log (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a YAML list of page messages to the configured pages and print the result as JSON
    Replay {
        /// YAML file holding the messages, in order
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print the effective configuration as YAML
    DumpConfig,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Config file override
    pub config_path: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LevelFilter>,
}

impl RuntimeOptions {
    /// Load the config from the override path, or from the default location.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup, with optional runtime options
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    let cli = Cli::parse();

    let options = RuntimeOptions {
        config_path: cli.config,
        log_level: cli.log_level,
    };

    let result = match cli.command {
        Some(Commands::Replay { file }) => run_replay(&options, &file),
        Some(Commands::DumpConfig) => run_dump_config(&options),
        None => return CliResult::Continue(options),
    };

    match result {
        Ok(()) => CliResult::Exit(0),
        Err(e) => {
            eprintln!("form-pages: error: {e:#}");
            CliResult::Exit(1)
        }
    }
}

fn run_replay(options: &RuntimeOptions, file: &Path) -> Result<()> {
    let config = options.load_config()?;
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read message file {}", file.display()))?;
    let state = replay(&config, &contents)?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn run_dump_config(options: &RuntimeOptions) -> Result<()> {
    let config = options.load_config()?;
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Apply the YAML message list in `yaml` to the pages seeded by `config`.
///
/// Every message is checked against the state it will be applied to, so a
/// malformed log reports the offending entry instead of panicking.
pub fn replay(config: &Config, yaml: &str) -> Result<PageState> {
    let messages: Vec<PageMessage> =
        serde_yaml_ng::from_str(yaml).context("Failed to parse message list")?;

    let mut coordinator = PageCoordinator::from_config(config);
    for (n, message) in messages.into_iter().enumerate() {
        check_message(coordinator.state(), &message)
            .with_context(|| format!("Message {} ({:?}) cannot be applied", n + 1, message))?;
        coordinator.dispatch(message);
    }
    Ok(coordinator.state().clone())
}

fn check_message(state: &PageState, message: &PageMessage) -> Result<()> {
    if let PageMessage::Reorder { from, to } = *message {
        let len = state.len();
        if from >= len || to >= len {
            bail!("reorder {} -> {} is out of range for {} pages", from, to, len);
        }
    }
    Ok(())
}
