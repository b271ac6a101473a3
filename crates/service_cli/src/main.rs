//! regwindow - Registration Window CLI
//!
//! Operational entry point for the registration-window scheduler. Reads a
//! flat schedule record and answers questions about its registration dates.
//!
//! # Commands
//!
//! - `regwindow dates --record <file>` - List registration-opening dates
//! - `regwindow check --record <file>` - Does registration open today?
//! - `regwindow record --record <file>` - Emit today's distribution row, or `{}`
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the record adapter and
//! recurrence engine to configuration, logging and stdout. Logs go to stderr
//! so stdout carries only command results.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::RecordArgs;
use config::{build_config, ConfigOverrides};
pub use error::{CliError, Result};

/// Registration-window schedule CLI
#[derive(Parser)]
#[command(name = "regwindow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format); defaults to ./regwindow.toml if present
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// IANA timezone used to resolve today (overrides REGWINDOW_TIMEZONE)
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Log level: trace, debug, info, warn, error (overrides REGWINDOW_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every registration-opening date of a schedule record
    Dates(RecordArgs),

    /// Print whether registration opens on the reference date
    Check(RecordArgs),

    /// Print the distribution row if registration opens on the reference date
    Record(RecordArgs),
}

impl From<&Cli> for ConfigOverrides {
    fn from(cli: &Cli) -> Self {
        ConfigOverrides {
            config_file: cli.config.clone(),
            timezone: cli.timezone.clone(),
            log_level: cli.log_level.clone(),
            output_format: cli.format.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&ConfigOverrides::from(&cli))?;

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    init_tracing(log_level);

    info!(
        timezone = %config.timezone,
        log_level = %config.log_level,
        output_format = %config.output_format,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Dates(args) => commands::dates::run(args, &config),
        Commands::Check(args) => commands::check::run(args, &config),
        Commands::Record(args) => commands::record::run(args, &config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
