//! CLI error types

use adapter_records::RecordError;
use sched_recurrence::schedules::ScheduleError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `regwindow` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
