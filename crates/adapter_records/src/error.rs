//! Record adapter error types.

use sched_recurrence::schedules::ScheduleError;
use thiserror::Error;

/// Errors raised while reading schedule records or resolving dates.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record is not valid JSON or lacks a required field.
    #[error("Malformed schedule record: {0}")]
    Json(#[from] serde_json::Error),

    /// The record's fields do not describe a valid schedule.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// The configured timezone is not a known IANA name.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}
