//! Schedule configuration and generation error types.

use sched_core::types::DateError;
use thiserror::Error;

/// Errors that can occur while building or expanding a schedule.
///
/// Both variants are terminal for the computation that raised them: no
/// partial sequence is ever produced alongside an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule fields cannot describe a valid recurrence.
    #[error("Invalid schedule configuration: {0}")]
    InvalidConfiguration(String),

    /// An open-ended schedule was expanded without a reference date.
    #[error("Schedule never terminates and no reference date was supplied")]
    MissingReferenceDate,
}

impl ScheduleError {
    /// Convenience constructor for [`ScheduleError::InvalidConfiguration`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        ScheduleError::InvalidConfiguration(reason.into())
    }
}

impl From<DateError> for ScheduleError {
    fn from(err: DateError) -> Self {
        ScheduleError::InvalidConfiguration(err.to_string())
    }
}
