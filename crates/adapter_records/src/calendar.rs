//! Civil "today" resolution in a fixed timezone.
//!
//! Schedules are kept in civil dates. The only instant-to-date conversion in
//! the workspace happens here, so every daily run agrees on which calendar
//! day it is regardless of the host's local zone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use sched_core::types::Date;
use std::str::FromStr;

use crate::error::RecordError;

/// Zone the distribution programs operate in.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Resolves an IANA timezone name.
///
/// # Errors
///
/// Returns [`RecordError::UnknownTimezone`] for names chrono-tz does not know.
///
/// # Examples
///
/// ```
/// use adapter_records::calendar::{resolve_timezone, DEFAULT_TIMEZONE};
///
/// let tz = resolve_timezone(DEFAULT_TIMEZONE).unwrap();
/// assert_eq!(tz, chrono_tz::America::New_York);
/// assert!(resolve_timezone("Nowhere/Special").is_err());
/// ```
pub fn resolve_timezone(name: &str) -> Result<Tz, RecordError> {
    Tz::from_str(name.trim()).map_err(|_| RecordError::UnknownTimezone(name.to_string()))
}

/// Returns the civil date of `instant` as observed in `tz`.
pub fn civil_date_at(instant: DateTime<Utc>, tz: Tz) -> Date {
    Date::from(instant.with_timezone(&tz).date_naive())
}

/// Returns today's civil date in `tz`, read from the system clock.
pub fn civil_today(tz: Tz) -> Date {
    civil_date_at(Utc::now(), tz)
}
