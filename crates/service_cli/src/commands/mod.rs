//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands split into a
//! `render` step that builds the stdout text and a `run` step that prints it.

pub mod check;
pub mod dates;
pub mod record;

use adapter_records::calendar::civil_today;
use adapter_records::ScheduleRecord;
use clap::Args;
use sched_core::types::Date;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Arguments shared by every schedule command
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Schedule record JSON file, or `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    pub record: String,

    /// Reference date (YYYY-MM-DD); defaults to today in the configured timezone
    #[arg(short, long)]
    pub today: Option<String>,
}

/// Reads and parses the schedule record named by `source`.
pub fn load_record(source: &str) -> Result<ScheduleRecord> {
    let text = if source == "-" {
        debug!("Reading schedule record from stdin");
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        if !Path::new(source).exists() {
            return Err(CliError::FileNotFound(source.to_string()));
        }
        debug!(path = source, "Reading schedule record");
        std::fs::read_to_string(source)?
    };

    Ok(ScheduleRecord::from_json(&text)?)
}

/// Resolves the reference date from `--today` or the configured timezone.
pub fn resolve_today(today: Option<&str>, config: &CliConfig) -> Result<Date> {
    match today {
        Some(text) => Date::parse(text).map_err(|e| {
            CliError::InvalidArgument(format!("--today {}: {}", text, e))
        }),
        None => {
            let today = civil_today(config.tz()?);
            info!(%today, timezone = %config.timezone, "Resolved today from system clock");
            Ok(today)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Writes `json` to a temporary record file.
    pub fn record_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    pub const DAILY_AFTER_THREE: &str = r#"{
        "program_record_id": "recP1",
        "date": "2022-06-17",
        "registration_period": 3,
        "repeat": "daily",
        "repeat_end": "after",
        "repeat_end_after": 3,
        "start_time": "10:00",
        "end_time": "12:00"
    }"#;
}
