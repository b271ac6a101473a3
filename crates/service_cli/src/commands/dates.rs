//! Dates command implementation
//!
//! Lists every registration-opening date of a schedule record.

use adapter_records::ScheduleRecord;
use sched_core::types::Date;
use sched_recurrence::schedules::RecurrenceEngine;
use tracing::info;

use super::{load_record, resolve_today, RecordArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the dates command
pub fn run(args: &RecordArgs, config: &CliConfig) -> Result<()> {
    let record = load_record(&args.record)?;
    let today = resolve_today(args.today.as_deref(), config)?;
    print!("{}", render(&record, today, config.output_format)?);
    Ok(())
}

/// Builds the stdout text for the dates command
pub fn render(record: &ScheduleRecord, today: Date, format: OutputFormat) -> Result<String> {
    let schedule = record.to_definition()?;
    let dates = RecurrenceEngine::registration_dates(&schedule, Some(today))?;
    info!(
        count = dates.len(),
        cadence = %schedule.cadence(),
        termination = %schedule.termination(),
        "Expanded schedule"
    );

    let output = match format {
        OutputFormat::Text => dates.iter().map(|date| format!("{}\n", date)).collect(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string(&dates)?),
    };
    Ok(output)
}
