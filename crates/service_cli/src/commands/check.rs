//! Check command implementation
//!
//! Answers whether registration for a schedule record opens on a given day.

use adapter_records::ScheduleRecord;
use sched_core::types::Date;
use sched_recurrence::schedules::RecurrenceEngine;
use tracing::info;

use super::{load_record, resolve_today, RecordArgs};
use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(args: &RecordArgs, config: &CliConfig) -> Result<()> {
    let record = load_record(&args.record)?;
    let today = resolve_today(args.today.as_deref(), config)?;
    println!("{}", opens_on(&record, today)?);
    Ok(())
}

/// Returns whether registration opens on `today`
pub fn opens_on(record: &ScheduleRecord, today: Date) -> Result<bool> {
    let schedule = record.to_definition()?;
    let opens = RecurrenceEngine::has_registration_opening_on(&schedule, today, Some(today))?;
    info!(%today, opens, "Checked registration window");
    Ok(opens)
}
