//! Record command implementation
//!
//! Emits the distribution row for a record whose registration opens today,
//! or `{}` when it does not.

use adapter_records::{distribution_record, DistributionRecord, ScheduleRecord};
use sched_core::types::Date;

use super::{load_record, resolve_today, RecordArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the record command
pub fn run(args: &RecordArgs, config: &CliConfig) -> Result<()> {
    let record = load_record(&args.record)?;
    let today = resolve_today(args.today.as_deref(), config)?;
    println!("{}", render(&record, today, config.output_format)?);
    Ok(())
}

/// Builds the output row as JSON text
pub fn render(record: &ScheduleRecord, today: Date, format: OutputFormat) -> Result<String> {
    let row = distribution_record(record, today)?;
    let value = DistributionRecord::to_json_value(row.as_ref())?;
    let text = match format {
        OutputFormat::Text => serde_json::to_string_pretty(&value)?,
        OutputFormat::Json => serde_json::to_string(&value)?,
    };
    Ok(text)
}
