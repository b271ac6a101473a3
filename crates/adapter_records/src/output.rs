//! Distribution rows produced for today's registration openings.

use sched_core::types::Date;
use sched_recurrence::schedules::RecurrenceEngine;
use serde::Serialize;
use serde_json::Value;

use crate::error::RecordError;
use crate::record::ScheduleRecord;

/// Row emitted when a record's registration window opens today.
///
/// Passthrough values are echoed as they appeared in the input; absent
/// values are omitted from the serialized row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionRecord {
    /// Identifier of the program row the schedule belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_record_id: Option<Value>,
    /// Distribution date whose registration opens today.
    pub date: Date,
    /// Registration lead in days, as given on the record.
    pub registration_period: i64,
    /// Distribution start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Value>,
    /// Distribution end time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Value>,
}

impl DistributionRecord {
    fn from_record(record: &ScheduleRecord, date: Date) -> Self {
        let echo = |name: &str| record.field(name).cloned();
        Self {
            program_record_id: echo("program_record_id"),
            date,
            registration_period: record.registration_period,
            start_time: echo("start_time"),
            end_time: echo("end_time"),
        }
    }

    /// Serializes the optional row, writing `{}` when there is none.
    pub fn to_json_value(row: Option<&Self>) -> Result<Value, RecordError> {
        match row {
            Some(row) => Ok(serde_json::to_value(row)?),
            None => Ok(Value::Object(Default::default())),
        }
    }
}

/// Returns the distribution row if registration for `record` opens on `today`.
///
/// `today` doubles as the reference date bounding open-ended schedules.
///
/// # Errors
///
/// Returns [`RecordError::Schedule`] when the record does not describe a
/// valid schedule.
pub fn distribution_record(
    record: &ScheduleRecord,
    today: Date,
) -> Result<Option<DistributionRecord>, RecordError> {
    let definition = record.to_definition()?;
    let opening = RecurrenceEngine::occurrence_opening_on(&definition, today, Some(today))?;

    match opening {
        Some(occurrence) => {
            tracing::info!(
                today = %today,
                distribution = %occurrence.distribution_date(),
                "registration opens today"
            );
            Ok(Some(DistributionRecord::from_record(
                record,
                occurrence.distribution_date(),
            )))
        }
        None => {
            tracing::debug!(today = %today, "no registration opening today");
            Ok(None)
        }
    }
}
