//! Flat schedule records.
//!
//! A record is one row of the distribution sheet. Only the scheduling
//! fields are interpreted; every other field is carried through untouched
//! so it can be echoed back in the output row.

use sched_core::types::Date;
use sched_recurrence::schedules::{
    MonthlyRule, RepeatCadence, ScheduleDefinition, ScheduleError, TerminationRule,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RecordError;

/// One flat schedule record.
///
/// # Examples
///
/// ```
/// use adapter_records::ScheduleRecord;
/// use sched_recurrence::schedules::RepeatCadence;
///
/// let record = ScheduleRecord::from_json(r#"{
///     "date": "2022-06-15",
///     "registration_period": 2,
///     "repeat": "monthly",
///     "repeat_end": "after",
///     "repeat_end_after": 3,
///     "repeat_monthly": "third wednesday"
/// }"#).unwrap();
///
/// let schedule = record.to_definition().unwrap();
/// assert_eq!(schedule.cadence(), RepeatCadence::Monthly);
/// assert!(schedule.monthly_rule().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Anchor distribution date, `YYYY-MM-DD`.
    pub date: String,
    /// Days between registration opening and distribution.
    pub registration_period: i64,
    /// Repeat cadence token (`never`, `daily`, `weekly`, `biweekly`, `monthly`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,
    /// Termination token (`never`, `after`, `on_date`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_end: Option<String>,
    /// Total occurrence count for `repeat_end = after`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_end_after: Option<i64>,
    /// Last distribution date for `repeat_end = on_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_end_on_date: Option<String>,
    /// Monthly placement, e.g. `"second monday"` or `"last day"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_monthly: Option<String>,
    /// Fields not used for scheduling (`program_record_id`, `start_time`, ...).
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

impl ScheduleRecord {
    /// Parses a record from JSON.
    ///
    /// Accepts the bare field object as well as the export envelope
    /// `{ "id": ..., "createdTime": ..., "fields": { ... } }`. An object with
    /// a top-level `date` is always a bare record, so a passthrough column
    /// named `fields` is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Json`] for malformed JSON, a missing `date` or
    /// `registration_period`, or fields of the wrong JSON type.
    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        let mut value: Value = serde_json::from_str(text)?;
        let fields = if value.get("date").is_some() {
            None
        } else {
            value
                .get_mut("fields")
                .filter(|fields| fields.is_object())
                .map(Value::take)
        };
        if fields.is_some() {
            tracing::debug!("unwrapping schedule record envelope");
        }
        Ok(serde_json::from_value(fields.unwrap_or(value))?)
    }

    /// Returns a passthrough field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.passthrough.get(name)
    }

    /// Parses the cadence token. A missing or blank token means no repeat.
    pub fn cadence(&self) -> Result<RepeatCadence, ScheduleError> {
        match non_blank(&self.repeat) {
            Some(token) => token.parse(),
            None => Ok(RepeatCadence::None),
        }
    }

    /// Parses the termination fields for the given cadence.
    pub fn termination(&self, cadence: RepeatCadence) -> Result<TerminationRule, ScheduleError> {
        let token = match non_blank(&self.repeat_end) {
            Some(token) => token.to_lowercase().replace([' ', '-'], "_"),
            None if cadence.is_recurring() => {
                return Err(ScheduleError::invalid(format!(
                    "repeat_end is required for a {} schedule",
                    cadence
                )))
            }
            None => return Ok(TerminationRule::Never),
        };

        match token.as_str() {
            "never" => Ok(TerminationRule::Never),
            "after" => {
                let count = self.repeat_end_after.ok_or_else(|| {
                    ScheduleError::invalid("repeat_end_after is required when repeat_end is after")
                })?;
                let occurrence_count = u32::try_from(count)
                    .ok()
                    .filter(|count| *count > 0)
                    .ok_or_else(|| {
                        ScheduleError::invalid(format!(
                            "repeat_end_after must be a positive count, got {}",
                            count
                        ))
                    })?;
                Ok(TerminationRule::After { occurrence_count })
            }
            "on_date" | "ondate" => {
                let text = non_blank(&self.repeat_end_on_date).ok_or_else(|| {
                    ScheduleError::invalid(
                        "repeat_end_on_date is required when repeat_end is on_date",
                    )
                })?;
                Ok(TerminationRule::OnDate {
                    last_distribution_date: parse_date("repeat_end_on_date", text)?,
                })
            }
            _ => Err(ScheduleError::invalid(format!(
                "unknown repeat_end: {:?}",
                self.repeat_end.as_deref().unwrap_or_default()
            ))),
        }
    }

    /// Parses the monthly rule, if one applies to `cadence`.
    ///
    /// `repeat_monthly` only means something on monthly schedules; sheets
    /// often leave a stale value on other rows, so it is ignored there.
    pub fn monthly_rule(&self, cadence: RepeatCadence) -> Result<Option<MonthlyRule>, ScheduleError> {
        match non_blank(&self.repeat_monthly) {
            Some(text) if cadence == RepeatCadence::Monthly => Ok(Some(text.parse()?)),
            Some(text) => {
                tracing::debug!(
                    repeat_monthly = text,
                    %cadence,
                    "ignoring monthly rule on non-monthly schedule"
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Builds the validated schedule this record describes.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidConfiguration`] for unknown tokens,
    /// unparseable dates, missing termination fields or values the builder
    /// rejects.
    pub fn to_definition(&self) -> Result<ScheduleDefinition, ScheduleError> {
        let cadence = self.cadence()?;
        let termination = self.termination(cadence)?;
        let anchor = parse_date("date", &self.date)?;

        let mut builder = ScheduleDefinition::builder()
            .anchor_date(anchor)
            .registration_lead_days(self.registration_period)
            .cadence(cadence)
            .termination(termination);
        if let Some(rule) = self.monthly_rule(cadence)? {
            builder = builder.monthly_rule(rule);
        }

        let definition = builder.build()?;
        tracing::debug!(
            anchor = %definition.anchor_date(),
            lead = definition.registration_lead_days(),
            cadence = %definition.cadence(),
            termination = %definition.termination(),
            "schedule record mapped"
        );
        Ok(definition)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

fn parse_date(field: &str, text: &str) -> Result<Date, ScheduleError> {
    Date::parse(text.trim())
        .map_err(|err| ScheduleError::invalid(format!("{}: {}", field, err)))
}
