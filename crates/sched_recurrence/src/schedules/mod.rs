//! Recurrence generation for distribution schedules.
//!
//! This module provides:
//! - [`ScheduleDefinition`]: A validated recurring schedule
//! - [`ScheduleDefinitionBuilder`]: Builder pattern for constructing definitions
//! - [`RepeatCadence`]: How often distributions repeat
//! - [`MonthlyRule`]: Ordinal weekday/day placement for monthly cadences
//! - [`TerminationRule`]: When a recurring schedule stops
//! - [`Occurrence`]: One registration/distribution date pair
//! - [`RecurrenceEngine`]: Generates and queries occurrence sequences
//!
//! # Examples
//!
//! ```
//! use sched_recurrence::schedules::{
//!     RecurrenceEngine, RepeatCadence, ScheduleDefinition, TerminationRule,
//! };
//! use sched_core::types::Date;
//!
//! let schedule = ScheduleDefinition::builder()
//!     .anchor_date(Date::from_ymd(2022, 6, 15).unwrap())
//!     .registration_lead_days(5)
//!     .cadence(RepeatCadence::Daily)
//!     .termination(TerminationRule::After { occurrence_count: 10 })
//!     .build()
//!     .unwrap();
//!
//! let dates = RecurrenceEngine::registration_dates(&schedule, None).unwrap();
//! assert_eq!(dates.len(), 10);
//! assert_eq!(dates[0].to_string(), "2022-06-10");
//! ```

mod cadence;
mod definition;
mod engine;
mod error;
mod monthly;
mod occurrence;
mod termination;

pub use cadence::RepeatCadence;
pub use definition::{ScheduleDefinition, ScheduleDefinitionBuilder};
pub use engine::{Occurrences, RecurrenceEngine};
pub use error::ScheduleError;
pub use monthly::{DayTarget, MonthlyRule, Ordinal};
pub use occurrence::Occurrence;
pub use termination::TerminationRule;
