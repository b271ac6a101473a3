//! # adapter_records: Schedule Record Adapter
//!
//! Maps flat schedule records, as exported from the distribution sheet, onto
//! [`ScheduleDefinition`](sched_recurrence::schedules::ScheduleDefinition) and
//! back out into distribution rows.
//!
//! This crate provides:
//! - [`ScheduleRecord`]: the flat input record (`date`, `registration_period`,
//!   `repeat`, `repeat_end`, ...) plus untouched passthrough fields
//! - [`DistributionRecord`]: the row produced when registration opens today
//! - [`calendar`]: timezone-fixed resolution of "today"
//!
//! This is the only layer that touches external string formats; the engine
//! below it works on typed dates and rules.
//!
//! # Examples
//!
//! ```
//! use adapter_records::{distribution_record, ScheduleRecord};
//! use sched_core::types::Date;
//!
//! let record = ScheduleRecord::from_json(r#"{
//!     "date": "2022-06-17",
//!     "registration_period": 3,
//!     "repeat": "daily",
//!     "repeat_end": "after",
//!     "repeat_end_after": 3,
//!     "start_time": "10:00"
//! }"#).unwrap();
//!
//! let today = Date::parse("2022-06-14").unwrap();
//! let row = distribution_record(&record, today).unwrap().unwrap();
//! assert_eq!(row.date.to_string(), "2022-06-17");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod calendar;
pub mod error;
pub mod output;
pub mod record;

pub use error::RecordError;
pub use output::{distribution_record, DistributionRecord};
pub use record::ScheduleRecord;
