//! # Schedule Recurrence (L2: Business Logic)
//!
//! Derives registration-open dates from recurring distribution schedules.
//!
//! This crate provides:
//! - Repeat cadences (none, daily, weekly, biweekly, monthly)
//! - Monthly ordinal rules ("third wednesday", "last day")
//! - Termination rules (never, after N occurrences, on a date)
//! - The [`RecurrenceEngine`](schedules::RecurrenceEngine), a lazy generator of
//!   `(registration_date, distribution_date)` pairs
//!
//! ## Design Principles
//!
//! - **Pure and stateless**: no I/O, no clock; "today" is always passed in
//! - **Lazy sequences**: open-ended schedules are bounded by the caller's horizon
//! - **Builder pattern** for validated schedule definitions

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod schedules;
