//! # sched_core: Calendar Foundation for the Registration-Window Scheduler
//!
//! ## Layer 1 (Foundation) Role
//!
//! sched_core is the bottom layer of the workspace, providing:
//! - Civil date type: `Date` (`types::time`)
//! - Month geometry helpers (first/last day, days in month)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other sched_* crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sched_core::types::Date;
//!
//! let anchor = Date::parse("2022-06-15").unwrap();
//! let registration = anchor.checked_sub_days(5).unwrap();
//! assert_eq!(registration.to_string(), "2022-06-10");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date` as a `YYYY-MM-DD` string

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
