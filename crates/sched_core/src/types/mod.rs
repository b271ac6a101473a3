//! Calendar types shared by every layer.
//!
//! This module provides:
//! - `time`: The civil [`Date`] type with day and month arithmetic
//! - `error`: Structured error types for date construction and parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`Weekday`] from `time`
//! - [`DateError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::DateError;
pub use time::{Date, Weekday};
