//! Termination rules for recurring schedules.

use sched_core::types::Date;
use std::fmt;

/// Condition under which a recurring schedule stops producing occurrences.
///
/// # Examples
///
/// ```
/// use sched_recurrence::schedules::TerminationRule;
/// use sched_core::types::Date;
///
/// let rule = TerminationRule::OnDate {
///     last_distribution_date: Date::from_ymd(2022, 12, 31).unwrap(),
/// };
/// assert!(rule.is_bounded());
/// assert!(!TerminationRule::Never.is_bounded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerminationRule {
    /// Repeats indefinitely; expansion is bounded by a reference date.
    #[default]
    Never,
    /// Stops after a fixed number of occurrences, anchor included.
    After {
        /// Total occurrences to produce (at least 1).
        occurrence_count: u32,
    },
    /// Stops after the last distribution on or before this date.
    OnDate {
        /// Latest permitted distribution date.
        last_distribution_date: Date,
    },
}

impl TerminationRule {
    /// Returns whether the rule limits the sequence without a reference date.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        !matches!(self, TerminationRule::Never)
    }

    /// Returns the short kind label used in schedule records.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            TerminationRule::Never => "never",
            TerminationRule::After { .. } => "after",
            TerminationRule::OnDate { .. } => "on_date",
        }
    }
}

impl fmt::Display for TerminationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationRule::Never => write!(f, "never"),
            TerminationRule::After { occurrence_count } => {
                write!(f, "after {} occurrences", occurrence_count)
            }
            TerminationRule::OnDate {
                last_distribution_date,
            } => write!(f, "on {}", last_distribution_date),
        }
    }
}
