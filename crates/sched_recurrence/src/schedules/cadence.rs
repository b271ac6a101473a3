//! Repeat cadence enumeration.

use std::fmt;
use std::str::FromStr;

use super::error::ScheduleError;

/// How often a distribution repeats after its anchor date.
///
/// # Examples
///
/// ```
/// use sched_recurrence::schedules::RepeatCadence;
///
/// let cadence: RepeatCadence = "biweekly".parse().unwrap();
/// assert_eq!(cadence.fixed_step_days(), Some(14));
/// assert!(cadence.is_recurring());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RepeatCadence {
    /// Single distribution on the anchor date.
    #[default]
    None,
    /// Every calendar day.
    Daily,
    /// Every 7 days.
    Weekly,
    /// Every 14 days.
    Biweekly,
    /// Once per calendar month.
    Monthly,
}

impl RepeatCadence {
    /// Returns whether the cadence produces more than the anchor occurrence.
    #[inline]
    pub fn is_recurring(&self) -> bool {
        !matches!(self, RepeatCadence::None)
    }

    /// Returns the fixed step in days, or `None` for cadences without one.
    ///
    /// # Examples
    ///
    /// ```
    /// use sched_recurrence::schedules::RepeatCadence;
    ///
    /// assert_eq!(RepeatCadence::Daily.fixed_step_days(), Some(1));
    /// assert_eq!(RepeatCadence::Weekly.fixed_step_days(), Some(7));
    /// assert_eq!(RepeatCadence::Monthly.fixed_step_days(), None);
    /// assert_eq!(RepeatCadence::None.fixed_step_days(), None);
    /// ```
    #[inline]
    pub fn fixed_step_days(&self) -> Option<u64> {
        match self {
            RepeatCadence::Daily => Some(1),
            RepeatCadence::Weekly => Some(7),
            RepeatCadence::Biweekly => Some(14),
            RepeatCadence::None | RepeatCadence::Monthly => None,
        }
    }

    /// Returns the canonical lowercase name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            RepeatCadence::None => "none",
            RepeatCadence::Daily => "daily",
            RepeatCadence::Weekly => "weekly",
            RepeatCadence::Biweekly => "biweekly",
            RepeatCadence::Monthly => "monthly",
        }
    }
}

impl fmt::Display for RepeatCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RepeatCadence {
    type Err = ScheduleError;

    /// Parses a cadence (case-insensitive).
    ///
    /// `"never"` is accepted as a synonym for `none`, matching how schedule
    /// sheets label one-off distributions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "none" | "never" => Ok(RepeatCadence::None),
            "daily" => Ok(RepeatCadence::Daily),
            "weekly" => Ok(RepeatCadence::Weekly),
            "biweekly" => Ok(RepeatCadence::Biweekly),
            "monthly" => Ok(RepeatCadence::Monthly),
            _ => Err(ScheduleError::invalid(format!(
                "unknown repeat cadence: {:?}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!("none".parse::<RepeatCadence>().unwrap(), RepeatCadence::None);
        assert_eq!("never".parse::<RepeatCadence>().unwrap(), RepeatCadence::None);
        assert_eq!("Daily".parse::<RepeatCadence>().unwrap(), RepeatCadence::Daily);
        assert_eq!("WEEKLY".parse::<RepeatCadence>().unwrap(), RepeatCadence::Weekly);
        assert_eq!(
            "bi-weekly".parse::<RepeatCadence>().unwrap(),
            RepeatCadence::Biweekly
        );
        assert_eq!(
            " monthly ".parse::<RepeatCadence>().unwrap(),
            RepeatCadence::Monthly
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(matches!(
            "fortnightly".parse::<RepeatCadence>(),
            Err(ScheduleError::InvalidConfiguration(_))
        ));
        assert!("".parse::<RepeatCadence>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for cadence in [
            RepeatCadence::None,
            RepeatCadence::Daily,
            RepeatCadence::Weekly,
            RepeatCadence::Biweekly,
            RepeatCadence::Monthly,
        ] {
            assert_eq!(cadence.to_string().parse::<RepeatCadence>(), Ok(cadence));
        }
    }

    #[test]
    fn test_is_recurring() {
        assert!(!RepeatCadence::None.is_recurring());
        assert!(RepeatCadence::Daily.is_recurring());
        assert!(RepeatCadence::Monthly.is_recurring());
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(RepeatCadence::default(), RepeatCadence::None);
    }
}
