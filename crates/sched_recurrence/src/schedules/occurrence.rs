//! A single registration/distribution pair.

use sched_core::types::Date;
use std::fmt;

/// One generated step of a schedule.
///
/// Registration always opens exactly the schedule's lead time before the
/// distribution date.
///
/// # Examples
///
/// ```
/// use sched_recurrence::schedules::Occurrence;
/// use sched_core::types::Date;
///
/// let occurrence = Occurrence::from_distribution(Date::from_ymd(2022, 6, 15).unwrap(), 5).unwrap();
/// assert_eq!(occurrence.registration_date(), Date::from_ymd(2022, 6, 10).unwrap());
/// assert_eq!(occurrence.lead_days(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    registration_date: Date,
    distribution_date: Date,
}

impl Occurrence {
    /// Builds the occurrence for `distribution_date` with the given lead.
    ///
    /// Returns `None` when the registration date would precede the
    /// representable calendar.
    #[inline]
    pub fn from_distribution(distribution_date: Date, lead_days: u32) -> Option<Self> {
        let registration_date = distribution_date.checked_sub_days(u64::from(lead_days))?;
        Some(Self {
            registration_date,
            distribution_date,
        })
    }

    /// Returns the date registration opens.
    #[inline]
    pub fn registration_date(&self) -> Date {
        self.registration_date
    }

    /// Returns the date the distribution takes place.
    #[inline]
    pub fn distribution_date(&self) -> Date {
        self.distribution_date
    }

    /// Returns the number of days between registration and distribution.
    #[inline]
    pub fn lead_days(&self) -> i64 {
        self.distribution_date - self.registration_date
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Occurrence(register {}, distribute {})",
            self.registration_date, self.distribution_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_lead_registers_on_distribution_day() {
        let day = Date::from_ymd(2022, 6, 15).unwrap();
        let occurrence = Occurrence::from_distribution(day, 0).unwrap();
        assert_eq!(occurrence.registration_date(), day);
        assert_eq!(occurrence.distribution_date(), day);
        assert_eq!(occurrence.lead_days(), 0);
    }

    #[test]
    fn test_lead_crosses_month_boundary() {
        let occurrence =
            Occurrence::from_distribution(Date::from_ymd(2022, 6, 8).unwrap(), 7).unwrap();
        assert_eq!(
            occurrence.registration_date(),
            Date::from_ymd(2022, 6, 1).unwrap()
        );
        let occurrence =
            Occurrence::from_distribution(Date::from_ymd(2022, 3, 1).unwrap(), 1).unwrap();
        assert_eq!(
            occurrence.registration_date(),
            Date::from_ymd(2022, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_display() {
        let occurrence =
            Occurrence::from_distribution(Date::from_ymd(2022, 7, 20).unwrap(), 2).unwrap();
        assert_eq!(
            occurrence.to_string(),
            "Occurrence(register 2022-07-18, distribute 2022-07-20)"
        );
    }
}
