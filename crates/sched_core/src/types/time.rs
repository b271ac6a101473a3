//! Civil calendar dates for schedule computations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Day and month arithmetic used by the recurrence engine
//! - Month geometry (first day, last day, length)
//!
//! Dates here carry no timezone. Resolving "today" in a particular civil zone
//! is the caller's job; everything after that is plain calendar arithmetic.
//!
//! # Examples
//!
//! ```
//! use sched_core::types::time::Date;
//!
//! let distribution = Date::from_ymd(2022, 1, 31).unwrap();
//!
//! // Month arithmetic clamps to the last valid day
//! let next = distribution.checked_add_months(1).unwrap();
//! assert_eq!(next, Date::from_ymd(2022, 2, 28).unwrap());
//! ```

use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

pub use chrono::Weekday;

/// The only textual date layout accepted or produced at the boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and standard date arithmetic.
/// Ordering follows the calendar, so dates can be compared directly when
/// evaluating termination boundaries.
///
/// # Examples
///
/// ```
/// use sched_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2022, 6, 15).unwrap();
/// assert_eq!(date.year(), 2022);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2022-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2022, 6, 10).unwrap();
/// assert_eq!(date - start, 5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sched_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from a strict `YYYY-MM-DD` string.
    ///
    /// Single-digit months or days, signed years and trailing text are all
    /// rejected so that `parse` and `to_string` are exact inverses.
    ///
    /// # Examples
    ///
    /// ```
    /// use sched_core::types::time::Date;
    ///
    /// let date = Date::parse("2022-06-15").unwrap();
    /// assert_eq!(date.to_string(), "2022-06-15");
    ///
    /// assert!(Date::parse("2022-6-15").is_err());
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(DateError::ParseError(format!(
                "expected YYYY-MM-DD, got {:?}",
                s
            )));
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    ///
    /// # Examples
    ///
    /// ```
    /// use sched_core::types::time::{Date, Weekday};
    ///
    /// let date = Date::from_ymd(2022, 6, 15).unwrap();
    /// assert_eq!(date.weekday(), Weekday::Wed);
    /// ```
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Adds whole days, returning `None` past the representable range.
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Date)
    }

    /// Subtracts whole days, returning `None` past the representable range.
    pub fn checked_sub_days(self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Date)
    }

    /// Adds calendar months, keeping the day-of-month where it exists.
    ///
    /// When the target month is shorter than the current day-of-month the
    /// result is clamped to the target month's last day.
    ///
    /// # Examples
    ///
    /// ```
    /// use sched_core::types::time::Date;
    ///
    /// let jan_31 = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(jan_31.checked_add_months(1), Date::from_ymd(2024, 2, 29).ok());
    ///
    /// let jun_8 = Date::from_ymd(2022, 6, 8).unwrap();
    /// assert_eq!(jun_8.checked_add_months(1), Date::from_ymd(2022, 7, 8).ok());
    /// ```
    pub fn checked_add_months(self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(Date)
    }

    /// Returns the number of days in this date's month (28-31).
    ///
    /// # Examples
    ///
    /// ```
    /// use sched_core::types::time::Date;
    ///
    /// assert_eq!(Date::from_ymd(2024, 2, 10).unwrap().days_in_month(), 29);
    /// assert_eq!(Date::from_ymd(2023, 2, 10).unwrap().days_in_month(), 28);
    /// assert_eq!(Date::from_ymd(2022, 7, 4).unwrap().days_in_month(), 31);
    /// ```
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Returns the first day of this date's month.
    pub fn first_day_of_month(&self) -> Self {
        // Day 1 exists in every month.
        Date(self.0 - Days::new(u64::from(self.day() - 1)))
    }

    /// Returns the last day of this date's month.
    pub fn last_day_of_month(&self) -> Self {
        Date(self.0 + Days::new(u64::from(self.days_in_month() - self.day())))
    }

    /// Returns the first day of the following month.
    ///
    /// # Examples
    ///
    /// ```
    /// use sched_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2022, 12, 20).unwrap();
    /// assert_eq!(
    ///     date.first_day_of_next_month(),
    ///     Date::from_ymd(2023, 1, 1).ok()
    /// );
    /// ```
    pub fn first_day_of_next_month(&self) -> Option<Self> {
        self.last_day_of_month().checked_add_days(1)
    }

    /// Returns every date in this date's month, in calendar order.
    ///
    /// The iterator is double-ended so callers can scan from either end of
    /// the month.
    pub fn month_days(&self) -> impl DoubleEndedIterator<Item = Date> {
        let first = self.first_day_of_month().0;
        (0..u64::from(self.days_in_month())).map(move |offset| Date(first + Days::new(offset)))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from a strict `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl TryFrom<String> for Date {
    type Error = DateError;

    fn try_from(s: String) -> Result<Self, DateError> {
        Date::parse(&s)
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_from_ymd_valid() {
        let date = d(2022, 6, 15);
        assert_eq!(date.year(), 2022);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert_eq!(
            Date::from_ymd(2022, 13, 1),
            Err(DateError::InvalidDate {
                year: 2022,
                month: 13,
                day: 1
            })
        );
        assert!(Date::from_ymd(2022, 4, 31).is_err());
        assert!(Date::from_ymd(2022, 0, 1).is_err());
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(Date::parse("2022-06-15").unwrap(), d(2022, 6, 15));
        assert_eq!(Date::parse("2024-02-29").unwrap(), d(2024, 2, 29));
    }

    #[test]
    fn test_parse_rejects_loose_layouts() {
        for input in [
            "2022-6-15",
            "2022-06-5",
            "06/15/2022",
            "2022-06-15T00:00:00",
            " 2022-06-15",
            "+2022-06-1",
            "",
            "2022-02-30",
        ] {
            assert!(
                matches!(Date::parse(input), Err(DateError::ParseError(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: Date = "2022-08-29".parse().unwrap();
        assert_eq!(parsed, d(2022, 8, 29));
    }

    #[test]
    fn test_display() {
        assert_eq!(d(2022, 6, 1).to_string(), "2022-06-01");
        assert_eq!(d(987, 1, 9).to_string(), "0987-01-09");
    }

    #[test]
    fn test_sub_days() {
        assert_eq!(d(2022, 6, 15) - d(2022, 6, 10), 5);
        assert_eq!(d(2022, 6, 10) - d(2022, 6, 15), -5);
        assert_eq!(d(2023, 1, 1) - d(2022, 1, 1), 365);
    }

    #[test]
    fn test_checked_day_arithmetic() {
        assert_eq!(d(2022, 6, 30).checked_add_days(1), Some(d(2022, 7, 1)));
        assert_eq!(d(2022, 6, 1).checked_sub_days(7), Some(d(2022, 5, 25)));
        assert_eq!(d(2022, 6, 8).checked_sub_days(0), Some(d(2022, 6, 8)));
        assert_eq!(Date(NaiveDate::MAX).checked_add_days(1), None);
        assert_eq!(Date(NaiveDate::MIN).checked_sub_days(1), None);
    }

    #[test]
    fn test_add_months_clamps() {
        assert_eq!(d(2022, 1, 31).checked_add_months(1), Some(d(2022, 2, 28)));
        assert_eq!(d(2024, 1, 31).checked_add_months(1), Some(d(2024, 2, 29)));
        assert_eq!(d(2022, 3, 31).checked_add_months(1), Some(d(2022, 4, 30)));
        assert_eq!(d(2022, 12, 15).checked_add_months(1), Some(d(2023, 1, 15)));
    }

    #[test]
    fn test_month_geometry() {
        let date = d(2022, 7, 18);
        assert_eq!(date.first_day_of_month(), d(2022, 7, 1));
        assert_eq!(date.last_day_of_month(), d(2022, 7, 31));
        assert_eq!(date.first_day_of_next_month(), Some(d(2022, 8, 1)));

        let feb = d(2024, 2, 29);
        assert_eq!(feb.first_day_of_month(), d(2024, 2, 1));
        assert_eq!(feb.last_day_of_month(), d(2024, 2, 29));
    }

    #[test]
    fn test_month_days() {
        let days: Vec<Date> = d(2023, 2, 14).month_days().collect();
        assert_eq!(days.len(), 28);
        assert_eq!(days.first(), Some(&d(2023, 2, 1)));
        assert_eq!(days.last(), Some(&d(2023, 2, 28)));
        assert!(days.windows(2).all(|w| w[1] - w[0] == 1));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(d(2022, 6, 15).weekday(), Weekday::Wed);
        assert_eq!(d(2022, 7, 1).weekday(), Weekday::Fri);
        assert_eq!(d(2022, 8, 1).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_ordering() {
        assert!(d(2022, 6, 10) < d(2022, 6, 11));
        assert!(d(2022, 12, 31) < d(2023, 1, 1));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_date_serde_roundtrip() {
            let date = d(2022, 6, 15);
            let json = serde_json::to_string(&date).unwrap();
            assert_eq!(json, "\"2022-06-15\"");

            let parsed: Date = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_date_deserialize_is_strict() {
            assert!(serde_json::from_str::<Date>("\"2022-6-5\"").is_err());
            assert!(serde_json::from_str::<Date>("\"2022-06-15T00:00:00\"").is_err());
            assert!(serde_json::from_str::<Date>("\" 2022-06-15\"").is_err());
            assert!(serde_json::from_str::<Date>("20220615").is_err());
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (1900i32..2200i32, 1u32..13u32, 1u32..32u32)
                .prop_filter_map("valid date", |(year, month, day)| {
                    Date::from_ymd(year, month, day).ok()
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_format_then_parse_is_identity(date in date_strategy()) {
                let text = date.to_string();
                prop_assert_eq!(Date::parse(&text), Ok(date));
            }

            #[test]
            fn test_add_then_sub_days_is_identity(date in date_strategy(), days in 0u64..5000) {
                let moved = date.checked_add_days(days).unwrap();
                prop_assert_eq!(moved - date, days as i64);
                prop_assert_eq!(moved.checked_sub_days(days), Some(date));
            }

            #[test]
            fn test_add_month_lands_in_next_month(date in date_strategy()) {
                let next = date.checked_add_months(1).unwrap();
                prop_assert_eq!(Some(next.first_day_of_month()), date.first_day_of_next_month());
                prop_assert_eq!(next.day(), date.day().min(next.days_in_month()));
            }

            #[test]
            fn test_month_days_cover_month(date in date_strategy()) {
                let days: Vec<Date> = date.month_days().collect();
                prop_assert_eq!(days.len() as u32, date.days_in_month());
                prop_assert!(days.contains(&date));
                prop_assert_eq!(days[days.len() - 1], date.last_day_of_month());
            }
        }
    }
}
