//! Monthly ordinal rules: "second monday", "last friday", "first day", ...
//!
//! A rule places each monthly occurrence by position inside the month rather
//! than by day-of-month. Unlike plain month arithmetic there is no clamping:
//! every weekday occurs at least four times in any month, and every month has
//! at least four days, so a rule always resolves to a real date.

use sched_core::types::{Date, Weekday};
use std::fmt;
use std::str::FromStr;

use super::error::ScheduleError;

/// Position of the target day within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinal {
    /// First qualifying day.
    First,
    /// Second qualifying day.
    Second,
    /// Third qualifying day.
    Third,
    /// Fourth qualifying day.
    Fourth,
    /// Last qualifying day, counted back from the end of the month.
    Last,
}

impl Ordinal {
    /// Returns the 1-based rank for forward-counted ordinals, `None` for `Last`.
    #[inline]
    pub fn rank(&self) -> Option<usize> {
        match self {
            Ordinal::First => Some(1),
            Ordinal::Second => Some(2),
            Ordinal::Third => Some(3),
            Ordinal::Fourth => Some(4),
            Ordinal::Last => None,
        }
    }

    /// Returns the lowercase name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Ordinal::First => "first",
            Ordinal::Second => "second",
            Ordinal::Third => "third",
            Ordinal::Fourth => "fourth",
            Ordinal::Last => "last",
        }
    }
}

impl FromStr for Ordinal {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "1st" => Ok(Ordinal::First),
            "second" | "2nd" => Ok(Ordinal::Second),
            "third" | "3rd" => Ok(Ordinal::Third),
            "fourth" | "4th" => Ok(Ordinal::Fourth),
            "last" => Ok(Ordinal::Last),
            _ => Err(ScheduleError::invalid(format!(
                "unknown monthly ordinal: {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which days count when locating the ordinal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayTarget {
    /// Only days falling on this weekday.
    Weekday(Weekday),
    /// Every calendar day.
    AnyDay,
}

impl DayTarget {
    /// Returns whether `date` counts towards the ordinal.
    #[inline]
    pub fn matches(&self, date: Date) -> bool {
        match self {
            DayTarget::Weekday(weekday) => date.weekday() == *weekday,
            DayTarget::AnyDay => true,
        }
    }
}

impl FromStr for DayTarget {
    type Err = ScheduleError;

    /// Parses `"day"` or a weekday name (full or three-letter, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("day") {
            return Ok(DayTarget::AnyDay);
        }
        s.parse::<Weekday>()
            .map(DayTarget::Weekday)
            .map_err(|_| ScheduleError::invalid(format!("unknown monthly day target: {:?}", s)))
    }
}

impl fmt::Display for DayTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayTarget::AnyDay => write!(f, "day"),
            DayTarget::Weekday(weekday) => write!(f, "{}", weekday_name(*weekday)),
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Monthly placement rule such as "third wednesday" or "last day".
///
/// # Examples
///
/// ```
/// use sched_recurrence::schedules::MonthlyRule;
/// use sched_core::types::Date;
///
/// let rule: MonthlyRule = "third wednesday".parse().unwrap();
/// let july = Date::from_ymd(2022, 7, 1).unwrap();
/// assert_eq!(rule.resolve_in_month(july), Date::from_ymd(2022, 7, 20).ok());
///
/// let rule: MonthlyRule = "last day".parse().unwrap();
/// assert_eq!(rule.resolve_in_month(july), Date::from_ymd(2022, 7, 31).ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthlyRule {
    ordinal: Ordinal,
    target: DayTarget,
}

impl MonthlyRule {
    /// Creates a rule from its two parts.
    #[inline]
    pub fn new(ordinal: Ordinal, target: DayTarget) -> Self {
        Self { ordinal, target }
    }

    /// Returns the ordinal position.
    #[inline]
    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    /// Returns the day target.
    #[inline]
    pub fn target(&self) -> DayTarget {
        self.target
    }

    /// Resolves the rule inside the month containing `month`.
    ///
    /// Forward ordinals scan from day 1 counting qualifying days until the
    /// rank is reached; `Last` scans back from the final day and takes the
    /// first qualifying day. Always `Some` for dates chrono can represent.
    pub fn resolve_in_month(&self, month: Date) -> Option<Date> {
        let mut days = month.month_days();
        match self.ordinal.rank() {
            Some(rank) => days.filter(|d| self.target.matches(*d)).nth(rank - 1),
            None => days.rfind(|d| self.target.matches(*d)),
        }
    }

    /// Resolves the rule in the month after `current`'s month.
    ///
    /// Returns `None` only when the following month is outside the
    /// representable calendar.
    pub fn next_after(&self, current: Date) -> Option<Date> {
        self.resolve_in_month(current.first_day_of_next_month()?)
    }
}

impl FromStr for MonthlyRule {
    type Err = ScheduleError;

    /// Parses `"<ordinal> <target>"`, e.g. `"second monday"` or `"last day"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(ordinal), Some(target), None) => {
                Ok(MonthlyRule::new(ordinal.parse()?, target.parse()?))
            }
            _ => Err(ScheduleError::invalid(format!(
                "monthly rule must be \"<ordinal> <weekday|day>\", got {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for MonthlyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ordinal, self.target)
    }
}
