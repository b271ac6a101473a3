//! ScheduleDefinition and ScheduleDefinitionBuilder implementation.

use sched_core::types::Date;

use super::cadence::RepeatCadence;
use super::error::ScheduleError;
use super::monthly::MonthlyRule;
use super::termination::TerminationRule;

/// A validated recurring distribution schedule.
///
/// Immutable once built; the recurrence engine only reads it.
///
/// # Examples
///
/// ```
/// use sched_recurrence::schedules::{RepeatCadence, ScheduleDefinition, TerminationRule};
/// use sched_core::types::Date;
///
/// let schedule = ScheduleDefinition::builder()
///     .anchor_date(Date::from_ymd(2022, 6, 8).unwrap())
///     .registration_lead_days(7)
///     .cadence(RepeatCadence::Monthly)
///     .termination(TerminationRule::After { occurrence_count: 3 })
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.registration_lead_days(), 7);
/// assert!(schedule.is_recurring());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleDefinition {
    anchor_date: Date,
    registration_lead_days: u32,
    cadence: RepeatCadence,
    monthly_rule: Option<MonthlyRule>,
    termination: TerminationRule,
}

impl ScheduleDefinition {
    /// Starts building a schedule definition.
    pub fn builder() -> ScheduleDefinitionBuilder {
        ScheduleDefinitionBuilder::new()
    }

    /// Returns the first distribution date.
    #[inline]
    pub fn anchor_date(&self) -> Date {
        self.anchor_date
    }

    /// Returns how many days before each distribution registration opens.
    #[inline]
    pub fn registration_lead_days(&self) -> u32 {
        self.registration_lead_days
    }

    /// Returns the repeat cadence.
    #[inline]
    pub fn cadence(&self) -> RepeatCadence {
        self.cadence
    }

    /// Returns the monthly placement rule, if any.
    #[inline]
    pub fn monthly_rule(&self) -> Option<MonthlyRule> {
        self.monthly_rule
    }

    /// Returns the termination rule.
    #[inline]
    pub fn termination(&self) -> TerminationRule {
        self.termination
    }

    /// Returns whether more than the anchor occurrence can be produced.
    #[inline]
    pub fn is_recurring(&self) -> bool {
        self.cadence.is_recurring()
    }

    /// Returns whether expansion needs a reference "today".
    #[inline]
    pub fn requires_reference_date(&self) -> bool {
        self.is_recurring() && !self.termination.is_bounded()
    }

    /// Advances a distribution date by one cadence step.
    ///
    /// Monthly steps without a rule keep the day-of-month, clamped to the
    /// target month's length. Monthly steps with a rule resolve the rule in
    /// the following month. Returns `None` for non-recurring schedules or when
    /// the next date is outside the representable calendar.
    pub fn next_distribution_date(&self, current: Date) -> Option<Date> {
        if let Some(days) = self.cadence.fixed_step_days() {
            return current.checked_add_days(days);
        }
        match (self.cadence, self.monthly_rule) {
            (RepeatCadence::Monthly, Some(rule)) => rule.next_after(current),
            (RepeatCadence::Monthly, None) => current.checked_add_months(1),
            _ => None,
        }
    }
}

/// Builder for constructing validated schedule definitions.
///
/// Defaults: no repeat, zero lead time, never terminating.
///
/// # Examples
///
/// ```
/// use sched_recurrence::schedules::{MonthlyRule, RepeatCadence, ScheduleDefinition};
/// use sched_core::types::Date;
///
/// let schedule = ScheduleDefinition::builder()
///     .anchor_date(Date::from_ymd(2022, 6, 15).unwrap())
///     .registration_lead_days(2)
///     .cadence(RepeatCadence::Monthly)
///     .monthly_rule("third wednesday".parse::<MonthlyRule>().unwrap())
///     .build()
///     .unwrap();
///
/// assert!(schedule.monthly_rule().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleDefinitionBuilder {
    anchor_date: Option<Date>,
    registration_lead_days: i64,
    cadence: RepeatCadence,
    monthly_rule: Option<MonthlyRule>,
    termination: TerminationRule,
}

impl ScheduleDefinitionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first distribution date.
    pub fn anchor_date(mut self, date: Date) -> Self {
        self.anchor_date = Some(date);
        self
    }

    /// Sets the registration lead time in days. Validated on [`build`](Self::build).
    pub fn registration_lead_days(mut self, days: i64) -> Self {
        self.registration_lead_days = days;
        self
    }

    /// Sets the repeat cadence.
    pub fn cadence(mut self, cadence: RepeatCadence) -> Self {
        self.cadence = cadence;
        self
    }

    /// Sets the monthly placement rule.
    pub fn monthly_rule(mut self, rule: MonthlyRule) -> Self {
        self.monthly_rule = Some(rule);
        self
    }

    /// Sets the termination rule.
    pub fn termination(mut self, rule: TerminationRule) -> Self {
        self.termination = rule;
        self
    }

    /// Builds the definition.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidConfiguration`] if:
    /// - The anchor date is missing
    /// - The lead time is negative or does not fit in `u32`
    /// - The lead time moves the anchor's registration date off the calendar
    /// - A monthly rule is set on a non-monthly cadence
    /// - An `After` rule asks for zero occurrences
    pub fn build(self) -> Result<ScheduleDefinition, ScheduleError> {
        let anchor_date = self
            .anchor_date
            .ok_or_else(|| ScheduleError::invalid("missing anchor date"))?;

        if self.registration_lead_days < 0 {
            return Err(ScheduleError::invalid(format!(
                "registration lead must not be negative, got {}",
                self.registration_lead_days
            )));
        }
        let registration_lead_days = u32::try_from(self.registration_lead_days).map_err(|_| {
            ScheduleError::invalid(format!(
                "registration lead of {} days is too large",
                self.registration_lead_days
            ))
        })?;
        if anchor_date
            .checked_sub_days(u64::from(registration_lead_days))
            .is_none()
        {
            return Err(ScheduleError::invalid(format!(
                "registration lead of {} days precedes the calendar for anchor {}",
                registration_lead_days, anchor_date
            )));
        }

        if let Some(rule) = self.monthly_rule {
            if self.cadence != RepeatCadence::Monthly {
                return Err(ScheduleError::invalid(format!(
                    "monthly rule {:?} requires a monthly cadence, got {}",
                    rule.to_string(),
                    self.cadence
                )));
            }
        }

        if let TerminationRule::After {
            occurrence_count: 0,
        } = self.termination
        {
            return Err(ScheduleError::invalid(
                "occurrence count must be a positive integer",
            ));
        }

        Ok(ScheduleDefinition {
            anchor_date,
            registration_lead_days,
            cadence: self.cadence,
            monthly_rule: self.monthly_rule,
            termination: self.termination,
        })
    }
}
