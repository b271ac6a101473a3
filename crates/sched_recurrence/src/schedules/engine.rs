//! RecurrenceEngine and the lazy occurrence iterator.

use sched_core::types::Date;
use std::iter::FusedIterator;

use super::definition::ScheduleDefinition;
use super::error::ScheduleError;
use super::occurrence::Occurrence;
use super::termination::TerminationRule;

/// Expands schedule definitions into registration/distribution sequences.
///
/// The engine is stateless: every call starts from the definition's anchor,
/// so identical inputs always give identical sequences. It never reads a
/// clock; open-ended schedules are bounded by the `today` the caller passes.
///
/// # Examples
///
/// ```
/// use sched_recurrence::schedules::{RecurrenceEngine, RepeatCadence, ScheduleDefinition};
/// use sched_core::types::Date;
///
/// let schedule = ScheduleDefinition::builder()
///     .anchor_date(Date::from_ymd(2022, 6, 15).unwrap())
///     .registration_lead_days(5)
///     .cadence(RepeatCadence::Daily)
///     .build()
///     .unwrap();
///
/// let today = Date::from_ymd(2022, 6, 20).unwrap();
/// let dates = RecurrenceEngine::registration_dates(&schedule, Some(today)).unwrap();
/// assert_eq!(dates.len(), 16);
/// assert!(RecurrenceEngine::has_registration_opening_on(&schedule, today, Some(today)).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecurrenceEngine;

impl RecurrenceEngine {
    /// Returns a lazy iterator over the schedule's occurrences.
    ///
    /// The anchor occurrence is always yielded first. Each later candidate
    /// is yielded only while the termination rule holds for it:
    /// - `Never`: candidate registration date ≤ `today` + lead
    /// - `After(n)`: fewer than `n` occurrences yielded so far
    /// - `OnDate(d)`: candidate distribution date ≤ `d`
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::MissingReferenceDate`] if the schedule recurs,
    ///   never terminates and `today` is `None`
    /// - [`ScheduleError::InvalidConfiguration`] if the horizon
    ///   `today` + lead falls outside the calendar
    pub fn generate(
        definition: &ScheduleDefinition,
        today: Option<Date>,
    ) -> Result<Occurrences, ScheduleError> {
        let lead = definition.registration_lead_days();

        let horizon = match (definition.requires_reference_date(), today) {
            (false, _) => None,
            (true, None) => return Err(ScheduleError::MissingReferenceDate),
            (true, Some(today)) => Some(today.checked_add_days(u64::from(lead)).ok_or_else(
                || {
                    ScheduleError::invalid(format!(
                        "reference date {} plus {} lead days is outside the calendar",
                        today, lead
                    ))
                },
            )?),
        };

        let anchor = Occurrence::from_distribution(definition.anchor_date(), lead).ok_or_else(
            || {
                ScheduleError::invalid(format!(
                    "registration for anchor {} precedes the calendar",
                    definition.anchor_date()
                ))
            },
        )?;

        Ok(Occurrences {
            definition: *definition,
            horizon,
            pending: Some(anchor),
            yielded: 0,
        })
    }

    /// Collects every occurrence of a bounded (or today-bounded) schedule.
    pub fn occurrences(
        definition: &ScheduleDefinition,
        today: Option<Date>,
    ) -> Result<Vec<Occurrence>, ScheduleError> {
        Ok(Self::generate(definition, today)?.collect())
    }

    /// Collects the registration dates of every occurrence, in order.
    pub fn registration_dates(
        definition: &ScheduleDefinition,
        today: Option<Date>,
    ) -> Result<Vec<Date>, ScheduleError> {
        Ok(Self::generate(definition, today)?
            .map(|occurrence| occurrence.registration_date())
            .collect())
    }

    /// Finds the occurrence whose registration opens on `target`.
    ///
    /// Registration dates strictly increase, so the scan stops at the first
    /// registration date past `target`.
    pub fn occurrence_opening_on(
        definition: &ScheduleDefinition,
        target: Date,
        today: Option<Date>,
    ) -> Result<Option<Occurrence>, ScheduleError> {
        Ok(Self::generate(definition, today)?
            .take_while(|occurrence| occurrence.registration_date() <= target)
            .find(|occurrence| occurrence.registration_date() == target))
    }

    /// Returns whether `target` is a registration date of the schedule.
    pub fn has_registration_opening_on(
        definition: &ScheduleDefinition,
        target: Date,
        today: Option<Date>,
    ) -> Result<bool, ScheduleError> {
        Ok(Self::occurrence_opening_on(definition, target, today)?.is_some())
    }
}

/// Lazy, fused iterator over a schedule's occurrences.
///
/// Holds one occurrence of lookahead: the next value is computed and checked
/// against the termination rule as soon as the previous one is yielded.
#[derive(Debug, Clone)]
pub struct Occurrences {
    definition: ScheduleDefinition,
    horizon: Option<Date>,
    pending: Option<Occurrence>,
    yielded: u32,
}

impl Occurrences {
    fn continues_with(&self, candidate: &Occurrence) -> bool {
        match self.definition.termination() {
            TerminationRule::Never => self
                .horizon
                .is_some_and(|horizon| candidate.registration_date() <= horizon),
            TerminationRule::After { occurrence_count } => self.yielded < occurrence_count,
            TerminationRule::OnDate {
                last_distribution_date,
            } => candidate.distribution_date() <= last_distribution_date,
        }
    }

    fn advance(&self, current: &Occurrence) -> Option<Occurrence> {
        let distribution = self
            .definition
            .next_distribution_date(current.distribution_date())?;
        let candidate =
            Occurrence::from_distribution(distribution, self.definition.registration_lead_days())?;
        self.continues_with(&candidate).then_some(candidate)
    }
}

impl Iterator for Occurrences {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        let current = self.pending.take()?;
        self.yielded = self.yielded.saturating_add(1);
        self.pending = self.advance(&current);
        Some(current)
    }
}

impl FusedIterator for Occurrences {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedules::RepeatCadence;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn strings(dates: &[Date]) -> Vec<String> {
        dates.iter().map(|date| date.to_string()).collect()
    }

    #[test]
    fn test_single_occurrence_without_repeat() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 15))
            .registration_lead_days(3)
            .build()
            .unwrap();

        let occurrences = RecurrenceEngine::occurrences(&schedule, None).unwrap();
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].registration_date(), d(2022, 6, 12));
        assert_eq!(occurrences[0].distribution_date(), d(2022, 6, 15));
    }

    #[test]
    fn test_after_one_yields_anchor_only() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 15))
            .cadence(RepeatCadence::Weekly)
            .termination(TerminationRule::After {
                occurrence_count: 1,
            })
            .build()
            .unwrap();

        let dates = RecurrenceEngine::registration_dates(&schedule, None).unwrap();
        assert_eq!(strings(&dates), vec!["2022-06-15"]);
    }

    #[test]
    fn test_biweekly_after() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 15))
            .registration_lead_days(1)
            .cadence(RepeatCadence::Biweekly)
            .termination(TerminationRule::After {
                occurrence_count: 3,
            })
            .build()
            .unwrap();

        let dates = RecurrenceEngine::registration_dates(&schedule, None).unwrap();
        assert_eq!(
            strings(&dates),
            vec!["2022-06-14", "2022-06-28", "2022-07-12"]
        );
    }

    #[test]
    fn test_on_date_is_inclusive() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 1))
            .cadence(RepeatCadence::Weekly)
            .termination(TerminationRule::OnDate {
                last_distribution_date: d(2022, 6, 22),
            })
            .build()
            .unwrap();

        let occurrences = RecurrenceEngine::occurrences(&schedule, None).unwrap();
        assert_eq!(occurrences.len(), 4);
        assert_eq!(occurrences[3].distribution_date(), d(2022, 6, 22));
    }

    #[test]
    fn test_on_date_before_anchor_still_yields_anchor() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 15))
            .cadence(RepeatCadence::Daily)
            .termination(TerminationRule::OnDate {
                last_distribution_date: d(2022, 6, 1),
            })
            .build()
            .unwrap();

        let occurrences = RecurrenceEngine::occurrences(&schedule, None).unwrap();
        assert_eq!(occurrences.len(), 1);
    }

    #[test]
    fn test_never_requires_today() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 15))
            .cadence(RepeatCadence::Daily)
            .build()
            .unwrap();

        assert_eq!(
            RecurrenceEngine::generate(&schedule, None).err(),
            Some(ScheduleError::MissingReferenceDate)
        );
        assert_eq!(
            RecurrenceEngine::has_registration_opening_on(&schedule, d(2022, 6, 10), None),
            Err(ScheduleError::MissingReferenceDate)
        );
    }

    #[test]
    fn test_never_without_repeat_does_not_need_today() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 15))
            .registration_lead_days(5)
            .build()
            .unwrap();

        let dates = RecurrenceEngine::registration_dates(&schedule, None).unwrap();
        assert_eq!(strings(&dates), vec!["2022-06-10"]);
    }

    #[test]
    fn test_never_horizon_includes_lead() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 15))
            .registration_lead_days(5)
            .cadence(RepeatCadence::Weekly)
            .build()
            .unwrap();

        // Horizon is 2022-06-25: registrations 06-10, 06-17, 06-24 fit, 07-01 does not.
        let dates = RecurrenceEngine::registration_dates(&schedule, Some(d(2022, 6, 20))).unwrap();
        assert_eq!(
            strings(&dates),
            vec!["2022-06-10", "2022-06-17", "2022-06-24"]
        );
    }

    #[test]
    fn test_never_with_today_before_anchor() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 15))
            .registration_lead_days(2)
            .cadence(RepeatCadence::Daily)
            .build()
            .unwrap();

        let dates = RecurrenceEngine::registration_dates(&schedule, Some(d(2022, 1, 1))).unwrap();
        assert_eq!(strings(&dates), vec!["2022-06-13"]);
    }

    #[test]
    fn test_generate_is_restartable() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 1, 31))
            .cadence(RepeatCadence::Monthly)
            .termination(TerminationRule::After {
                occurrence_count: 6,
            })
            .build()
            .unwrap();

        let first = RecurrenceEngine::occurrences(&schedule, None).unwrap();
        let second = RecurrenceEngine::occurrences(&schedule, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_monthly_clamp_carries_forward() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 1, 31))
            .cadence(RepeatCadence::Monthly)
            .termination(TerminationRule::After {
                occurrence_count: 3,
            })
            .build()
            .unwrap();

        let dates = RecurrenceEngine::registration_dates(&schedule, None).unwrap();
        assert_eq!(
            strings(&dates),
            vec!["2022-01-31", "2022-02-28", "2022-03-28"]
        );
    }

    #[test]
    fn test_occurrence_opening_on() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 17))
            .registration_lead_days(3)
            .cadence(RepeatCadence::Daily)
            .termination(TerminationRule::After {
                occurrence_count: 3,
            })
            .build()
            .unwrap();

        let matched = RecurrenceEngine::occurrence_opening_on(&schedule, d(2022, 6, 15), None)
            .unwrap()
            .unwrap();
        assert_eq!(matched.distribution_date(), d(2022, 6, 18));

        assert_eq!(
            RecurrenceEngine::occurrence_opening_on(&schedule, d(2022, 6, 17), None).unwrap(),
            None
        );
        assert_eq!(
            RecurrenceEngine::occurrence_opening_on(&schedule, d(2022, 6, 13), None).unwrap(),
            None
        );
    }

    #[test]
    fn test_iterator_is_fused() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 15))
            .build()
            .unwrap();

        let mut iter = RecurrenceEngine::generate(&schedule, None).unwrap();
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_horizon_overflow_is_invalid() {
        let schedule = ScheduleDefinition::builder()
            .anchor_date(d(2022, 6, 15))
            .registration_lead_days(10)
            .cadence(RepeatCadence::Daily)
            .build()
            .unwrap();

        let today = Date::from(chrono::NaiveDate::MAX);
        assert!(matches!(
            RecurrenceEngine::generate(&schedule, Some(today)),
            Err(ScheduleError::InvalidConfiguration(_))
        ));
    }
}
