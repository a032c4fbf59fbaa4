use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::meeting_rule::RuleIssue;

/// What the scheduler concluded about a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Scheduled(NaiveDate),
    /// The organization does not hold regular meetings
    NoneScheduled,
    /// The rule is missing something it needs; callers may warn the admin
    Unconfigured(RuleIssue),
}

/// How close the next meeting is, used to pick card colors and icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Today,
    Tomorrow,
    Upcoming,
}

/// Computed next meeting of an organization relative to a reference day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextOccurrence {
    pub outcome: Outcome,
    pub date: Option<NaiveDate>,
    pub days_until: Option<i64>,
    pub is_today: bool,
    pub is_tomorrow: bool,
    pub label: String,
}

impl NextOccurrence {
    /// Builds the occurrence without a label; the formatter fills it in
    pub fn from_outcome(outcome: Outcome, today: NaiveDate) -> Self {
        let date = match outcome {
            Outcome::Scheduled(date) => Some(date),
            Outcome::NoneScheduled | Outcome::Unconfigured(_) => None,
        };
        let days_until = date.map(|d| (d - today).num_days());

        Self {
            outcome,
            date,
            days_until,
            is_today: days_until == Some(0),
            is_tomorrow: days_until == Some(1),
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = label;
        self
    }

    pub fn has_meeting(&self) -> bool {
        self.date.is_some()
    }

    pub fn is_unconfigured(&self) -> bool {
        matches!(self.outcome, Outcome::Unconfigured(_))
    }

    pub fn issue(&self) -> Option<RuleIssue> {
        match self.outcome {
            Outcome::Unconfigured(issue) => Some(issue),
            _ => None,
        }
    }

    pub fn urgency(&self) -> Option<Urgency> {
        self.days_until.map(|days| match days {
            0 => Urgency::Today,
            1 => Urgency::Tomorrow,
            _ => Urgency::Upcoming,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::meeting_rule::Frequency;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn scheduled_outcome_derives_day_count() {
        let occurrence =
            NextOccurrence::from_outcome(Outcome::Scheduled(day(2024, 1, 16)), day(2024, 1, 15));
        assert_eq!(occurrence.date, Some(day(2024, 1, 16)));
        assert_eq!(occurrence.days_until, Some(1));
        assert!(occurrence.is_tomorrow);
        assert!(!occurrence.is_today);
        assert_eq!(occurrence.urgency(), Some(Urgency::Tomorrow));
        assert!(occurrence.has_meeting());
    }

    #[test]
    fn same_day_is_today() {
        let today = day(2024, 3, 1);
        let occurrence = NextOccurrence::from_outcome(Outcome::Scheduled(today), today);
        assert!(occurrence.is_today);
        assert_eq!(occurrence.urgency(), Some(Urgency::Today));
    }

    #[test]
    fn absent_outcomes_have_no_counts() {
        let issue = RuleIssue::MissingWeekday(Frequency::Weekly);
        let occurrence =
            NextOccurrence::from_outcome(Outcome::Unconfigured(issue), day(2024, 1, 15));
        assert_eq!(occurrence.date, None);
        assert_eq!(occurrence.days_until, None);
        assert_eq!(occurrence.urgency(), None);
        assert!(occurrence.is_unconfigured());
        assert_eq!(occurrence.issue(), Some(issue));

        let occurrence = NextOccurrence::from_outcome(Outcome::NoneScheduled, day(2024, 1, 15));
        assert!(!occurrence.is_unconfigured());
        assert!(!occurrence.has_meeting());
    }
}
