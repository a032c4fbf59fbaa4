//! Next-meeting prediction for organization meeting rules.
//!
//! Everything here is a pure function of the rule and a caller-supplied
//! reference day. Incomplete rules never fail: they resolve to
//! [`Outcome::Unconfigured`], which renders like "no meetings" but stays
//! distinguishable for callers that want to warn an admin.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use tracing::debug;

use super::label_formatter::format_label_in;
use crate::domain::{
    Locale, MeetingPattern, MeetingRule, NextOccurrence, Outcome, WeekOfMonth,
};

/// Next meeting for `rule` as seen on `today`, labelled in English
pub fn compute_next_occurrence(rule: &MeetingRule, today: NaiveDate) -> NextOccurrence {
    compute_next_occurrence_in(rule, today, Locale::English)
}

/// Next meeting for `rule` as seen on `today`, labelled in `locale`
pub fn compute_next_occurrence_in(
    rule: &MeetingRule,
    today: NaiveDate,
    locale: Locale,
) -> NextOccurrence {
    let outcome = resolve_outcome(rule, today);
    let occurrence = NextOccurrence::from_outcome(outcome, today);
    let label = format_label_in(&occurrence, today, locale);

    debug!(
        frequency = rule.frequency.as_str(),
        %today,
        date = ?occurrence.date,
        days_until = ?occurrence.days_until,
        "Computed next meeting"
    );

    occurrence.with_label(label)
}

/// Decides the outcome for a rule without rendering anything
pub fn resolve_outcome(rule: &MeetingRule, today: NaiveDate) -> Outcome {
    match rule.pattern() {
        Ok(pattern) => match next_meeting_date(pattern, today) {
            Some(date) => Outcome::Scheduled(date),
            None => Outcome::NoneScheduled,
        },
        Err(issue) => {
            debug!(
                frequency = rule.frequency.as_str(),
                %issue,
                "Meeting rule is incomplete, no meeting predicted"
            );
            Outcome::Unconfigured(issue)
        }
    }
}

/// First meeting date of `pattern` after `today`.
/// `None` for `NoMeetings` and on calendar overflow.
pub fn next_meeting_date(pattern: MeetingPattern, today: NaiveDate) -> Option<NaiveDate> {
    match pattern {
        MeetingPattern::NoMeetings => None,
        MeetingPattern::BusinessDays => next_business_day(today),
        MeetingPattern::Weekly(day) => {
            today.checked_add_days(Days::new(days_until_weekday(today, day)))
        }
        MeetingPattern::Biweekly { day, skip_next } => {
            let mut delta = days_until_weekday(today, day);
            if skip_next {
                delta += 7;
            }
            today.checked_add_days(Days::new(delta))
        }
        MeetingPattern::Monthly { day, week } => next_monthly(today, day, week),
    }
}

fn next_business_day(today: NaiveDate) -> Option<NaiveDate> {
    let candidate = today.succ_opt()?;
    let weekend_shift = match candidate.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    candidate.checked_add_days(Days::new(weekend_shift))
}

/// Days to the next `target`, in 1..=7; a matching today counts as next week
fn days_until_weekday(today: NaiveDate, target: Weekday) -> u64 {
    let delta = (target.num_days_from_sunday() + 7 - today.weekday().num_days_from_sunday()) % 7;
    if delta == 0 { 7 } else { u64::from(delta) }
}

fn next_monthly(today: NaiveDate, day: Weekday, week: WeekOfMonth) -> Option<NaiveDate> {
    // the search always starts at next month, never the current one
    let anchor = today.with_day(1)?.checked_add_months(Months::new(1))?;
    let candidate = occurrence_in_month(anchor, day, week)?;
    if candidate > today {
        return Some(candidate);
    }

    let following = anchor.checked_add_months(Months::new(1))?;
    occurrence_in_month(following, day, week)
}

/// `anchor` must be the first day of the month being searched
fn occurrence_in_month(anchor: NaiveDate, day: Weekday, week: WeekOfMonth) -> Option<NaiveDate> {
    match week {
        WeekOfMonth::Last => {
            let last = anchor.checked_add_months(Months::new(1))?.pred_opt()?;
            let back =
                (last.weekday().num_days_from_sunday() + 7 - day.num_days_from_sunday()) % 7;
            last.checked_sub_days(Days::new(u64::from(back)))
        }
        WeekOfMonth::First | WeekOfMonth::Second | WeekOfMonth::Third => {
            NaiveDate::from_weekday_of_month_opt(anchor.year(), anchor.month(), day, week.number())
        }
    }
}
