use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::label_formatter::{describe_schedule, format_detail};
use super::meeting_scheduler::compute_next_occurrence_in;
use crate::domain::{Locale, MeetingRule, NextOccurrence, Organization, Outcome, Urgency};

/// Everything a "next meeting" card needs, rendered in one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingInfo {
    pub occurrence: NextOccurrence,
    pub detail: String,
    pub schedule: String,
    pub time: String,
}

impl MeetingInfo {
    pub fn has_meeting(&self) -> bool {
        self.occurrence.has_meeting()
    }

    pub fn message(&self) -> &str {
        &self.occurrence.label
    }

    pub fn urgency(&self) -> Option<Urgency> {
        self.occurrence.urgency()
    }
}

pub fn meeting_info(rule: &MeetingRule, today: NaiveDate, locale: Locale) -> MeetingInfo {
    let occurrence = compute_next_occurrence_in(rule, today, locale);
    let time = rule
        .meeting_time
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(locale.time_not_set())
        .to_string();

    MeetingInfo {
        detail: format_detail(occurrence.date, locale),
        schedule: describe_schedule(rule, locale),
        time,
        occurrence,
    }
}

/// One row of an agenda across organizations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationMeeting {
    pub organization_id: u64,
    pub organization_name: String,
    pub info: MeetingInfo,
}

/// Meeting info for every organization: soonest meetings first, then
/// organizations without meetings, then misconfigured ones. Ties keep id order.
pub fn agenda(
    organizations: &[Organization],
    today: NaiveDate,
    locale: Locale,
) -> Vec<OrganizationMeeting> {
    let mut rows: Vec<OrganizationMeeting> = organizations
        .iter()
        .map(|org| OrganizationMeeting {
            organization_id: org.id,
            organization_name: org.name.clone(),
            info: meeting_info(&org.rule, today, locale),
        })
        .collect();

    rows.sort_by_key(|row| {
        let rank = match row.info.occurrence.outcome {
            Outcome::Scheduled(date) => (0, Some(date)),
            Outcome::NoneScheduled => (1, None),
            Outcome::Unconfigured(_) => (2, None),
        };
        (rank, row.organization_id)
    });

    rows
}
