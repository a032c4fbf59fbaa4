//! Next-meeting prediction for book-lending organizations.
//!
//! [`compute_next_occurrence`] takes an organization's [`MeetingRule`] and a
//! reference day and returns the [`NextOccurrence`]: its date, day count and
//! a short relative label. The reference day is always passed in, never read
//! from a clock.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod utils;

pub use application::{
    MeetingInfo, OrganizationMeeting, agenda, compute_next_occurrence, compute_next_occurrence_in,
    describe_schedule, format_detail, format_label, format_label_in, meeting_info,
};
pub use domain::{
    Frequency, Locale, MeetingPattern, MeetingRule, NextOccurrence, Organization, Outcome,
    RuleIssue, Urgency, WeekOfMonth,
};
