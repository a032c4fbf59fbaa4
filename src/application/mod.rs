pub mod services;

pub use services::label_formatter::{describe_schedule, format_detail, format_label, format_label_in};
pub use services::meeting_info::{MeetingInfo, OrganizationMeeting, agenda, meeting_info};
pub use services::meeting_scheduler::{
    compute_next_occurrence, compute_next_occurrence_in, next_meeting_date, resolve_outcome,
};
