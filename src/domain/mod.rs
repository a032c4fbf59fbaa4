pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::meeting_rule::{Frequency, MeetingPattern, MeetingRule, RuleIssue, WeekOfMonth};
pub use entities::next_occurrence::{NextOccurrence, Outcome, Urgency};
pub use entities::organization::Organization;
pub use repositories::{OrganizationRepository, RepositoryError};
pub use value_objects::{Locale, WeekdayFormat};
