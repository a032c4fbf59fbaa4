pub mod meeting_rule;
pub mod next_occurrence;
pub mod organization;
