pub mod label_formatter;
pub mod meeting_info;
pub mod meeting_scheduler;
