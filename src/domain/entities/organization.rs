use serde::{Deserialize, Serialize};

use super::meeting_rule::MeetingRule;

/// The part of an organization the scheduler cares about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
    pub rule: MeetingRule,
}

impl Organization {
    pub fn new(id: u64, name: impl Into<String>, rule: MeetingRule) -> Self {
        Self {
            id,
            name: name.into(),
            rule,
        }
    }
}
