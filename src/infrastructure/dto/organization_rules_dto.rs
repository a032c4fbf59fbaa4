use chrono::Weekday;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::warn;

use crate::domain::{Frequency, MeetingRule, Organization, RuleIssue, WeekdayFormat};

const DEFAULT_LOAN_DURATION_DAYS: i64 = 30;

/// The client sends names (`"weekly"`, `"friday"`), the backend sends integer codes.
/// Codes stay as raw JSON numbers so an out-of-range one only spoils its own record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeOrName {
    Code(Number),
    Name(String),
}

impl CodeOrName {
    fn code(value: u8) -> Self {
        CodeOrName::Code(Number::from(value))
    }
}

fn small_code(number: &Number) -> Option<u8> {
    number.as_u64().and_then(|n| u8::try_from(n).ok())
}

/// Organization rules in the JSON shape the client and backend exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRulesDto {
    #[serde(default = "default_loan_duration")]
    pub loan_duration_days: i64,
    #[serde(default)]
    pub meeting_frequency: Option<CodeOrName>,
    #[serde(default)]
    pub meeting_day: Option<CodeOrName>,
    #[serde(default)]
    pub meeting_week: Option<Number>,
    #[serde(default)]
    pub meeting_time: Option<String>,
    /// Legacy form of the skip flag: `false` means the coming week is an off week
    #[serde(default, alias = "hasNextWeekMeeting", skip_serializing_if = "Option::is_none")]
    pub next_week_meeting: Option<bool>,
    #[serde(default)]
    pub skip_next_occurrence: Option<bool>,
    #[serde(default)]
    pub require_complete_user_info: bool,
}

fn default_loan_duration() -> i64 {
    DEFAULT_LOAN_DURATION_DAYS
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesValidationError {
    LoanDurationTooShort(i64),
    UnknownFrequency(String),
    UnknownDay(String),
    Rule(RuleIssue),
}

impl std::fmt::Display for RulesValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RulesValidationError::LoanDurationTooShort(days) => {
                write!(f, "Loan duration must be at least 1 day, got {}", days)
            }
            RulesValidationError::UnknownFrequency(value) => {
                write!(f, "Unknown meeting frequency: {}", value)
            }
            RulesValidationError::UnknownDay(value) => write!(f, "Unknown meeting day: {}", value),
            RulesValidationError::Rule(issue) => write!(f, "Incomplete meeting rule: {}", issue),
        }
    }
}

impl std::error::Error for RulesValidationError {}

impl From<RuleIssue> for RulesValidationError {
    fn from(issue: RuleIssue) -> Self {
        RulesValidationError::Rule(issue)
    }
}

impl OrganizationRulesDto {
    pub fn from_rule(rule: &MeetingRule, loan_duration_days: i64) -> Self {
        Self {
            loan_duration_days,
            meeting_frequency: Some(CodeOrName::Name(rule.frequency.as_str().to_string())),
            meeting_day: rule
                .day_of_week
                .map(|day| CodeOrName::Name(day.to_lower_en().to_string())),
            meeting_week: rule.week_of_month.map(Number::from),
            meeting_time: rule.meeting_time.clone(),
            next_week_meeting: None,
            skip_next_occurrence: Some(rule.skip_next_occurrence),
            require_complete_user_info: false,
        }
    }

    /// Same record with the backend's integer codes in place of names
    pub fn from_rule_with_codes(rule: &MeetingRule, loan_duration_days: i64) -> Self {
        Self {
            meeting_frequency: Some(CodeOrName::code(rule.frequency.wire_code())),
            meeting_day: rule.day_of_week.map(|day| CodeOrName::code(day.wire_code())),
            ..Self::from_rule(rule, loan_duration_days)
        }
    }

    /// Lenient conversion used for scheduling: unknown values never fail here,
    /// they degrade to "no meetings" or to an unconfigured rule.
    pub fn to_rule(&self) -> MeetingRule {
        let frequency = match self.parse_frequency() {
            Ok(frequency) => frequency,
            Err(e) => {
                warn!("{}, treating as no meetings", e);
                Frequency::None
            }
        };

        let day_of_week = match self.parse_day() {
            Ok(day) => day,
            Err(e) => {
                warn!("{}, ignoring it", e);
                None
            }
        };

        let skip_next_occurrence = self
            .skip_next_occurrence
            .unwrap_or(self.next_week_meeting == Some(false));

        MeetingRule {
            frequency,
            day_of_week,
            week_of_month: self.week_of_month(),
            meeting_time: self
                .meeting_time
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            skip_next_occurrence,
        }
    }

    /// Strict check mirroring the rules form, reports the first problem found
    pub fn validate(&self) -> Result<(), RulesValidationError> {
        if self.loan_duration_days < 1 {
            return Err(RulesValidationError::LoanDurationTooShort(
                self.loan_duration_days,
            ));
        }
        self.parse_frequency()?;
        self.parse_day()?;
        self.to_rule().pattern()?;
        Ok(())
    }

    /// Weeks that do not fit a `u8` saturate, so the rule still reports them as out of range
    fn week_of_month(&self) -> Option<u8> {
        let week = self.meeting_week.as_ref()?;
        let clamped = match week.as_i64() {
            Some(n) => n.clamp(0, u8::MAX as i64) as u8,
            None if week.as_u64().is_some() => u8::MAX,
            None => {
                warn!(week = %week, "Meeting week is not an integer");
                0
            }
        };
        Some(clamped)
    }

    fn parse_frequency(&self) -> Result<Frequency, RulesValidationError> {
        match &self.meeting_frequency {
            None => Ok(Frequency::None),
            Some(CodeOrName::Code(code)) => small_code(code)
                .and_then(Frequency::from_wire_code)
                .ok_or_else(|| RulesValidationError::UnknownFrequency(code.to_string())),
            Some(CodeOrName::Name(name)) => Frequency::parse(name)
                .ok_or_else(|| RulesValidationError::UnknownFrequency(name.clone())),
        }
    }

    fn parse_day(&self) -> Result<Option<Weekday>, RulesValidationError> {
        match &self.meeting_day {
            None => Ok(None),
            Some(CodeOrName::Code(code)) => small_code(code)
                .and_then(Weekday::from_wire_code)
                .map(Some)
                .ok_or_else(|| RulesValidationError::UnknownDay(code.to_string())),
            Some(CodeOrName::Name(name)) if name.trim().is_empty() => Ok(None),
            Some(CodeOrName::Name(name)) => Weekday::from_name(name)
                .map(Some)
                .ok_or_else(|| RulesValidationError::UnknownDay(name.clone())),
        }
    }
}

/// An organization record as stored in the rules JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDto {
    #[serde(alias = "organizationId")]
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rules: OrganizationRulesDto,
}

impl OrganizationDto {
    pub fn into_organization(self) -> Organization {
        let rule = self.rules.to_rule();
        Organization::new(self.id, self.name, rule)
    }
}
