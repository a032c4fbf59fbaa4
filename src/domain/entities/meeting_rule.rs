use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// How often an organization meets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    None,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    /// Parses the client names (`na`, `daily`, ...) and the backend codes `0`-`4`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "na" | "n/a" | "none" | "0" => Some(Frequency::None),
            "daily" | "1" => Some(Frequency::Daily),
            "weekly" | "2" => Some(Frequency::Weekly),
            "biweekly" | "fortnightly" | "3" => Some(Frequency::Biweekly),
            "monthly" | "4" => Some(Frequency::Monthly),
            _ => None,
        }
    }

    pub fn from_wire_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Frequency::None),
            1 => Some(Frequency::Daily),
            2 => Some(Frequency::Weekly),
            3 => Some(Frequency::Biweekly),
            4 => Some(Frequency::Monthly),
            _ => None,
        }
    }

    pub fn wire_code(&self) -> u8 {
        match self {
            Frequency::None => 0,
            Frequency::Daily => 1,
            Frequency::Weekly => 2,
            Frequency::Biweekly => 3,
            Frequency::Monthly => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::None => "na",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }
}

/// Which matching weekday of the month a monthly meeting falls on.
/// `Last` is what a stored week number of 4 means, even in months with five matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Last,
}

impl WeekOfMonth {
    pub fn from_number(week: u8) -> Option<Self> {
        match week {
            1 => Some(WeekOfMonth::First),
            2 => Some(WeekOfMonth::Second),
            3 => Some(WeekOfMonth::Third),
            4 => Some(WeekOfMonth::Last),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            WeekOfMonth::First => 1,
            WeekOfMonth::Second => 2,
            WeekOfMonth::Third => 3,
            WeekOfMonth::Last => 4,
        }
    }
}

/// Why a rule cannot produce a meeting date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleIssue {
    MissingWeekday(Frequency),
    MissingWeekOfMonth,
    WeekOfMonthOutOfRange(u8),
}

impl std::fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RuleIssue::MissingWeekday(frequency) => {
                write!(f, "{} meetings need a day of the week", frequency.as_str())
            }
            RuleIssue::MissingWeekOfMonth => {
                write!(f, "monthly meetings need a week of the month")
            }
            RuleIssue::WeekOfMonthOutOfRange(week) => {
                write!(f, "week of month must be between 1 and 4, got {}", week)
            }
        }
    }
}

impl std::error::Error for RuleIssue {}

/// A rule that has passed validation, with only the fields its frequency uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingPattern {
    NoMeetings,
    BusinessDays,
    Weekly(Weekday),
    Biweekly { day: Weekday, skip_next: bool },
    Monthly { day: Weekday, week: WeekOfMonth },
}

/// Meeting recurrence settings of an organization, as entered by its admins
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeetingRule {
    pub frequency: Frequency,
    #[serde(default)]
    pub day_of_week: Option<Weekday>,
    #[serde(default)]
    pub week_of_month: Option<u8>,
    #[serde(default)]
    pub meeting_time: Option<String>,
    #[serde(default)]
    pub skip_next_occurrence: bool,
}

impl MeetingRule {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn daily() -> Self {
        Self {
            frequency: Frequency::Daily,
            ..Self::default()
        }
    }

    pub fn weekly(day: Weekday) -> Self {
        Self {
            frequency: Frequency::Weekly,
            day_of_week: Some(day),
            ..Self::default()
        }
    }

    pub fn biweekly(day: Weekday, skip_next_occurrence: bool) -> Self {
        Self {
            frequency: Frequency::Biweekly,
            day_of_week: Some(day),
            skip_next_occurrence,
            ..Self::default()
        }
    }

    pub fn monthly(day: Weekday, week_of_month: u8) -> Self {
        Self {
            frequency: Frequency::Monthly,
            day_of_week: Some(day),
            week_of_month: Some(week_of_month),
            ..Self::default()
        }
    }

    pub fn with_meeting_time(mut self, time: impl Into<String>) -> Self {
        self.meeting_time = Some(time.into());
        self
    }

    /// Resolves the rule into the pattern the scheduler walks.
    /// Fields the frequency does not use are ignored rather than rejected.
    pub fn pattern(&self) -> Result<MeetingPattern, RuleIssue> {
        match self.frequency {
            Frequency::None => Ok(MeetingPattern::NoMeetings),
            Frequency::Daily => Ok(MeetingPattern::BusinessDays),
            Frequency::Weekly => self
                .required_weekday()
                .map(MeetingPattern::Weekly),
            Frequency::Biweekly => {
                let day = self.required_weekday()?;
                Ok(MeetingPattern::Biweekly {
                    day,
                    skip_next: self.skip_next_occurrence,
                })
            }
            Frequency::Monthly => {
                let day = self.required_weekday()?;
                let number = self.week_of_month.ok_or(RuleIssue::MissingWeekOfMonth)?;
                let week = WeekOfMonth::from_number(number)
                    .ok_or(RuleIssue::WeekOfMonthOutOfRange(number))?;
                Ok(MeetingPattern::Monthly { day, week })
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.pattern().is_ok()
    }

    /// Clears every field the frequency ignores, the way the rules form does on save
    pub fn normalized(mut self) -> Self {
        match self.frequency {
            Frequency::None => {
                self.day_of_week = None;
                self.week_of_month = None;
                self.meeting_time = None;
            }
            Frequency::Daily => {
                self.day_of_week = None;
                self.week_of_month = None;
            }
            Frequency::Weekly | Frequency::Biweekly => {
                self.week_of_month = None;
            }
            Frequency::Monthly => {}
        }
        if self.frequency != Frequency::Biweekly {
            self.skip_next_occurrence = false;
        }
        self
    }

    fn required_weekday(&self) -> Result<Weekday, RuleIssue> {
        self.day_of_week
            .ok_or(RuleIssue::MissingWeekday(self.frequency))
    }
}
