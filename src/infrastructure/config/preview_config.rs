use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::Level;

use crate::domain::Locale;

pub const RULES_PATH_VAR: &str = "MEETING_RULES_PATH";
pub const TIMEZONE_VAR: &str = "MEETING_TIMEZONE";
pub const LOCALE_VAR: &str = "MEETING_LOCALE";
pub const TODAY_VAR: &str = "MEETING_TODAY";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

const DEFAULT_RULES_PATH: &str = "data/organizations.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidTimezone(String),
    InvalidLocale(String),
    InvalidDate(String),
    InvalidLogLevel(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTimezone(v) => {
                write!(f, "Invalid {TIMEZONE_VAR}: {v} (use an IANA name like America/Sao_Paulo)")
            }
            ConfigError::InvalidLocale(v) => write!(f, "Invalid {LOCALE_VAR}: {v} (use en or pt-BR)"),
            ConfigError::InvalidDate(v) => write!(f, "Invalid {TODAY_VAR}: {v} (use YYYY-MM-DD)"),
            ConfigError::InvalidLogLevel(v) => write!(f, "Invalid {LOG_LEVEL_VAR}: {v}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings of the `meeting-preview` binary
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    pub rules_path: PathBuf,
    /// Zone whose calendar day counts as "today"
    pub timezone: Tz,
    pub locale: Locale,
    /// Fixed reference day, overrides the clock
    pub today: Option<NaiveDate>,
    pub log_level: Level,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            rules_path: PathBuf::from(DEFAULT_RULES_PATH),
            timezone: Tz::UTC,
            locale: Locale::default(),
            today: None,
            log_level: Level::INFO,
        }
    }
}

impl PreviewConfig {
    /// Reads the process environment; call `dotenvy::dotenv()` first to pick up `.env`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(path) = get(RULES_PATH_VAR) {
            config.rules_path = PathBuf::from(path);
        }

        if let Some(tz) = get(TIMEZONE_VAR) {
            config.timezone = tz
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidTimezone(tz.clone()))?;
        }

        if let Some(tag) = get(LOCALE_VAR) {
            config.locale =
                Locale::from_tag(&tag).ok_or_else(|| ConfigError::InvalidLocale(tag.clone()))?;
        }

        if let Some(date) = get(TODAY_VAR) {
            let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|_| ConfigError::InvalidDate(date.clone()))?;
            config.today = Some(parsed);
        }

        if let Some(level) = get(LOG_LEVEL_VAR) {
            config.log_level =
                Level::from_str(&level).map_err(|_| ConfigError::InvalidLogLevel(level.clone()))?;
        }

        Ok(config)
    }
}
