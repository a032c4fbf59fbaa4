use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::infrastructure::config::PreviewConfig;

/// Calendar day in `timezone` at the instant `now`
pub fn local_day(now: DateTime<Utc>, timezone: Tz) -> NaiveDate {
    now.with_timezone(&timezone).date_naive()
}

/// Current calendar day in `timezone`
pub fn today_in(timezone: Tz) -> NaiveDate {
    local_day(Utc::now(), timezone)
}

/// The day the preview treats as "today": the configured override, or the clock
pub fn reference_day(config: &PreviewConfig) -> NaiveDate {
    config.today.unwrap_or_else(|| today_in(config.timezone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn local_day_follows_the_zone() {
        // 01:30 UTC on the 16th is still the 15th in São Paulo (UTC-3)
        let now = Utc.with_ymd_and_hms(2024, 1, 16, 1, 30, 0).unwrap();
        assert_eq!(
            local_day(now, chrono_tz::America::Sao_Paulo),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            local_day(now, Tz::UTC),
            NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()
        );
    }

    #[test]
    fn override_wins_over_clock() {
        let config = PreviewConfig {
            today: NaiveDate::from_ymd_opt(2024, 1, 15),
            ..PreviewConfig::default()
        };
        assert_eq!(
            reference_day(&config),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }
}
