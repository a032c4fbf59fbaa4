use chrono::{NaiveDate, Weekday};

use crate::domain::{
    Locale, MeetingPattern, MeetingRule, NextOccurrence, WeekOfMonth, WeekdayFormat,
};

/// Short relative label for an occurrence ("Today", "In 3 days", ...), in English
pub fn format_label(occurrence: &NextOccurrence, today: NaiveDate) -> String {
    format_label_in(occurrence, today, Locale::English)
}

/// Short relative label for an occurrence in the given locale
pub fn format_label_in(occurrence: &NextOccurrence, today: NaiveDate, locale: Locale) -> String {
    let Some(date) = occurrence.date else {
        return locale.no_meetings().to_string();
    };

    match (date - today).num_days() {
        0 => locale.today().to_string(),
        1 => locale.tomorrow().to_string(),
        days @ 2..=6 => locale.in_days(days),
        days @ 7..=29 => locale.in_weeks((days + 6) / 7),
        _ => locale.long_date(date),
    }
}

/// Full date line shown under the label; empty when there is no meeting
pub fn format_detail(date: Option<NaiveDate>, locale: Locale) -> String {
    date.map(|d| locale.long_date(d)).unwrap_or_default()
}

/// Human description of the recurrence itself, e.g. "Every other Friday"
pub fn describe_schedule(rule: &MeetingRule, locale: Locale) -> String {
    let Ok(pattern) = rule.pattern() else {
        return match locale {
            Locale::English => "Schedule not configured".to_string(),
            Locale::BrazilianPortuguese => "Reuniões não configuradas".to_string(),
        };
    };

    match locale {
        Locale::English => describe_en(pattern),
        Locale::BrazilianPortuguese => describe_pt(pattern),
    }
}

fn describe_en(pattern: MeetingPattern) -> String {
    match pattern {
        MeetingPattern::NoMeetings => "No regular meetings".to_string(),
        MeetingPattern::BusinessDays => "Weekdays (Mon-Fri)".to_string(),
        MeetingPattern::Weekly(day) => format!("Every {}", day.to_long_en()),
        MeetingPattern::Biweekly { day, .. } => format!("Every other {}", day.to_long_en()),
        MeetingPattern::Monthly { day, week } => {
            let ordinal = match week {
                WeekOfMonth::First => "1st",
                WeekOfMonth::Second => "2nd",
                WeekOfMonth::Third => "3rd",
                WeekOfMonth::Last => "Last",
            };
            format!("{} {} of the month", ordinal, day.to_long_en())
        }
    }
}

fn describe_pt(pattern: MeetingPattern) -> String {
    match pattern {
        MeetingPattern::NoMeetings => "Não há reuniões".to_string(),
        MeetingPattern::BusinessDays => "Dias úteis (Seg-Sex)".to_string(),
        MeetingPattern::Weekly(day) => {
            let every = if is_masculine_pt(day) { "Todo" } else { "Toda" };
            format!("{} {}", every, day.to_long_pt())
        }
        MeetingPattern::Biweekly { day, .. } => format!("A cada 15 dias ({})", day.to_long_pt()),
        MeetingPattern::Monthly { day, week } => {
            let masculine = is_masculine_pt(day);
            let ordinal = match (week, masculine) {
                (WeekOfMonth::Last, true) => "Último".to_string(),
                (WeekOfMonth::Last, false) => "Última".to_string(),
                (week, true) => format!("{}º", week.number()),
                (week, false) => format!("{}ª", week.number()),
            };
            format!("{} {} do mês", ordinal, day.to_long_pt())
        }
    }
}

// "sábado" and "domingo" take masculine articles, the "-feira" days feminine
fn is_masculine_pt(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Frequency, Outcome};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scheduled(date: NaiveDate, today: NaiveDate) -> NextOccurrence {
        NextOccurrence::from_outcome(Outcome::Scheduled(date), today)
    }

    #[test]
    fn relative_label_buckets() {
        let today = day(2024, 1, 15);
        let cases = [
            (0, "Today"),
            (1, "Tomorrow"),
            (2, "In 2 days"),
            (6, "In 6 days"),
            (7, "In 1 weeks"),
            (8, "In 2 weeks"),
            (29, "In 5 weeks"),
        ];
        for (offset, expected) in cases {
            let date = today + chrono::Days::new(offset);
            assert_eq!(format_label(&scheduled(date, today), today), expected, "offset {offset}");
        }
    }

    #[test]
    fn thirty_days_or_more_shows_the_date() {
        let today = day(2024, 1, 15);
        let occurrence = scheduled(day(2024, 2, 14), today);
        assert_eq!(format_label(&occurrence, today), "Wednesday, 14 February 2024");
        assert_eq!(
            format_label_in(&occurrence, today, Locale::BrazilianPortuguese),
            "quarta-feira, 14 de fevereiro de 2024"
        );
    }

    #[test]
    fn absent_date_reads_no_meetings() {
        let today = day(2024, 1, 15);
        let occurrence = NextOccurrence::from_outcome(Outcome::NoneScheduled, today);
        assert_eq!(format_label(&occurrence, today), "No meetings scheduled");
    }

    #[test]
    fn label_is_stable_across_calls() {
        let today = day(2024, 1, 15);
        let occurrence = scheduled(day(2024, 1, 19), today);
        assert_eq!(format_label(&occurrence, today), format_label(&occurrence, today));
    }

    #[test]
    fn detail_is_empty_without_date() {
        assert_eq!(format_detail(None, Locale::English), "");
        assert_eq!(
            format_detail(Some(day(2024, 1, 22)), Locale::English),
            "Monday, 22 January 2024"
        );
    }

    #[test]
    fn describes_each_frequency_in_english() {
        assert_eq!(describe_schedule(&MeetingRule::none(), Locale::English), "No regular meetings");
        assert_eq!(describe_schedule(&MeetingRule::daily(), Locale::English), "Weekdays (Mon-Fri)");
        assert_eq!(
            describe_schedule(&MeetingRule::weekly(Weekday::Fri), Locale::English),
            "Every Friday"
        );
        assert_eq!(
            describe_schedule(&MeetingRule::biweekly(Weekday::Tue, true), Locale::English),
            "Every other Tuesday"
        );
        assert_eq!(
            describe_schedule(&MeetingRule::monthly(Weekday::Wed, 2), Locale::English),
            "2nd Wednesday of the month"
        );
        assert_eq!(
            describe_schedule(&MeetingRule::monthly(Weekday::Wed, 4), Locale::English),
            "Last Wednesday of the month"
        );
    }

    #[test]
    fn describes_in_portuguese_with_gendered_articles() {
        let pt = Locale::BrazilianPortuguese;
        assert_eq!(describe_schedule(&MeetingRule::weekly(Weekday::Mon), pt), "Toda segunda-feira");
        assert_eq!(describe_schedule(&MeetingRule::weekly(Weekday::Sat), pt), "Todo sábado");
        assert_eq!(
            describe_schedule(&MeetingRule::monthly(Weekday::Sun, 4), pt),
            "Último domingo do mês"
        );
        assert_eq!(
            describe_schedule(&MeetingRule::monthly(Weekday::Thu, 1), pt),
            "1ª quinta-feira do mês"
        );
    }

    #[test]
    fn unconfigured_rule_description() {
        let rule = MeetingRule {
            frequency: Frequency::Weekly,
            ..MeetingRule::default()
        };
        assert_eq!(describe_schedule(&rule, Locale::English), "Schedule not configured");
    }
}
