use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use meeting_scheduler::{
    Frequency, MeetingRule, Outcome, compute_next_occurrence, format_label,
};
use proptest::prelude::*;
use proptest::sample::select;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// any day between 2000 and roughly 2080
fn any_day() -> impl Strategy<Value = NaiveDate> {
    (0u64..29_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Days::new(offset)
    })
}

fn any_weekday() -> impl Strategy<Value = Weekday> {
    select(WEEKDAYS.to_vec())
}

fn any_rule() -> impl Strategy<Value = MeetingRule> {
    (
        select(vec![
            Frequency::None,
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Biweekly,
            Frequency::Monthly,
        ]),
        proptest::option::of(any_weekday()),
        proptest::option::of(0u8..7),
        any::<bool>(),
    )
        .prop_map(|(frequency, day_of_week, week_of_month, skip_next_occurrence)| MeetingRule {
            frequency,
            day_of_week,
            week_of_month,
            meeting_time: None,
            skip_next_occurrence,
        })
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .unwrap()
}

proptest! {
    #[test]
    fn none_never_has_a_date(today in any_day(), day in proptest::option::of(any_weekday())) {
        let rule = MeetingRule { day_of_week: day, ..MeetingRule::none() };
        let next = compute_next_occurrence(&rule, today);
        prop_assert_eq!(next.outcome, Outcome::NoneScheduled);
        prop_assert!(next.date.is_none());
        prop_assert!(next.days_until.is_none());
    }

    #[test]
    fn daily_lands_on_a_weekday(today in any_day()) {
        let date = compute_next_occurrence(&MeetingRule::daily(), today).date.unwrap();
        prop_assert!(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun));

        let tomorrow = today.succ_opt().unwrap();
        match tomorrow.weekday() {
            Weekday::Sat | Weekday::Sun => {
                prop_assert_eq!(date.weekday(), Weekday::Mon);
                prop_assert!((date - tomorrow).num_days() <= 2);
            }
            _ => {
                prop_assert_eq!(date, tomorrow);
            }
        }
    }

    #[test]
    fn weekly_is_within_one_week(today in any_day(), day in any_weekday()) {
        let next = compute_next_occurrence(&MeetingRule::weekly(day), today);
        let days = next.days_until.unwrap();
        prop_assert!((1..=7).contains(&days));
        prop_assert_eq!(next.date.unwrap().weekday(), day);
    }

    #[test]
    fn biweekly_skip_adds_exactly_a_week(today in any_day(), day in any_weekday()) {
        let live = compute_next_occurrence(&MeetingRule::biweekly(day, false), today).date.unwrap();
        let skipped = compute_next_occurrence(&MeetingRule::biweekly(day, true), today).date.unwrap();
        prop_assert_eq!((skipped - live).num_days(), 7);
    }

    #[test]
    fn monthly_week_four_is_the_last_match(today in any_day(), day in any_weekday()) {
        let date = compute_next_occurrence(&MeetingRule::monthly(day, 4), today).date.unwrap();
        prop_assert_eq!(date.weekday(), day);
        // no later matching weekday before the month ends
        prop_assert!((last_day_of_month(date) - date).num_days() < 7);
    }

    #[test]
    fn monthly_is_strictly_after_today(today in any_day(), day in any_weekday(), week in 1u8..=4) {
        let date = compute_next_occurrence(&MeetingRule::monthly(day, week), today).date.unwrap();
        prop_assert!(date > today);
        prop_assert_eq!(date.weekday(), day);
        if week < 4 {
            prop_assert_eq!((date.day() - 1) / 7 + 1, u32::from(week));
        }
    }

    #[test]
    fn labels_are_deterministic(today in any_day(), rule in any_rule()) {
        let next = compute_next_occurrence(&rule, today);
        prop_assert_eq!(format_label(&next, today), format_label(&next, today));
        prop_assert_eq!(format_label(&next, today), next.label.clone());
    }

    #[test]
    fn any_rule_looks_forward_and_never_panics(today in any_day(), rule in any_rule()) {
        let next = compute_next_occurrence(&rule, today);
        prop_assert_eq!(next.date.is_some(), next.days_until.is_some());
        if let Some(date) = next.date {
            prop_assert!(date > today);
        }
        prop_assert_eq!(next.date.is_none(), !matches!(next.outcome, Outcome::Scheduled(_)));
        if rule.frequency == Frequency::None {
            prop_assert!(next.date.is_none());
        }
    }
}
