use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::weekday_format::WeekdayFormat;

lazy_static! {
    static ref LOCALE_TAGS: HashMap<&'static str, Locale> = {
        let mut m = HashMap::new();

        m.insert("en", Locale::English);
        m.insert("en-us", Locale::English);
        m.insert("en-gb", Locale::English);
        m.insert("english", Locale::English);

        m.insert("pt", Locale::BrazilianPortuguese);
        m.insert("pt-br", Locale::BrazilianPortuguese);
        m.insert("pt_br", Locale::BrazilianPortuguese);
        m.insert("portuguese", Locale::BrazilianPortuguese);
        m.insert("portugues", Locale::BrazilianPortuguese);
        m.insert("português", Locale::BrazilianPortuguese);

        m
    };
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Language used for every user-facing string the scheduler renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    English,
    BrazilianPortuguese,
}

impl Locale {
    /// Resolves a language tag such as `en`, `pt-BR` or `portuguese`
    pub fn from_tag(tag: &str) -> Option<Self> {
        LOCALE_TAGS.get(tag.trim().to_lowercase().as_str()).copied()
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::BrazilianPortuguese => "pt-BR",
        }
    }

    pub fn today(&self) -> &'static str {
        match self {
            Locale::English => "Today",
            Locale::BrazilianPortuguese => "Hoje",
        }
    }

    pub fn tomorrow(&self) -> &'static str {
        match self {
            Locale::English => "Tomorrow",
            Locale::BrazilianPortuguese => "Amanhã",
        }
    }

    pub fn in_days(&self, days: i64) -> String {
        match self {
            Locale::English => format!("In {days} days"),
            Locale::BrazilianPortuguese => format!("Em {days} dias"),
        }
    }

    // plural is kept even for one week, matching the labels users already know
    pub fn in_weeks(&self, weeks: i64) -> String {
        match self {
            Locale::English => format!("In {weeks} weeks"),
            Locale::BrazilianPortuguese => format!("Em {weeks} semanas"),
        }
    }

    pub fn no_meetings(&self) -> &'static str {
        match self {
            Locale::English => "No meetings scheduled",
            Locale::BrazilianPortuguese => "Não há reuniões programadas",
        }
    }

    pub fn time_not_set(&self) -> &'static str {
        match self {
            Locale::English => "Time not set",
            Locale::BrazilianPortuguese => "Horário não definido",
        }
    }

    /// Long calendar date with weekday, e.g. "Wednesday, 28 February 2024"
    pub fn long_date(&self, date: NaiveDate) -> String {
        let month = date.month0() as usize;
        match self {
            Locale::English => format!(
                "{}, {} {} {}",
                date.weekday().to_long_en(),
                date.day(),
                MONTHS_EN[month],
                date.year()
            ),
            Locale::BrazilianPortuguese => format!(
                "{}, {} de {} de {}",
                date.weekday().to_long_pt(),
                date.day(),
                MONTHS_PT[month],
                date.year()
            ),
        }
    }
}
