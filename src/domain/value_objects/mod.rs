pub mod locale;
pub mod weekday_format;

pub use locale::Locale;
pub use weekday_format::WeekdayFormat;
