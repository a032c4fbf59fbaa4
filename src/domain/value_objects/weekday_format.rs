use chrono::Weekday;

pub trait WeekdayFormat {
    fn to_long_en(&self) -> &'static str;
    fn to_lower_en(&self) -> &'static str;
    fn to_long_pt(&self) -> &'static str;
    fn wire_code(&self) -> u8;
    fn from_name(s: &str) -> Option<Weekday>;
    fn from_wire_code(code: u8) -> Option<Weekday>;
}

impl WeekdayFormat for Weekday {
    fn to_long_en(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Lowercase name used in the client JSON (`"monday"`, ...)
    fn to_lower_en(&self) -> &'static str {
        match self {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        }
    }

    /// Brazilian Portuguese weekday name, lowercase as pt-BR dates print it
    fn to_long_pt(&self) -> &'static str {
        match self {
            Weekday::Mon => "segunda-feira",
            Weekday::Tue => "terça-feira",
            Weekday::Wed => "quarta-feira",
            Weekday::Thu => "quinta-feira",
            Weekday::Fri => "sexta-feira",
            Weekday::Sat => "sábado",
            Weekday::Sun => "domingo",
        }
    }

    /// Backend day code, Sunday = 1 ... Saturday = 7
    fn wire_code(&self) -> u8 {
        self.num_days_from_sunday() as u8 + 1
    }

    /// Parses string representation into Weekday enum
    fn from_name(s: &str) -> Option<Weekday> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Some(Weekday::Mon),
            "tuesday" | "tue" => Some(Weekday::Tue),
            "wednesday" | "wed" => Some(Weekday::Wed),
            "thursday" | "thu" => Some(Weekday::Thu),
            "friday" | "fri" => Some(Weekday::Fri),
            "saturday" | "sat" => Some(Weekday::Sat),
            "sunday" | "sun" => Some(Weekday::Sun),
            _ => None,
        }
    }

    fn from_wire_code(code: u8) -> Option<Weekday> {
        match code {
            1 => Some(Weekday::Sun),
            2 => Some(Weekday::Mon),
            3 => Some(Weekday::Tue),
            4 => Some(Weekday::Wed),
            5 => Some(Weekday::Thu),
            6 => Some(Weekday::Fri),
            7 => Some(Weekday::Sat),
            _ => None,
        }
    }
}
