use serde::{Deserialize, Serialize};

/// Preferred purchase day of a customer preference.
///
/// Ordering starts at Monday to match how the preference list is sorted
/// for delivery planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn code(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Monday = 0 .. Sunday = 6
    pub fn order_index(&self) -> usize {
        *self as usize
    }

    pub fn all() -> Vec<Weekday> {
        vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Monday" => Some(Weekday::Monday),
            "Tuesday" => Some(Weekday::Tuesday),
            "Wednesday" => Some(Weekday::Wednesday),
            "Thursday" => Some(Weekday::Thursday),
            "Friday" => Some(Weekday::Friday),
            "Saturday" => Some(Weekday::Saturday),
            "Sunday" => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Weekday of an ISO `YYYY-MM-DD` date, if it parses
    pub fn from_iso_date(date: &str) -> Option<Self> {
        let parsed = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
        Some(match chrono::Datelike::weekday(&parsed) {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        })
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_index_starts_monday() {
        assert_eq!(Weekday::Monday.order_index(), 0);
        assert_eq!(Weekday::Sunday.order_index(), 6);
        assert!(Weekday::Tuesday < Weekday::Saturday);
    }

    #[test]
    fn from_iso_date() {
        // 2026-08-03 is a Monday
        assert_eq!(Weekday::from_iso_date("2026-08-03"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_iso_date("not-a-date"), None);
    }
}
