//! Date formatting helpers.
//!
//! Wire dates are ISO `YYYY-MM-DD` (sometimes with a time suffix); the
//! display format follows the configured language the way the original
//! locales did: `MM/DD/YYYY` for English, `DD/MM/YYYY` otherwise.

/// Format an ISO date for display.
/// Example: "2026-03-15T14:02:26Z", "en" -> "03/15/2026"
pub fn format_date(language: &str, date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return if language.starts_with("en") {
                format!("{}/{}/{}", month, day, year)
            } else {
                format!("{}/{}/{}", day, month, year)
            };
        }
    }
    date_str.to_string()
}

/// Today as wire-format `YYYY-MM-DD`
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_month_first() {
        assert_eq!(format_date("en", "2026-03-15"), "03/15/2026");
        assert_eq!(format_date("en", "2026-03-15T14:02:26Z"), "03/15/2026");
    }

    #[test]
    fn other_languages_are_day_first() {
        assert_eq!(format_date("pt-br", "2026-03-15"), "15/03/2026");
    }

    #[test]
    fn invalid_input_passes_through() {
        assert_eq!(format_date("en", "invalid"), "invalid");
    }
}
