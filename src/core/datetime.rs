//! Date parsing utilities.
//!
//! Command-line dates and the `M/D/YYYY` dates used by schedule files.

use chrono::{Duration, Local, NaiveDate};

/// Parse a day given on the command line.
///
/// Supports:
/// - `today`, `tomorrow`, `yesterday` and `сегодня`, `завтра`, `вчера`
/// - `2025-03-14` (ISO format)
/// - `14.03.2025` (day-first format)
///
/// Returns `None` if the input cannot be parsed.
#[must_use]
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    parse_day_relative_to(input, Local::now().date_naive())
}

/// Like [`parse_day`], with an explicit "today".
#[must_use]
pub fn parse_day_relative_to(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "today" | "сегодня" => return Some(today),
        "tomorrow" | "завтра" => return Some(today + Duration::days(1)),
        "yesterday" | "вчера" => return Some(today - Duration::days(1)),
        _ => {},
    }

    NaiveDate::parse_from_str(&input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&input, "%d.%m.%Y"))
        .ok()
}

/// Parse a schedule date in `M/D/YYYY` form. Leading zeros are accepted.
#[must_use]
pub fn parse_schedule_date(input: &str) -> Option<NaiveDate> {
    let mut parts = input.trim().split('/');
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a date the way schedule files write it: `M/D/YYYY`, no padding.
#[must_use]
pub fn format_schedule_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
    }

    #[test]
    fn test_relative_days() {
        assert_eq!(parse_day_relative_to("today", today()), Some(today()));
        assert_eq!(
            parse_day_relative_to("Завтра", today()),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(
            parse_day_relative_to("yesterday", today()),
            NaiveDate::from_ymd_opt(2025, 2, 27)
        );
    }

    #[test]
    fn test_absolute_days() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14);
        assert_eq!(parse_day_relative_to("2025-03-14", today()), expected);
        assert_eq!(parse_day_relative_to("14.03.2025", today()), expected);
    }

    #[test]
    fn test_invalid_days() {
        assert_eq!(parse_day_relative_to("", today()), None);
        assert_eq!(parse_day_relative_to("next week", today()), None);
        assert_eq!(parse_day_relative_to("2025-02-30", today()), None);
    }

    #[test]
    fn test_schedule_date() {
        assert_eq!(
            parse_schedule_date("3/14/2025"),
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
        assert_eq!(
            parse_schedule_date("03/04/2025"),
            NaiveDate::from_ymd_opt(2025, 3, 4)
        );
        assert_eq!(parse_schedule_date("14/3/2025"), None);
        assert_eq!(parse_schedule_date("3/14"), None);
        assert_eq!(parse_schedule_date("3/14/2025/1"), None);
    }

    #[test]
    fn test_format_schedule_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_schedule_date(date), "3/4/2025");
        assert_eq!(parse_schedule_date(&format_schedule_date(date)), Some(date));
    }
}
