//! Natural language time-expression parser.
//!
//! Turns free-form Russian input such as "около 15:00", "с 9 до 11",
//! "2 дня" or "пол третьего" into a canonical `HH:MM` time or
//! `HH:MM–HH:MM` range.

use once_cell::sync::Lazy;
use regex::Regex;

use super::time::{ClockTime, ParseOutcome, TimeRange};
use super::vocab::{FractionalHourTable, HourWordTable};

/// Expressions shown to the user after an input was not understood.
pub const EXAMPLE_EXPRESSIONS: &[&str] = &[
    "14:30",
    "18.00",
    "9:00-10:30",
    "с 9 до 11",
    "от 10 до 12",
    "2 дня",
    "7 вечера",
    "пол третьего",
    "четверть седьмого",
    "в семь",
];

/// Leading qualifiers that carry no value ("около 15:00" means 15:00).
///
/// Longest first, so "в районе" is not cut down to "районе".
const QUALIFIERS: &[&str] = &[
    "где-то в районе",
    "ориентировочно в",
    "приблизительно в",
    "где-то около",
    "ориентировочно",
    "приблизительно",
    "примерно в",
    "где-то в",
    "в районе",
    "примерно",
    "где-то",
    "около",
    "в",
];

// "7 часов" -> "7"
static HOUR_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*\S)\s+(?:часов|часа|час)$")
        .unwrap_or_else(|e| panic!("Invalid hour suffix regex: {e}"))
});

// "15ч", "15 ч." -> "15"
static ABBREVIATED_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*[0-9])\s*ч\.?$")
        .unwrap_or_else(|e| panic!("Invalid abbreviated suffix regex: {e}"))
});

static DASH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s*[-–—]\s*(.+)$").unwrap_or_else(|e| panic!("Invalid dash range regex: {e}"))
});

static S_DO_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^с\s+(.+?)\s+до\s+(.+)$").unwrap_or_else(|e| panic!("Invalid с..до regex: {e}"))
});

static OT_DO_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^от\s+(.+?)\s+до\s+(.+)$").unwrap_or_else(|e| panic!("Invalid от..до regex: {e}"))
});

static SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})(?:[:.]([0-9]{2}))?$")
        .unwrap_or_else(|e| panic!("Invalid segment regex: {e}"))
});

static STRICT_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})[:.]([0-9]{2})$")
        .unwrap_or_else(|e| panic!("Invalid strict time regex: {e}"))
});

static PERIOD_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{1,2})(?:[:.]([0-9]{2}))?(?:\s*(?:часов|часа|час|ч\.?))?\s+(утра|утром|дня|днем|вечера|вечером|ночи|ночью)$",
    )
    .unwrap_or_else(|e| panic!("Invalid period time regex: {e}"))
});

static BARE_HOUR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})$").unwrap_or_else(|e| panic!("Invalid bare hour regex: {e}"))
});

/// Part of the day named after a clock time ("7 вечера").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayPeriod {
    Morning,
    Day,
    Evening,
    Night,
}

impl DayPeriod {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "утра" | "утром" => Some(Self::Morning),
            "дня" | "днем" => Some(Self::Day),
            "вечера" | "вечером" => Some(Self::Evening),
            "ночи" | "ночью" => Some(Self::Night),
            _ => None,
        }
    }

    /// Move a 12-hour clock hour into the 24-hour day.
    ///
    /// Hours above 12 are already unambiguous and pass through.
    const fn shift(self, hour: u8) -> u8 {
        match self {
            Self::Morning | Self::Evening | Self::Night if hour == 12 => 0,
            Self::Day | Self::Evening if hour < 12 => hour + 12,
            _ => hour,
        }
    }
}

/// Parser for Russian time expressions.
///
/// Holds only read-only vocabulary tables, so a single instance can be
/// shared freely.
#[derive(Debug, Clone, Copy)]
pub struct TimeParser<'a> {
    hours: &'a HourWordTable,
    fractions: &'a FractionalHourTable,
}

impl Default for TimeParser<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl TimeParser<'static> {
    /// Parser over the built-in vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(HourWordTable::standard(), FractionalHourTable::standard())
    }
}

impl<'a> TimeParser<'a> {
    /// Parser over custom vocabulary tables.
    #[must_use]
    pub const fn new(hours: &'a HourWordTable, fractions: &'a FractionalHourTable) -> Self {
        Self { hours, fractions }
    }

    /// Parse a time expression.
    ///
    /// Never fails: every input maps to one of the [`ParseOutcome`] variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use raspis::features::nlp::{ParseOutcome, TimeParser};
    ///
    /// let parser = TimeParser::standard();
    /// assert_eq!(parser.parse("").stored_value().as_deref(), Some(""));
    /// assert_eq!(parser.parse("с 9 до 11").stored_value().as_deref(), Some("09:00–11:00"));
    /// assert_eq!(parser.parse("пол третьего").stored_value().as_deref(), Some("02:30"));
    /// assert_eq!(parser.parse("завтра"), ParseOutcome::Rejected);
    /// ```
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseOutcome {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return ParseOutcome::Empty;
        }
        let text = strip_unit_suffix(strip_qualifiers(&normalized));

        // A range that matched textually but has invalid endpoints is not
        // rejected here; the whole text is retried as a single time.
        if let Some((start, end)) = match_range(&text) {
            if let (Some(start), Some(end)) = (parse_segment(start), parse_segment(end)) {
                return ParseOutcome::Range(TimeRange::new(start, end));
            }
        }

        self.parse_single(&text)
            .map_or(ParseOutcome::Rejected, ParseOutcome::Single)
    }

    fn parse_single(&self, text: &str) -> Option<ClockTime> {
        strict_time(text)
            .or_else(|| period_time(text))
            .or_else(|| self.fractional_time(text))
            .or_else(|| self.hour_word_time(text))
            .or_else(|| bare_hour(text))
    }

    /// "половина третьего", "в четверть седьмого", "три четверти восьмого".
    fn fractional_time(&self, text: &str) -> Option<ClockTime> {
        let body = text.strip_prefix("в ").unwrap_or(text);
        let (offset, rest) = self.fractions.split_leading(body)?;
        let hour = self.hours.lookup(rest)?;
        Some(ClockTime::from_minutes(
            u32::from(hour) * 60 + u32::from(offset),
        ))
    }

    /// "в семь", "семь", "двадцать один".
    fn hour_word_time(&self, text: &str) -> Option<ClockTime> {
        let body = text.strip_prefix("в ").unwrap_or(text);
        self.hours.lookup(body).and_then(|hour| ClockTime::new(hour, 0))
    }
}

/// Parse with the built-in vocabulary.
#[must_use]
pub fn parse_time_expression(input: &str) -> ParseOutcome {
    TimeParser::standard().parse(input)
}

/// Lower-case, fold `ё` into `е` and collapse whitespace.
fn normalize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .replace('ё', "е")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_qualifiers(text: &str) -> &str {
    let mut rest = text;
    while let Some(stripped) = QUALIFIERS.iter().find_map(move |q| {
        rest.strip_prefix(q)
            .and_then(|after| after.strip_prefix(' '))
    }) {
        rest = stripped;
    }
    rest
}

fn strip_unit_suffix(text: &str) -> String {
    let text = HOUR_SUFFIX.replace(text, "$1");
    ABBREVIATED_SUFFIX.replace(&text, "$1").into_owned()
}

/// First structural range match: dash, then "с .. до", then "от .. до".
fn match_range(text: &str) -> Option<(&str, &str)> {
    [&*DASH_RANGE, &*S_DO_RANGE, &*OT_DO_RANGE]
        .into_iter()
        .find_map(|pattern| {
            let caps = pattern.captures(text)?;
            Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
        })
}

fn clock_from_parts(hour: &str, minute: Option<&str>) -> Option<ClockTime> {
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.map_or(Some(0), |m| m.parse().ok())?;
    ClockTime::new(hour, minute)
}

fn parse_segment(segment: &str) -> Option<ClockTime> {
    let caps = SEGMENT.captures(segment.trim())?;
    clock_from_parts(caps.get(1)?.as_str(), caps.get(2).map(|m| m.as_str()))
}

fn strict_time(text: &str) -> Option<ClockTime> {
    let caps = STRICT_TIME.captures(text)?;
    clock_from_parts(caps.get(1)?.as_str(), Some(caps.get(2)?.as_str()))
}

fn period_time(text: &str) -> Option<ClockTime> {
    let caps = PERIOD_TIME.captures(text)?;
    let hour: u8 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u8 = caps.get(2).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let period = DayPeriod::from_word(caps.get(3)?.as_str())?;
    ClockTime::new(period.shift(hour), minute)
}

fn bare_hour(text: &str) -> Option<ClockTime> {
    let caps = BARE_HOUR.captures(text)?;
    clock_from_parts(caps.get(1)?.as_str(), None)
}
