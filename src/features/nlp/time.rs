//! Canonical clock values produced by the time-expression parser.

use std::fmt;

use chrono::NaiveTime;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision, no date and no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a time, rejecting hours above 23 and minutes above 59.
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour <= 23 && minute <= 59 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Build a time from minutes since midnight, wrapping past 24:00.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_minutes(total: u32) -> Self {
        // Both casts are in range after the modulo.
        let wrapped = total % MINUTES_PER_DAY;
        Self {
            hour: (wrapped / 60) as u8,
            minute: (wrapped % 60) as u8,
        }
    }

    /// Hour of the day (0–23).
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute of the hour (0–59).
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes_since_midnight(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Convert to a chrono time.
    #[must_use]
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or_default()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// An ordered pair of clock times.
///
/// No ordering is enforced; a range may cross midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// Start of the range.
    pub start: ClockTime,
    /// End of the range.
    pub end: ClockTime,
}

impl TimeRange {
    /// Create a range from its endpoints.
    #[must_use]
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Whether the end is earlier than the start.
    #[must_use]
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.start, self.end)
    }
}

/// Result of parsing a time expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The input was blank: no time given.
    Empty,
    /// A single time of day.
    Single(ClockTime),
    /// A time range.
    Range(TimeRange),
    /// The input was not understood.
    Rejected,
}

impl ParseOutcome {
    /// Whether the expression was not understood.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// The string stored on a task: `""` for no time, `HH:MM` or
    /// `HH:MM–HH:MM` otherwise. `None` when rejected.
    #[must_use]
    pub fn stored_value(&self) -> Option<String> {
        match self {
            Self::Empty => Some(String::new()),
            Self::Single(time) => Some(time.to_string()),
            Self::Range(range) => Some(range.to_string()),
            Self::Rejected => None,
        }
    }

    /// Short name of the variant, used in JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Single(_) => "single",
            Self::Range(_) => "range",
            Self::Rejected => "rejected",
        }
    }
}
