//! Natural language parsing for task times.
//!
//! This module parses free-form Russian time expressions like:
//! - "14:30", "18.00"
//! - "с 9 до 11", "18:00-19:30"
//! - "2 дня", "7 вечера"
//! - "пол третьего", "четверть седьмого"
//! - "около 15:00", "в семь"

mod parser;
mod time;
mod vocab;

pub use parser::{parse_time_expression, TimeParser, EXAMPLE_EXPRESSIONS};
pub use time::{ClockTime, ParseOutcome, TimeRange};
pub use vocab::{FractionalHourTable, HourWordTable};
