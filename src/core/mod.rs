//! Core utilities shared across features.

mod datetime;

pub use datetime::{format_schedule_date, parse_day, parse_day_relative_to, parse_schedule_date};
