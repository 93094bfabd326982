//! Class schedule and calendar.
//!
//! The schedule is read from two JSON files: the list of classes and the
//! list of elective disciplines. Electives are only shown once selected.

mod calendar;
mod types;

pub use calendar::{day_header, month_name, DayCell, MonthGrid, Schedule, MONTH_NAMES, WEEKDAYS};
pub use types::{note_key, ClassFormat, ClassSession, DayType};
