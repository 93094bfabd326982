//! Output formatting for raspis.
//!
//! Every command result can be shown as colored text or as JSON.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::ScheduleError;
use crate::features::electives::ElectiveSelection;
use crate::features::nlp::ParseOutcome;
use crate::features::tasks::{TaskOutcome, TaskRecord};
use crate::schedule::{ClassSession, DayType, MonthGrid};

pub use json::*;
pub use pretty::*;

/// A class of a day view with its note.
#[derive(Debug, Clone)]
pub struct ClassEntry<'a> {
    pub session: &'a ClassSession,
    pub note: Option<&'a str>,
}

/// Everything shown for one day.
#[derive(Debug, Clone)]
pub struct DayView<'a> {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub classes: Vec<ClassEntry<'a>>,
    pub tasks: &'a [TaskRecord],
}

/// Format the result of parsing a time expression.
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_parse(
    input: &str,
    outcome: &ParseOutcome,
    format: OutputFormat,
) -> Result<String, ScheduleError> {
    match format {
        OutputFormat::Pretty => Ok(format_parse_pretty(input, outcome)),
        OutputFormat::Json => format_parse_json(input, outcome),
    }
}

/// Format month grids.
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_calendar(grids: &[MonthGrid], format: OutputFormat) -> Result<String, ScheduleError> {
    match format {
        OutputFormat::Pretty => Ok(format_calendar_pretty(grids)),
        OutputFormat::Json => format_calendar_json(grids),
    }
}

/// Format a day view.
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_day(day: &DayView<'_>, format: OutputFormat) -> Result<String, ScheduleError> {
    match format {
        OutputFormat::Pretty => Ok(format_day_pretty(day)),
        OutputFormat::Json => format_day_json(day),
    }
}

/// Format the tasks of a day.
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_tasks(
    date: NaiveDate,
    tasks: &[TaskRecord],
    format: OutputFormat,
) -> Result<String, ScheduleError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(date, tasks)),
        OutputFormat::Json => format_tasks_json(date, tasks),
    }
}

/// Format the result of creating a task.
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_task_outcome(
    outcome: &TaskOutcome,
    format: OutputFormat,
) -> Result<String, ScheduleError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_outcome_pretty(outcome)),
        OutputFormat::Json => format_task_outcome_json(outcome),
    }
}

/// Format the electives list with the current selection.
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_electives(
    available: &[String],
    selection: &ElectiveSelection,
    format: OutputFormat,
) -> Result<String, ScheduleError> {
    match format {
        OutputFormat::Pretty => Ok(format_electives_pretty(available, selection)),
        OutputFormat::Json => format_electives_json(available, selection),
    }
}

/// Format a short confirmation.
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_message(message: &str, format: OutputFormat) -> Result<String, ScheduleError> {
    match format {
        OutputFormat::Pretty => Ok(format_message_pretty(message)),
        OutputFormat::Json => format_message_json(message),
    }
}
