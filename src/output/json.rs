//! JSON output formatting for raspis.

use chrono::NaiveDate;
use serde_json::{json, Value};

use super::DayView;
use crate::error::ScheduleError;
use crate::features::electives::ElectiveSelection;
use crate::features::nlp::{ParseOutcome, EXAMPLE_EXPRESSIONS};
use crate::features::tasks::{TaskOutcome, TaskRecord};
use crate::schedule::MonthGrid;

/// Format a parse outcome as JSON
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_parse_json(input: &str, outcome: &ParseOutcome) -> Result<String, ScheduleError> {
    let mut output = json!({
        "input": input,
        "kind": outcome.kind(),
        "value": outcome.stored_value(),
    });
    match outcome {
        ParseOutcome::Range(range) => {
            output["start"] = json!(range.start.to_string());
            output["end"] = json!(range.end.to_string());
            output["crosses_midnight"] = json!(range.crosses_midnight());
        },
        ParseOutcome::Rejected => {
            output["examples"] = json!(EXAMPLE_EXPRESSIONS);
        },
        ParseOutcome::Empty | ParseOutcome::Single(_) => {},
    }
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format month grids as JSON
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_calendar_json(grids: &[MonthGrid]) -> Result<String, ScheduleError> {
    let output = json!({
        "count": grids.len(),
        "months": grids
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a day view as JSON
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_day_json(day: &DayView<'_>) -> Result<String, ScheduleError> {
    let classes: Vec<Value> = day
        .classes
        .iter()
        .map(|entry| {
            json!({
                "discipline": entry.session.discipline,
                "time": entry.session.time,
                "teacher": entry.session.teacher,
                "format": entry.session.format,
                "location": entry.session.location(),
                "note_key": entry.session.note_key(),
                "note": entry.note,
            })
        })
        .collect();

    let output = json!({
        "date": day.date,
        "day_type": day.day_type,
        "classes": classes,
        "tasks": day.tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the tasks of a day as JSON
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_tasks_json(date: NaiveDate, tasks: &[TaskRecord]) -> Result<String, ScheduleError> {
    let output = json!({
        "date": date,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a task creation result as JSON
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_task_outcome_json(outcome: &TaskOutcome) -> Result<String, ScheduleError> {
    let output = match outcome {
        TaskOutcome::Cancelled => json!({ "status": "cancelled" }),
        TaskOutcome::Created {
            date,
            position,
            task,
            unparsed_time,
        } => json!({
            "status": "created",
            "date": date,
            "position": position,
            "task": task,
            "unparsed_time": unparsed_time,
        }),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format electives as JSON
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_electives_json(
    available: &[String],
    selection: &ElectiveSelection,
) -> Result<String, ScheduleError> {
    let items: Vec<Value> = available
        .iter()
        .map(|name| json!({ "name": name, "selected": selection.contains(name) }))
        .collect();
    let output = json!({
        "count": items.len(),
        "selected": selection.names(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a confirmation message as JSON
///
/// # Errors
///
/// Returns `ScheduleError::Json` if JSON serialization fails.
pub fn format_message_json(message: &str) -> Result<String, ScheduleError> {
    let output = json!({
        "status": "ok",
        "message": message
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
