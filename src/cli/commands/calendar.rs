//! Calendar and day views.

use chrono::NaiveDate;

use super::Context;
use crate::error::ScheduleError;
use crate::features::electives::ElectiveSelection;
use crate::features::notes::NotesBook;
use crate::features::tasks::TaskStore;
use crate::output::{format_calendar, format_day, ClassEntry, DayView};

/// Execute calendar command
///
/// Without a month, shows every month that has classes.
///
/// # Errors
///
/// Returns an error if the schedule or the selection cannot be loaded.
pub fn calendar(ctx: &Context, month: Option<(i32, u32)>) -> Result<String, ScheduleError> {
    let schedule = ctx.schedule()?;
    let selection = ElectiveSelection::load(&ctx.store()?)?;
    if selection.is_empty() && !schedule.electives().is_empty() {
        tracing::info!("no electives selected, showing mandatory classes only");
    }

    let months = month.map_or_else(|| schedule.months(), |m| vec![m]);
    let grids: Vec<_> = months
        .into_iter()
        .filter_map(|(year, month)| schedule.month_grid(year, month, selection.names()))
        .collect();

    format_calendar(&grids, ctx.format)
}

/// Execute day command
///
/// # Errors
///
/// Returns an error if the schedule or stored data cannot be loaded.
pub fn day(ctx: &Context, date: NaiveDate) -> Result<String, ScheduleError> {
    let schedule = ctx.schedule()?;
    let store = ctx.store()?;
    let selection = ElectiveSelection::load(&store)?;
    let notes = NotesBook::load(&store)?;
    let tasks = TaskStore::load(&store)?;

    let classes = schedule
        .classes_for_date(date, selection.names())
        .into_iter()
        .map(|session| ClassEntry {
            note: notes.get(&session.note_key()),
            session,
        })
        .collect();

    let view = DayView {
        date,
        day_type: schedule.day_type(date, selection.names()),
        classes,
        tasks: tasks.tasks_for(date),
    };
    format_day(&view, ctx.format)
}
