//! Task commands.

use chrono::NaiveDate;

use super::Context;
use crate::cli::args::TaskCommands;
use crate::error::ScheduleError;
use crate::features::nlp::TimeParser;
use crate::features::tasks::{
    create_task, TaskDraft, TaskOutcome, TaskStore, TerminalPrompt, TimeSource,
};
use crate::output::{format_message, format_task_outcome, format_tasks};

/// Execute task subcommand
///
/// # Errors
///
/// Returns an error if the store cannot be used, the title is blank, a
/// given time is not understood, or the task does not exist.
pub fn task(ctx: &Context, cmd: TaskCommands) -> Result<String, ScheduleError> {
    match cmd {
        TaskCommands::Add {
            date,
            title,
            time,
            note,
        } => {
            let draft = TaskDraft { date, title, note };
            match time {
                Some(expr) => add_task(ctx, draft, TimeSource::Given(&expr)),
                None => {
                    let mut prompt = TerminalPrompt::stdio();
                    add_task(ctx, draft, TimeSource::Prompt(&mut prompt))
                },
            }
        },
        TaskCommands::List { date } => {
            let tasks = TaskStore::load(&ctx.store()?)?;
            format_tasks(date, tasks.tasks_for(date), ctx.format)
        },
        TaskCommands::Remove { date, index } => remove_task(ctx, date, index),
    }
}

/// Create a task, asking for its time through `time` if needed.
///
/// # Errors
///
/// See [`create_task`].
pub fn add_task(
    ctx: &Context,
    draft: TaskDraft,
    time: TimeSource<'_>,
) -> Result<String, ScheduleError> {
    let store = ctx.store()?;
    let mut tasks = TaskStore::load(&store)?;

    let outcome = create_task(&mut tasks, draft, time, &TimeParser::standard())?;
    if matches!(outcome, TaskOutcome::Created { .. }) {
        tasks.save(&store)?;
    }
    format_task_outcome(&outcome, ctx.format)
}

fn remove_task(ctx: &Context, date: NaiveDate, index: usize) -> Result<String, ScheduleError> {
    let store = ctx.store()?;
    let mut tasks = TaskStore::load(&store)?;
    let removed = tasks.remove(date, index)?;
    tasks.save(&store)?;
    tracing::info!(%date, index, "task removed");
    format_message(&format!("Removed task: {}", removed.title), ctx.format)
}
