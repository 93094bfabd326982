//! Elective selection commands.

use super::Context;
use crate::cli::args::ElectivesCommands;
use crate::error::ScheduleError;
use crate::features::electives::ElectiveSelection;
use crate::output::{format_electives, format_message};

/// Execute electives subcommand
///
/// # Errors
///
/// Returns an error if the schedule or store cannot be used, or a selected
/// name is not an elective.
pub fn electives(ctx: &Context, cmd: ElectivesCommands) -> Result<String, ScheduleError> {
    let store = ctx.store()?;

    match cmd {
        ElectivesCommands::List => {
            let schedule = ctx.schedule()?;
            let selection = ElectiveSelection::load(&store)?;
            format_electives(schedule.electives(), &selection, ctx.format)
        },
        ElectivesCommands::Select { names } => {
            let schedule = ctx.schedule()?;
            let selection = ElectiveSelection::choose(&schedule, &names)?;
            selection.save(&store)?;
            tracing::info!(count = selection.names().len(), "saved elective selection");
            format_electives(schedule.electives(), &selection, ctx.format)
        },
        ElectivesCommands::Reset => {
            let message = if ElectiveSelection::reset(&store)? {
                "Elective selection cleared"
            } else {
                "No electives were selected"
            };
            format_message(message, ctx.format)
        },
    }
}
