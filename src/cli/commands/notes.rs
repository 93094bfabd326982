//! Class note commands.

use chrono::NaiveDate;

use super::Context;
use crate::cli::args::NoteCommands;
use crate::error::ScheduleError;
use crate::features::electives::ElectiveSelection;
use crate::features::notes::{NoteChange, NotesBook};
use crate::output::format_message;
use crate::schedule::day_header;

/// Execute note subcommand
///
/// # Errors
///
/// Returns an error if the class cannot be identified or the store fails.
pub fn note(ctx: &Context, cmd: NoteCommands) -> Result<String, ScheduleError> {
    match cmd {
        NoteCommands::Set {
            date,
            discipline,
            text,
            time,
        } => set_note(ctx, date, &discipline, &text, time.as_deref()),
        NoteCommands::Reset => {
            let message = if NotesBook::reset(&ctx.store()?)? {
                "All notes deleted"
            } else {
                "There were no notes"
            };
            format_message(message, ctx.format)
        },
    }
}

fn set_note(
    ctx: &Context,
    date: NaiveDate,
    discipline: &str,
    text: &str,
    time: Option<&str>,
) -> Result<String, ScheduleError> {
    let schedule = ctx.schedule()?;
    let store = ctx.store()?;
    let selection = ElectiveSelection::load(&store)?;

    let candidates: Vec<_> = schedule
        .classes_for_date(date, selection.names())
        .into_iter()
        .filter(|s| s.discipline == discipline)
        .filter(|s| time.map_or(true, |t| s.time.trim() == t.trim()))
        .collect();

    let session = match candidates.as_slice() {
        [] => {
            return Err(ScheduleError::NotFound(format!(
                "class '{discipline}' on {}",
                day_header(date)
            )))
        },
        [session] => *session,
        several => {
            let times: Vec<&str> = several.iter().map(|s| s.time.as_str()).collect();
            return Err(ScheduleError::invalid(format!(
                "'{discipline}' has several classes that day; pass --time with one of: {}",
                times.join(", ")
            )));
        },
    };

    let mut notes = NotesBook::load(&store)?;
    let change = notes.set(&session.note_key(), text, ctx.config.notes.max_chars);
    notes.save(&store)?;

    let message = match change {
        NoteChange::Removed => format!("Note removed: {discipline}, {}", session.time),
        NoteChange::Saved { truncated: false } => {
            format!("Note saved: {discipline}, {}", session.time)
        },
        NoteChange::Saved { truncated: true } => format!(
            "Note saved: {discipline}, {} (cut to {} characters)",
            session.time, ctx.config.notes.max_chars
        ),
    };
    format_message(&message, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context;
    use super::*;
    use crate::cli::args::OutputFormat;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn set(discipline: &str, text: &str, time: Option<&str>) -> NoteCommands {
        NoteCommands::Set {
            date: date(3, 17),
            discipline: discipline.to_string(),
            text: text.to_string(),
            time: time.map(str::to_string),
        }
    }

    #[test]
    fn test_set_and_remove_note() {
        let (_dir, ctx) = context(OutputFormat::Pretty);

        let out = note(&ctx, set("История", "  прочитать главу 3 ", None)).unwrap();
        assert!(out.contains("Note saved"));
        let notes = NotesBook::load(&ctx.store().unwrap()).unwrap();
        assert_eq!(notes.get("3/17/2025_История_9:00-10:30"), Some("прочитать главу 3"));

        let out = note(&ctx, set("История", "", None)).unwrap();
        assert!(out.contains("Note removed"));
        assert!(NotesBook::load(&ctx.store().unwrap()).unwrap().is_empty());
    }

    #[test]
    fn test_ambiguous_class_needs_time() {
        let (_dir, ctx) = context(OutputFormat::Pretty);
        let cmd = NoteCommands::Set {
            date: date(3, 14),
            discipline: "Алгебра".to_string(),
            text: "дз".to_string(),
            time: None,
        };
        match note(&ctx, cmd) {
            Err(ScheduleError::InvalidInput(msg)) => assert!(msg.contains("13:00-14:30")),
            other => panic!("unexpected: {other:?}"),
        }

        let cmd = NoteCommands::Set {
            date: date(3, 14),
            discipline: "Алгебра".to_string(),
            text: "дз".to_string(),
            time: Some("13:00-14:30".to_string()),
        };
        assert!(note(&ctx, cmd).is_ok());
    }

    #[test]
    fn test_unknown_class() {
        let (_dir, ctx) = context(OutputFormat::Pretty);
        assert!(matches!(
            note(&ctx, set("Химия", "x", None)),
            Err(ScheduleError::NotFound(_))
        ));
    }

    #[test]
    fn test_long_note_is_cut() {
        let (_dir, mut ctx) = context(OutputFormat::Pretty);
        ctx.config.notes.max_chars = 5;
        let out = note(&ctx, set("История", "очень длинная заметка", None)).unwrap();
        assert!(out.contains("cut to 5"));
        let notes = NotesBook::load(&ctx.store().unwrap()).unwrap();
        assert_eq!(notes.get("3/17/2025_История_9:00-10:30"), Some("очень"));
    }

    #[test]
    fn test_reset() {
        let (_dir, ctx) = context(OutputFormat::Pretty);
        note(&ctx, set("История", "x", None)).unwrap();
        assert!(note(&ctx, NoteCommands::Reset).unwrap().contains("deleted"));
        assert!(note(&ctx, NoteCommands::Reset).unwrap().contains("no notes"));
    }
}
