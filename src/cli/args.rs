use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::parse_day;

#[derive(Parser)]
#[command(name = "raspis")]
#[command(about = "Class schedule calendar with notes and day tasks")]
#[command(long_about = "raspis - class schedule in the terminal

Shows the class schedule as a month calendar, filtered by the electives
you attend, and keeps notes on classes and personal tasks on days.
Task times are written the way you would say them, in Russian.

QUICK START:
  raspis electives select Философия   Choose your electives
  raspis calendar                     Show all months with classes
  raspis day today                    Classes and tasks of today
  raspis task add tomorrow \"Сдать отчёт\" --time \"6 вечера\"
  raspis parse \"пол третьего\"         Check how a time is understood

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  raspis <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Log filter (trace, debug, info, warn, error); logs go to stderr
    #[arg(long, env = "RASPIS_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how a time expression is understood
    ///
    /// Normalizes a free-form Russian time expression to HH:MM or a
    /// HH:MM–HH:MM range. Nothing is saved.
    ///
    /// # Examples
    ///
    ///   raspis parse 14:30
    ///   raspis parse с 9 до 11
    ///   raspis parse "пол третьего"
    ///   raspis -o json parse "7 вечера"
    #[command(alias = "p")]
    Parse {
        /// The time expression; several words are joined with spaces
        text: Vec<String>,
    },

    /// Show the month calendar
    ///
    /// Days are marked by their classes: in-person, online only, or none.
    /// Electives count only when selected.
    ///
    /// # Examples
    ///
    ///   raspis calendar                 All months that have classes
    ///   raspis calendar --month 2025-03
    #[command(alias = "cal")]
    Calendar {
        /// Show only this month (YYYY-MM)
        #[arg(long, short, value_parser = parse_month_arg)]
        month: Option<(i32, u32)>,
    },

    /// Show the classes, notes and tasks of a day
    ///
    /// # Examples
    ///
    ///   raspis day today
    ///   raspis day 2025-03-14
    ///   raspis day завтра -o json
    #[command(alias = "d")]
    Day {
        /// Day (YYYY-MM-DD, DD.MM.YYYY, today, tomorrow, yesterday)
        #[arg(value_parser = parse_day_arg)]
        date: NaiveDate,
    },

    /// Choose which elective disciplines you attend
    Electives(ElectivesArgs),

    /// Keep notes on classes
    Note(NoteArgs),

    /// Manage personal tasks on days
    #[command(alias = "t")]
    Task(TaskArgs),
}

#[derive(Args)]
pub struct ElectivesArgs {
    #[command(subcommand)]
    pub command: ElectivesCommands,
}

#[derive(Subcommand)]
pub enum ElectivesCommands {
    /// List electives and mark the selected ones
    List,

    /// Replace the selection
    ///
    /// # Examples
    ///
    ///   raspis electives select Философия "Основы дизайна"
    Select {
        /// Elective names, exactly as in the electives file
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Forget the selection
    Reset,
}

#[derive(Args)]
pub struct NoteArgs {
    #[command(subcommand)]
    pub command: NoteCommands,
}

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Set the note of a class
    ///
    /// Blank text removes the note. Notes longer than `notes.max_chars`
    /// are cut.
    ///
    /// # Examples
    ///
    ///   raspis note set 2025-03-14 Алгебра "контрольная, взять калькулятор"
    ///   raspis note set today История "" --time 11:00-12:30
    Set {
        /// Day of the class
        #[arg(value_parser = parse_day_arg)]
        date: NaiveDate,
        /// Discipline of the class
        discipline: String,
        /// Note text
        text: String,
        /// Class time, when the discipline has several classes that day
        #[arg(long)]
        time: Option<String>,
    },

    /// Delete all notes
    Reset,
}

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to a day
    ///
    /// Without --time the time is asked interactively: an empty answer
    /// leaves it blank, 'отмена' cancels, and after three answers that
    /// are not understood the task is saved without a time.
    ///
    /// # Examples
    ///
    ///   raspis task add tomorrow "Сдать отчёт" --time "в 6 вечера"
    ///   raspis task add 2025-03-14 Консультация --time "с 10 до 12"
    ///   raspis task add today "Купить тетради" --time ""
    ///   raspis task add today "Позвонить старосте"
    Add {
        #[arg(value_parser = parse_day_arg)]
        date: NaiveDate,
        /// Task title
        title: String,
        /// Time expression, e.g. 14:30, "пол третьего", "с 9 до 11"
        #[arg(long)]
        time: Option<String>,
        /// Note, up to 512 characters
        #[arg(long)]
        note: Option<String>,
    },

    /// List the tasks of a day
    List {
        #[arg(value_parser = parse_day_arg)]
        date: NaiveDate,
    },

    /// Remove a task by its number in the day's list
    Remove {
        #[arg(value_parser = parse_day_arg)]
        date: NaiveDate,
        /// 1-based number, as shown by 'task list'
        index: usize,
    },
}

/// Parse a command-line day.
///
/// # Errors
///
/// Returns a message if the text is not a supported date.
pub fn parse_day_arg(input: &str) -> Result<NaiveDate, String> {
    parse_day(input).ok_or_else(|| {
        format!("invalid date '{input}' (use YYYY-MM-DD, DD.MM.YYYY, today or tomorrow)")
    })
}

/// Parse a `YYYY-MM` month.
///
/// # Errors
///
/// Returns a message if the text is not a valid month.
pub fn parse_month_arg(input: &str) -> Result<(i32, u32), String> {
    let invalid = || format!("invalid month '{input}' (use YYYY-MM)");
    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if (1..=12).contains(&month) {
        Ok((year, month))
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::try_parse_from(["raspis", "parse", "14:30"]).unwrap();
        assert!(cli.output.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["raspis", "--output", "json", "parse", "14:30"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_short_after_subcommand() {
        let cli = Cli::try_parse_from(["raspis", "day", "2025-03-14", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_parse_joins_words() {
        let cli = Cli::try_parse_from(["raspis", "parse", "с", "9", "до", "11"]).unwrap();
        match cli.command {
            Commands::Parse { text } => assert_eq!(text.join(" "), "с 9 до 11"),
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_cli_calendar_month() {
        let cli = Cli::try_parse_from(["raspis", "calendar", "--month", "2025-03"]).unwrap();
        match cli.command {
            Commands::Calendar { month } => assert_eq!(month, Some((2025, 3))),
            _ => panic!("Expected Calendar command"),
        }
        assert!(Cli::try_parse_from(["raspis", "calendar", "--month", "2025-13"]).is_err());
    }

    #[test]
    fn test_cli_task_add() {
        let cli = Cli::try_parse_from([
            "raspis",
            "task",
            "add",
            "2025-03-14",
            "Экзамен",
            "--time",
            "в 9 утра",
            "--note",
            "ауд. 204",
        ])
        .unwrap();
        match cli.command {
            Commands::Task(TaskArgs {
                command: TaskCommands::Add { date, title, time, note },
            }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
                assert_eq!(title, "Экзамен");
                assert_eq!(time.as_deref(), Some("в 9 утра"));
                assert_eq!(note.as_deref(), Some("ауд. 204"));
            },
            _ => panic!("Expected Task Add command"),
        }
    }

    #[test]
    fn test_cli_task_remove() {
        let cli = Cli::try_parse_from(["raspis", "task", "remove", "14.03.2025", "2"]).unwrap();
        match cli.command {
            Commands::Task(TaskArgs {
                command: TaskCommands::Remove { date, index },
            }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
                assert_eq!(index, 2);
            },
            _ => panic!("Expected Task Remove command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Cli::try_parse_from(["raspis", "day", "someday"]).is_err());
    }

    #[test]
    fn test_cli_electives_select_requires_names() {
        assert!(Cli::try_parse_from(["raspis", "electives", "select"]).is_err());
        let cli = Cli::try_parse_from(["raspis", "electives", "select", "Философия"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Electives(ElectivesArgs {
                command: ElectivesCommands::Select { .. }
            })
        ));
    }

    #[test]
    fn test_cli_note_set() {
        let cli = Cli::try_parse_from([
            "raspis", "note", "set", "2025-03-14", "Алгебра", "контрольная", "--time", "9:00",
        ])
        .unwrap();
        match cli.command {
            Commands::Note(NoteArgs {
                command: NoteCommands::Set { discipline, text, time, .. },
            }) => {
                assert_eq!(discipline, "Алгебра");
                assert_eq!(text, "контрольная");
                assert_eq!(time.as_deref(), Some("9:00"));
            },
            _ => panic!("Expected Note Set command"),
        }
    }

    #[test]
    fn test_parse_month_arg() {
        assert_eq!(parse_month_arg("2025-01"), Ok((2025, 1)));
        assert!(parse_month_arg("2025").is_err());
        assert!(parse_month_arg("2025-00").is_err());
        assert!(parse_month_arg("март").is_err());
    }
}
