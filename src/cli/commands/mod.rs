//! Command implementations for raspis.
//!
//! Each command returns the text to print.

mod calendar;
mod electives;
mod notes;
mod tasks;

pub use calendar::{calendar, day};
pub use electives::electives;
pub use notes::note;
pub use tasks::task;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::ScheduleError;
use crate::features::nlp::parse_time_expression;
use crate::output::format_parse;
use crate::schedule::Schedule;
use crate::storage::{CloudStore, Database};

/// Everything a command needs: where data lives, settings, output format.
#[derive(Debug, Clone)]
pub struct Context {
    pub paths: Paths,
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    /// Context for the user's home directory.
    ///
    /// `output` overrides the configured default format.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown or the config is invalid.
    pub fn load(output: Option<OutputFormat>) -> Result<Self, ScheduleError> {
        let paths = Paths::new()?;
        let config = Config::load_from_path(&paths.config_file)?;
        Ok(Self::new(paths, config, output))
    }

    #[must_use]
    pub fn new(paths: Paths, config: Config, output: Option<OutputFormat>) -> Self {
        let format = output.unwrap_or(config.general.default_output);
        Self {
            paths,
            config,
            format,
        }
    }

    /// Load the schedule files named by the config.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule cannot be read.
    pub fn schedule(&self) -> Result<Schedule, ScheduleError> {
        Schedule::load(
            &self.config.schedule_file(&self.paths),
            &self.config.electives_file(&self.paths),
        )
    }

    /// Open the key-value store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn store(&self) -> Result<CloudStore, ScheduleError> {
        self.paths.ensure_dirs()?;
        Ok(CloudStore::with_database(Database::open_at(&self.paths.database)?))
    }
}

/// Execute parse command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(words: &[String], format: OutputFormat) -> Result<String, ScheduleError> {
    let input = words.join(" ");
    let outcome = parse_time_expression(&input);
    tracing::debug!(%input, kind = outcome.kind(), "parsed time expression");
    format_parse(&input, &outcome, format)
}

#[cfg(test)]
pub(crate) mod test_support {
    use tempfile::TempDir;

    use super::*;

    pub const SCHEDULE: &str = r#"[
        {"Дата":"3/14/2025","Дисциплина":"Алгебра","Время":"9:00-10:30","Преподаватель":"Иванова","Формат":"очная","Ауд.":"204"},
        {"Дата":"3/14/2025","Дисциплина":"Алгебра","Время":"13:00-14:30","Преподаватель":"Иванова","Формат":"очная","Ауд.":"204"},
        {"Дата":"3/14/2025","Дисциплина":"Философия","Время":"11:00-12:30","Преподаватель":"Сидоров","Формат":"онлайн"},
        {"Дата":"3/17/2025","Дисциплина":"История","Время":"9:00-10:30","Преподаватель":"Петров","Формат":"онлайн"},
        {"Дата":"4/1/2025","Дисциплина":"Философия","Время":"9:00-10:30","Преподаватель":"Сидоров","Формат":""}
    ]"#;
    pub const ELECTIVES: &str = r#"["Философия","Дизайн"]"#;

    /// A context rooted in a temporary directory with schedule data.
    pub fn context(format: OutputFormat) -> (TempDir, Context) {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_root(dir.path().to_path_buf());
        paths.ensure_dirs().unwrap();
        std::fs::write(paths.default_schedule_file(), SCHEDULE).unwrap();
        std::fs::write(paths.default_electives_file(), ELECTIVES).unwrap();
        (dir, Context::new(paths, Config::default(), Some(format)))
    }
}
