//! Path resolution for raspis configuration and data files.
//!
//! All raspis data is stored in `~/.raspis/`:
//! - `config.yaml` - Main configuration file
//! - `raspis.db` - SQLite key-value store (electives, notes, tasks)
//! - `data/` - Schedule and electives JSON files

use std::path::PathBuf;

use crate::error::ScheduleError;

/// Default schedule file name inside the data directory.
pub const SCHEDULE_FILE: &str = "Schedule.json";
/// Default electives file name inside the data directory.
pub const ELECTIVES_FILE: &str = "election activities.json";

/// Paths to raspis configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.raspis/`
    pub root: PathBuf,
    /// Config file: `~/.raspis/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.raspis/raspis.db`
    pub database: PathBuf,
    /// Data directory: `~/.raspis/data/`
    pub data: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ScheduleError> {
        let home = std::env::var("HOME").map_err(|_| {
            ScheduleError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".raspis")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("raspis.db"),
            data: root.join("data"),
            root,
        }
    }

    /// Default location of the class schedule.
    #[must_use]
    pub fn default_schedule_file(&self) -> PathBuf {
        self.data.join(SCHEDULE_FILE)
    }

    /// Default location of the electives list.
    #[must_use]
    pub fn default_electives_file(&self) -> PathBuf {
        self.data.join(ELECTIVES_FILE)
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), ScheduleError> {
        for dir in [&self.root, &self.data] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    ScheduleError::Config(format!("Failed to create directory {}: {e}", dir.display()))
                })?;
            }
        }

        Ok(())
    }
}
