//! Configuration settings for raspis.
//!
//! Settings are loaded from `~/.raspis/config.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::ScheduleError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Where the schedule data lives.
    pub schedule: ScheduleConfig,
    /// Class and task note settings.
    pub notes: NotesConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to terminal output.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Schedule data locations. Unset paths fall back to `~/.raspis/data/`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScheduleConfig {
    /// JSON array of class sessions.
    pub schedule_file: Option<PathBuf>,
    /// JSON array of elective discipline names.
    pub electives_file: Option<PathBuf>,
}

/// Note settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Maximum note length in characters; longer notes are truncated.
    #[serde(default = "default_note_max_chars")]
    pub max_chars: usize,
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_note_max_chars() -> usize {
    512
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            max_chars: default_note_max_chars(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, ScheduleError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ScheduleError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            ScheduleError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// The schedule file to read.
    #[must_use]
    pub fn schedule_file(&self, paths: &Paths) -> PathBuf {
        self.schedule
            .schedule_file
            .clone()
            .unwrap_or_else(|| paths.default_schedule_file())
    }

    /// The electives file to read.
    #[must_use]
    pub fn electives_file(&self, paths: &Paths) -> PathBuf {
        self.schedule
            .electives_file
            .clone()
            .unwrap_or_else(|| paths.default_electives_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.notes.max_chars, 512);
        assert!(config.schedule.schedule_file.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_path(&temp_dir.path().join("config.yaml")).unwrap();
        assert_eq!(config.notes.max_chars, 512);
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r#"
general:
  default_output: json
  color: never
notes:
  max_chars: 140
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(loaded.notes.max_chars, 140);
        assert_eq!(loaded.general.default_output, OutputFormat::Json);
        assert_eq!(loaded.general.color, ColorSetting::Never);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r#"
schedule:
  schedule_file: /srv/uni/Schedule.json
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        assert_eq!(config.schedule_file(&paths), PathBuf::from("/srv/uni/Schedule.json"));
        assert_eq!(config.electives_file(&paths), paths.default_electives_file());
        assert_eq!(config.notes.max_chars, 512);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "notes: [not, a, map]").unwrap();

        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(ScheduleError::Config(_))
        ));
    }
}
