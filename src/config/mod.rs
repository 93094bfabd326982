//! Configuration management for raspis.
//!
//! This module handles loading configuration from `~/.raspis/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, NotesConfig, ScheduleConfig};
