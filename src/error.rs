//! Error types for raspis.

use thiserror::Error;

/// Errors that can occur while loading schedules, storing data, or running commands.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be read, written, or resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The key-value database returned an error.
    #[error("Database error: {0}")]
    Database(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User input was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ScheduleError {
    /// Shorthand for an [`ScheduleError::InvalidInput`] error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ScheduleError::NotFound("task 3".to_string());
        assert_eq!(err.to_string(), "Not found: task 3");

        let err = ScheduleError::invalid("empty title");
        assert_eq!(err.to_string(), "Invalid input: empty title");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ScheduleError = io.into();
        assert!(matches!(err, ScheduleError::Io(_)));
    }
}
