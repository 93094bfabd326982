//! Interactive capture of a task time with bounded retry.
//!
//! The loop is a small state machine:
//!
//! ```text
//! AwaitingInput ──reply──> Accepted | RejectedRetry | Cancelled | ExhaustedRetries
//! RejectedRetry ─────────> AwaitingInput (next attempt, input quoted back)
//! ```

use tracing::{debug, info};

use super::prompt::{PromptProvider, PromptReply, PromptRequest};
use crate::error::ScheduleError;
use crate::features::nlp::{TimeParser, EXAMPLE_EXPRESSIONS};

/// Total number of attempts before the time is left empty.
pub const MAX_TIME_ATTEMPTS: u8 = 3;

const TIME_QUESTION: &str = "Время (Enter, чтобы оставить пустым)";

/// A state of the capture loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureState {
    /// Waiting for the user to answer attempt `attempt`.
    AwaitingInput {
        /// 1-based attempt number.
        attempt: u8,
        /// The previous answer, when it was not understood.
        rejected: Option<String>,
    },
    /// A value to store: canonical time, range, or `""` for no time.
    Accepted(String),
    /// The answer was not understood and attempts remain.
    RejectedRetry {
        /// Attempt that was rejected.
        attempt: u8,
        /// The answer as typed.
        input: String,
    },
    /// The user cancelled.
    Cancelled,
    /// The last allowed attempt was not understood either.
    ExhaustedRetries {
        /// The final answer as typed.
        last_input: String,
    },
}

impl CaptureState {
    /// The initial state.
    #[must_use]
    pub const fn start() -> Self {
        Self::AwaitingInput {
            attempt: 1,
            rejected: None,
        }
    }

    /// Whether the loop has finished.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Accepted(_) | Self::Cancelled | Self::ExhaustedRetries { .. }
        )
    }

    /// Apply the user's reply to an `AwaitingInput` state.
    ///
    /// Other states ignore the reply and are returned unchanged.
    #[must_use]
    pub fn on_reply(self, reply: PromptReply, parser: &TimeParser<'_>, max_attempts: u8) -> Self {
        let attempt = match self {
            Self::AwaitingInput { attempt, .. } => attempt,
            other => return other,
        };

        match reply {
            PromptReply::Cancelled => Self::Cancelled,
            PromptReply::Line(input) => match parser.parse(&input).stored_value() {
                Some(value) => Self::Accepted(value),
                None if attempt >= max_attempts => Self::ExhaustedRetries { last_input: input },
                None => Self::RejectedRetry { attempt, input },
            },
        }
    }

    /// Leave a `RejectedRetry` state for the next attempt.
    ///
    /// Other states are returned unchanged.
    #[must_use]
    pub fn retry(self) -> Self {
        match self {
            Self::RejectedRetry { attempt, input } => Self::AwaitingInput {
                attempt: attempt + 1,
                rejected: Some(input),
            },
            other => other,
        }
    }
}

/// How the capture ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeCapture {
    /// A canonical `HH:MM` or `HH:MM–HH:MM` value.
    Time(String),
    /// The user left the time blank.
    NoTime,
    /// No attempt was understood; the task gets no time.
    GaveUp {
        /// The final answer as typed.
        last_input: String,
    },
    /// The user cancelled; no task must be created.
    Cancelled,
}

impl TimeCapture {
    /// The value to store on the task, `None` when cancelled.
    #[must_use]
    pub fn stored_value(&self) -> Option<&str> {
        match self {
            Self::Time(value) => Some(value),
            Self::NoTime | Self::GaveUp { .. } => Some(""),
            Self::Cancelled => None,
        }
    }
}

fn time_request(attempt: u8, rejected: Option<String>) -> PromptRequest {
    let examples = if rejected.is_some() {
        EXAMPLE_EXPRESSIONS.iter().map(|e| (*e).to_string()).collect()
    } else {
        Vec::new()
    };
    PromptRequest {
        message: TIME_QUESTION.to_string(),
        rejected_input: rejected,
        examples,
        attempt,
        max_attempts: MAX_TIME_ATTEMPTS,
    }
}

/// Ask the user for a task time until it is understood, cancelled, or
/// [`MAX_TIME_ATTEMPTS`] answers were rejected.
///
/// # Errors
///
/// Returns an error only if the prompt channel itself fails.
pub fn capture_time<P>(parser: &TimeParser<'_>, prompt: &mut P) -> Result<TimeCapture, ScheduleError>
where
    P: PromptProvider + ?Sized,
{
    let mut state = CaptureState::start();

    loop {
        state = match state {
            CaptureState::AwaitingInput { attempt, rejected } => {
                let request = time_request(attempt, rejected.clone());
                let reply = prompt.request_line(&request)?;
                CaptureState::AwaitingInput { attempt, rejected }.on_reply(
                    reply,
                    parser,
                    MAX_TIME_ATTEMPTS,
                )
            },
            retry @ CaptureState::RejectedRetry { .. } => {
                debug!(?retry, "time expression not understood");
                retry.retry()
            },
            CaptureState::Accepted(value) if value.is_empty() => return Ok(TimeCapture::NoTime),
            CaptureState::Accepted(value) => {
                debug!(%value, "time accepted");
                return Ok(TimeCapture::Time(value));
            },
            CaptureState::Cancelled => {
                debug!("time prompt cancelled");
                return Ok(TimeCapture::Cancelled);
            },
            CaptureState::ExhaustedRetries { last_input } => {
                info!(%last_input, attempts = MAX_TIME_ATTEMPTS, "giving up on task time");
                return Ok(TimeCapture::GaveUp { last_input });
            },
        };
    }
}
