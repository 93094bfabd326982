//! Personal tasks on calendar days.
//!
//! A task's time is given as a free-form expression and normalized by
//! [`crate::features::nlp`]. When asked interactively, the user gets
//! [`MAX_TIME_ATTEMPTS`] tries before the task is saved without a time.

mod capture;
mod flow;
mod prompt;
mod store;

pub use capture::{capture_time, CaptureState, TimeCapture, MAX_TIME_ATTEMPTS};
pub use flow::{create_task, TaskDraft, TaskOutcome, TimeSource};
pub use prompt::{PromptProvider, PromptReply, PromptRequest, TerminalPrompt, CANCEL_WORD};
pub use store::{TaskRecord, TaskStore, MAX_TASK_NOTE_CHARS};

#[cfg(test)]
pub use prompt::MockPromptProvider;
