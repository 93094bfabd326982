//! Task creation.

use chrono::NaiveDate;

use super::capture::{capture_time, TimeCapture};
use super::prompt::PromptProvider;
use super::store::{TaskRecord, TaskStore};
use crate::error::ScheduleError;
use crate::features::nlp::{ParseOutcome, TimeParser, EXAMPLE_EXPRESSIONS};

/// What the user asked to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub date: NaiveDate,
    pub title: String,
    pub note: Option<String>,
}

/// Where the task time comes from.
pub enum TimeSource<'a> {
    /// A time expression given up front; it must be understood.
    Given(&'a str),
    /// Ask the user, with retries.
    Prompt(&'a mut dyn PromptProvider),
}

/// Result of [`create_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The task was added to the store.
    Created {
        date: NaiveDate,
        /// 1-based position within the day.
        position: usize,
        task: TaskRecord,
        /// The last answer, when no prompted time was understood.
        unparsed_time: Option<String>,
    },
    /// The user cancelled; the store is unchanged.
    Cancelled,
}

fn rejected_time(input: &str) -> ScheduleError {
    ScheduleError::invalid(format!(
        "could not understand time '{input}'; try for example: {}",
        EXAMPLE_EXPRESSIONS.join(", ")
    ))
}

/// Create a task in `tasks`.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidInput`] if the title is blank or a given
/// time is not understood, and propagates prompt failures.
pub fn create_task(
    tasks: &mut TaskStore,
    draft: TaskDraft,
    time: TimeSource<'_>,
    parser: &TimeParser<'_>,
) -> Result<TaskOutcome, ScheduleError> {
    if draft.title.trim().is_empty() {
        return Err(ScheduleError::invalid("task title is empty"));
    }

    let (time, unparsed_time) = match time {
        TimeSource::Given(input) => match parser.parse(input) {
            ParseOutcome::Rejected => return Err(rejected_time(input)),
            outcome => (outcome.stored_value().unwrap_or_default(), None),
        },
        TimeSource::Prompt(prompt) => match capture_time(parser, prompt)? {
            TimeCapture::Cancelled => {
                tracing::info!(title = %draft.title, "task creation cancelled");
                return Ok(TaskOutcome::Cancelled);
            },
            TimeCapture::Time(value) => (value, None),
            TimeCapture::NoTime => (String::new(), None),
            TimeCapture::GaveUp { last_input } => (String::new(), Some(last_input)),
        },
    };

    let task = TaskRecord::new(&draft.title, time, draft.note.as_deref());
    let position = tasks.add(draft.date, task.clone());
    tracing::info!(date = %draft.date, position, time = %task.time, "task created");

    Ok(TaskOutcome::Created {
        date: draft.date,
        position,
        task,
        unparsed_time,
    })
}

#[cfg(test)]
mod tests {
    use super::super::prompt::{MockPromptProvider, PromptReply};
    use super::*;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            title: title.to_string(),
            note: Some("взять зачётку".to_string()),
        }
    }

    fn created_time(outcome: &TaskOutcome) -> &str {
        match outcome {
            TaskOutcome::Created { task, .. } => &task.time,
            TaskOutcome::Cancelled => panic!("expected a created task"),
        }
    }

    #[test]
    fn test_given_time_is_parsed() {
        let parser = TimeParser::standard();
        let mut tasks = TaskStore::default();
        let outcome =
            create_task(&mut tasks, draft("Экзамен"), TimeSource::Given("в 9 утра"), &parser).unwrap();

        assert_eq!(created_time(&outcome), "09:00");
        let stored = &tasks.tasks_for(draft("").date)[0];
        assert_eq!(stored.note.as_deref(), Some("взять зачётку"));
    }

    #[test]
    fn test_given_empty_time_means_no_time() {
        let parser = TimeParser::standard();
        let mut tasks = TaskStore::default();
        let outcome = create_task(&mut tasks, draft("Экзамен"), TimeSource::Given(""), &parser).unwrap();
        assert_eq!(created_time(&outcome), "");
    }

    #[test]
    fn test_given_rejected_time_is_an_error() {
        let parser = TimeParser::standard();
        let mut tasks = TaskStore::default();
        let result = create_task(&mut tasks, draft("Экзамен"), TimeSource::Given("завтра"), &parser);

        match result {
            Err(ScheduleError::InvalidInput(msg)) => {
                assert!(msg.contains("'завтра'"));
                assert!(msg.contains(EXAMPLE_EXPRESSIONS[0]));
            },
            other => panic!("unexpected: {other:?}"),
        }
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_blank_title_is_rejected_before_prompting() {
        let parser = TimeParser::standard();
        let mut tasks = TaskStore::default();
        let mut prompt = MockPromptProvider::new();
        prompt.expect_request_line().never();

        let result = create_task(&mut tasks, draft("  "), TimeSource::Prompt(&mut prompt), &parser);
        assert!(matches!(result, Err(ScheduleError::InvalidInput(_))));
    }

    #[test]
    fn test_prompted_time() {
        let parser = TimeParser::standard();
        let mut tasks = TaskStore::default();
        let mut prompt = MockPromptProvider::new();
        prompt
            .expect_request_line()
            .times(1)
            .returning(|_| Ok(PromptReply::Line("с 10 до 12".to_string())));

        let outcome =
            create_task(&mut tasks, draft("Консультация"), TimeSource::Prompt(&mut prompt), &parser)
                .unwrap();
        assert_eq!(created_time(&outcome), "10:00–12:00");
    }

    #[test]
    fn test_prompt_gave_up_creates_task_without_time() {
        let parser = TimeParser::standard();
        let mut tasks = TaskStore::default();
        let mut prompt = MockPromptProvider::new();
        prompt
            .expect_request_line()
            .times(3)
            .returning(|_| Ok(PromptReply::Line("когда-нибудь".to_string())));

        let outcome =
            create_task(&mut tasks, draft("Консультация"), TimeSource::Prompt(&mut prompt), &parser)
                .unwrap();
        match outcome {
            TaskOutcome::Created {
                task,
                position,
                unparsed_time,
                ..
            } => {
                assert_eq!(task.time, "");
                assert_eq!(position, 1);
                assert_eq!(unparsed_time.as_deref(), Some("когда-нибудь"));
            },
            TaskOutcome::Cancelled => panic!("expected a created task"),
        }
    }

    #[test]
    fn test_prompt_cancel_creates_nothing() {
        let parser = TimeParser::standard();
        let mut tasks = TaskStore::default();
        let mut prompt = MockPromptProvider::new();
        prompt
            .expect_request_line()
            .times(1)
            .returning(|_| Ok(PromptReply::Cancelled));

        let outcome =
            create_task(&mut tasks, draft("Консультация"), TimeSource::Prompt(&mut prompt), &parser)
                .unwrap();
        assert_eq!(outcome, TaskOutcome::Cancelled);
        assert!(tasks.is_empty());
    }
}
