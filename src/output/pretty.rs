use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

use super::DayView;
use crate::features::electives::ElectiveSelection;
use crate::features::nlp::{ParseOutcome, EXAMPLE_EXPRESSIONS};
use crate::features::tasks::{TaskOutcome, TaskRecord};
use crate::schedule::{day_header, DayCell, DayType, MonthGrid, WEEKDAYS};

const CELL_WIDTH: usize = 4;

/// Format a parse outcome for humans
pub fn format_parse_pretty(input: &str, outcome: &ParseOutcome) -> String {
    match outcome {
        ParseOutcome::Empty => "(без времени)".dimmed().to_string(),
        ParseOutcome::Single(time) => time.to_string().green().bold().to_string(),
        ParseOutcome::Range(range) => {
            let mut line = range.to_string().green().bold().to_string();
            if range.crosses_midnight() {
                line.push_str(&format!("  {}", "через полночь".dimmed()));
            }
            line
        },
        ParseOutcome::Rejected => {
            let mut output = format!(
                "{} «{}»\n",
                "Не удалось распознать время:".yellow(),
                input
            );
            output.push_str(&format!("  {}\n", "Примеры:".dimmed()));
            for example in EXAMPLE_EXPRESSIONS {
                output.push_str(&format!("    {example}\n"));
            }
            output
        },
    }
}

fn day_cell(cell: &DayCell) -> ColoredString {
    let text = format!("{:>width$}", cell.day, width = CELL_WIDTH - 1);
    match cell.day_type {
        DayType::InPerson => text.green().bold(),
        DayType::Online => text.cyan(),
        DayType::Offline => text.dimmed(),
    }
}

/// Format one month as a week grid
pub fn format_month_pretty(grid: &MonthGrid) -> String {
    let mut output = format!("{}\n", grid.title().bold());

    let header: Vec<String> = WEEKDAYS
        .iter()
        .map(|d| format!("{d:>width$}", width = CELL_WIDTH - 1))
        .collect();
    output.push_str(&header.join(" ").dimmed().to_string());
    output.push('\n');

    for week in grid.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(cell) => day_cell(cell).to_string(),
                None => " ".repeat(CELL_WIDTH - 1),
            })
            .collect();
        output.push_str(cells.join(" ").trim_end());
        output.push('\n');
    }

    output
}

/// Format several months, followed by a legend
pub fn format_calendar_pretty(grids: &[MonthGrid]) -> String {
    if grids.is_empty() {
        return "Calendar\n  No classes in the schedule".to_string();
    }

    let months: Vec<String> = grids.iter().map(format_month_pretty).collect();
    let mut output = months.join("\n");
    output.push_str(&format!(
        "\n{}  {}  {}",
        "очно".green().bold(),
        "онлайн".cyan(),
        "нет занятий".dimmed()
    ));
    output
}

fn task_line(position: usize, task: &TaskRecord) -> String {
    let mut line = format!("{:>2}. {}", position, task.title.bold());
    if task.has_time() {
        line.push_str(&format!("  {}", task.time.yellow()));
    }
    if let Some(note) = &task.note {
        line.push_str(&format!("\n      {}", note.dimmed()));
    }
    line
}

/// Format a day with its classes and tasks
pub fn format_day_pretty(day: &DayView<'_>) -> String {
    let mut output = format!("{}  {}\n", day_header(day.date).bold(), day.day_type.to_string().dimmed());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    if day.classes.is_empty() {
        output.push_str("  Занятий нет\n");
    }
    for entry in &day.classes {
        let session = entry.session;
        output.push_str(&format!("{}\n", session.discipline.bold()));
        output.push_str(&format!(
            "  {} | {}\n",
            session.time.yellow(),
            session.teacher
        ));
        output.push_str(&format!("  {}\n", session.location().cyan()));
        if let Some(note) = entry.note {
            output.push_str(&format!("  {}: {}\n", "Заметка".dimmed(), note));
        }
    }

    if !day.tasks.is_empty() {
        output.push_str(&format!("\n{} ({})\n", "Задачи".bold(), day.tasks.len()));
        for (index, task) in day.tasks.iter().enumerate() {
            output.push_str(&task_line(index + 1, task));
            output.push('\n');
        }
    }

    output
}

/// Format the tasks of one day
pub fn format_tasks_pretty(date: NaiveDate, tasks: &[TaskRecord]) -> String {
    let title = day_header(date);
    if tasks.is_empty() {
        return format!("{title} (0 tasks)\n  No tasks");
    }

    let mut output = format!("{} ({} tasks)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');
    for (index, task) in tasks.iter().enumerate() {
        output.push_str(&task_line(index + 1, task));
        output.push('\n');
    }
    output
}

/// Format the result of creating a task
pub fn format_task_outcome_pretty(outcome: &TaskOutcome) -> String {
    match outcome {
        TaskOutcome::Cancelled => format!("{} Task not created", "[-]".red()),
        TaskOutcome::Created {
            date,
            position,
            task,
            unparsed_time,
        } => {
            let mut output = format!(
                "{} Created task {} on {}\n",
                "[+]".green(),
                position,
                day_header(*date)
            );
            output.push_str(&task_line(*position, task));
            if let Some(input) = unparsed_time {
                output.push_str(&format!(
                    "\n  {} «{}»",
                    "Время не распознано, задача сохранена без времени:".yellow(),
                    input
                ));
            }
            output
        },
    }
}

/// Format the electives with selection marks
pub fn format_electives_pretty(available: &[String], selection: &ElectiveSelection) -> String {
    if available.is_empty() {
        return "Electives (0)\n  No electives".to_string();
    }

    let mut output = format!(
        "Electives ({} selected of {})\n",
        selection.names().len(),
        available.len()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');
    for name in available {
        let mark = if selection.contains(name) {
            "[x]".green()
        } else {
            "[ ]".white()
        };
        output.push_str(&format!("{mark} {name}\n"));
    }
    output
}

/// Format a confirmation message
pub fn format_message_pretty(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::parse_time_expression;
    use crate::schedule::Schedule;

    #[test]
    fn test_parse_pretty_contains_value() {
        let out = format_parse_pretty("с 9 до 11", &parse_time_expression("с 9 до 11"));
        assert!(out.contains("09:00–11:00"));

        let out = format_parse_pretty("23:00-01:00", &parse_time_expression("23:00-01:00"));
        assert!(out.contains("через полночь"));
    }

    #[test]
    fn test_parse_pretty_rejected_lists_examples() {
        let out = format_parse_pretty("завтра", &ParseOutcome::Rejected);
        assert!(out.contains("«завтра»"));
        for example in EXAMPLE_EXPRESSIONS {
            assert!(out.contains(example));
        }
    }

    #[test]
    fn test_month_pretty_layout() {
        let schedule = Schedule::default();
        let grid = schedule.month_grid(2025, 3, &[]).unwrap();
        let out = format_month_pretty(&grid);
        assert!(out.contains("Март 2025"));
        assert!(out.contains("Пн"));
        assert!(out.contains("31"));
        // Title, weekday header and six weeks.
        assert_eq!(out.lines().count(), 8);
    }

    #[test]
    fn test_calendar_pretty_empty() {
        assert!(format_calendar_pretty(&[]).contains("No classes"));
    }

    #[test]
    fn test_tasks_pretty() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let tasks = vec![
            TaskRecord::new("Экзамен", "09:00", Some("билеты 1-20")),
            TaskRecord::new("Купить хлеб", "", None),
        ];
        let out = format_tasks_pretty(date, &tasks);
        assert!(out.contains("14 Март 2025 (2 tasks)"));
        assert!(out.contains(" 1. "));
        assert!(out.contains("09:00"));
        assert!(out.contains("билеты 1-20"));
        assert!(out.contains(" 2. "));

        assert!(format_tasks_pretty(date, &[]).contains("No tasks"));
    }

    #[test]
    fn test_electives_pretty_marks_selection() {
        let schedule = Schedule::from_json_str("[]", r#"["Философия","Дизайн"]"#).unwrap();
        let selection = ElectiveSelection::choose(&schedule, &["Дизайн"]).unwrap();
        let out = format_electives_pretty(schedule.electives(), &selection);
        assert!(out.contains("1 selected of 2"));
        assert!(out.contains("Философия"));
    }
}
