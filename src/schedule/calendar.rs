//! Loaded schedule and the calendar views derived from it.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::types::{ClassFormat, ClassSession, DayType};
use crate::error::ScheduleError;

/// Month names, nominative case, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Weekday headers, Monday first.
pub const WEEKDAYS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

/// Name of a month (1-12).
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// Header of a day view: `14 Март 2025`.
#[must_use]
pub fn day_header(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_name(date.month()).unwrap_or_default(),
        date.year()
    )
}

/// The class schedule together with the list of elective disciplines.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    sessions: Vec<ClassSession>,
    electives: Vec<String>,
}

impl Schedule {
    #[must_use]
    pub const fn new(sessions: Vec<ClassSession>, electives: Vec<String>) -> Self {
        Self {
            sessions,
            electives,
        }
    }

    /// Load the schedule and electives files.
    ///
    /// A missing electives file means there are no electives.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule file is missing or either file is
    /// not valid JSON of the expected shape.
    pub fn load(schedule_file: &Path, electives_file: &Path) -> Result<Self, ScheduleError> {
        let schedule_json = std::fs::read_to_string(schedule_file).map_err(|e| {
            ScheduleError::NotFound(format!(
                "schedule file {}: {e}",
                schedule_file.display()
            ))
        })?;

        let electives_json = if electives_file.exists() {
            std::fs::read_to_string(electives_file)?
        } else {
            tracing::warn!(
                path = %electives_file.display(),
                "electives file not found, treating all classes as mandatory"
            );
            "[]".to_string()
        };

        Self::from_json_str(&schedule_json, &electives_json)
    }

    /// Build a schedule from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if either document is not valid JSON of the expected shape.
    pub fn from_json_str(schedule_json: &str, electives_json: &str) -> Result<Self, ScheduleError> {
        let sessions: Vec<ClassSession> = serde_json::from_str(schedule_json)?;
        let electives: Vec<String> = serde_json::from_str(electives_json)?;

        let malformed = sessions
            .iter()
            .filter(|s| s.calendar_date().is_none())
            .count();
        if malformed > 0 {
            tracing::warn!(malformed, "skipping classes with malformed dates");
        }
        tracing::debug!(
            classes = sessions.len(),
            electives = electives.len(),
            "loaded schedule"
        );

        Ok(Self::new(sessions, electives))
    }

    /// All classes, in file order.
    #[must_use]
    pub fn sessions(&self) -> &[ClassSession] {
        &self.sessions
    }

    /// Elective discipline names, in file order.
    #[must_use]
    pub fn electives(&self) -> &[String] {
        &self.electives
    }

    #[must_use]
    pub fn is_elective(&self, discipline: &str) -> bool {
        self.electives.iter().any(|e| e == discipline)
    }

    /// Classes of `date` that are visible with the given elective selection.
    ///
    /// Mandatory classes are always visible; electives only when selected.
    #[must_use]
    pub fn classes_for_date<'a>(
        &'a self,
        date: NaiveDate,
        selected: &[String],
    ) -> Vec<&'a ClassSession> {
        self.sessions
            .iter()
            .filter(|s| s.calendar_date() == Some(date))
            .filter(|s| !self.is_elective(&s.discipline) || selected.contains(&s.discipline))
            .collect()
    }

    /// Day type of `date` with the given elective selection.
    #[must_use]
    pub fn day_type(&self, date: NaiveDate, selected: &[String]) -> DayType {
        let classes = self.classes_for_date(date, selected);
        let formats: Vec<ClassFormat> = classes.iter().map(|c| c.class_format()).collect();

        if formats.contains(&ClassFormat::InPerson) {
            DayType::InPerson
        } else if formats.contains(&ClassFormat::Online) {
            DayType::Online
        } else {
            DayType::Offline
        }
    }

    /// Distinct `(year, month)` pairs that have classes, oldest first.
    #[must_use]
    pub fn months(&self) -> Vec<(i32, u32)> {
        self.sessions
            .iter()
            .filter_map(ClassSession::calendar_date)
            .map(|d| (d.year(), d.month()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Monday-based grid of one month, `None` for an invalid month.
    #[must_use]
    pub fn month_grid(&self, year: i32, month: u32, selected: &[String]) -> Option<MonthGrid> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let name = month_name(month)?;

        let days = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|date| DayCell {
                day: date.day(),
                date,
                day_type: self.day_type(date, selected),
            })
            .collect();

        Some(MonthGrid {
            year,
            month,
            name,
            leading_blanks: first.weekday().num_days_from_monday(),
            days,
        })
    }
}

/// One day of a [`MonthGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub day_type: DayType,
}

/// A month laid out on a Monday-based week grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub name: &'static str,
    /// Empty cells before the 1st.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Title line: `Март 2025`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.name, self.year)
    }

    /// Rows of seven cells; `None` is an empty cell.
    #[must_use]
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let blanks = usize::try_from(self.leading_blanks).unwrap_or_default();
        let cells: Vec<Option<&DayCell>> = std::iter::repeat(None)
            .take(blanks)
            .chain(self.days.iter().map(Some))
            .collect();

        cells
            .chunks(WEEKDAYS.len())
            .map(|week| {
                let mut row = week.to_vec();
                row.resize(WEEKDAYS.len(), None);
                row
            })
            .collect()
    }
}
