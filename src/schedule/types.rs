//! Schedule records as they appear in the JSON data files.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::parse_schedule_date;

/// One class of the schedule.
///
/// Field names follow the data file, which uses Russian keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    /// Date in `M/D/YYYY` form.
    #[serde(rename = "Дата")]
    pub date: String,
    /// Discipline name; electives are matched by it.
    #[serde(rename = "Дисциплина")]
    pub discipline: String,
    /// Free-form time text, e.g. `9:00-10:30`.
    #[serde(rename = "Время", default)]
    pub time: String,
    #[serde(rename = "Преподаватель", default)]
    pub teacher: String,
    /// `очная`, `онлайн`, or empty for in-person.
    #[serde(rename = "Формат", default)]
    pub format: String,
    /// Room, written as a string or a number in the data file.
    #[serde(
        rename = "Ауд.",
        default,
        deserialize_with = "room_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub room: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoomValue {
    Text(String),
    Number(serde_json::Number),
}

fn room_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let room = Option::<RoomValue>::deserialize(deserializer)?.map(|value| match value {
        RoomValue::Text(text) => text.trim().to_string(),
        RoomValue::Number(number) => number.to_string(),
    });
    Ok(room.filter(|r| !r.is_empty()))
}

impl ClassSession {
    /// The parsed calendar date, `None` if the date text is malformed.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_schedule_date(&self.date)
    }

    /// Key under which this class's note is stored.
    #[must_use]
    pub fn note_key(&self) -> String {
        note_key(&self.date, &self.discipline, &self.time)
    }

    #[must_use]
    pub fn class_format(&self) -> ClassFormat {
        ClassFormat::from_label(&self.format)
    }

    /// Where the class takes place, as shown to the user.
    #[must_use]
    pub fn location(&self) -> String {
        match self.class_format() {
            ClassFormat::Online => "Онлайн".to_string(),
            ClassFormat::InPerson | ClassFormat::Other => match &self.room {
                Some(room) => format!("Ауд. {room}"),
                None => "Ауд. не указана".to_string(),
            },
        }
    }
}

/// Build a note key from the raw schedule fields.
#[must_use]
pub fn note_key(date: &str, discipline: &str, time: &str) -> String {
    format!("{date}_{discipline}_{time}")
}

/// How a class is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassFormat {
    /// `очная`, or no format given.
    InPerson,
    /// `онлайн`.
    Online,
    /// Any other label.
    Other,
}

impl ClassFormat {
    /// Classify a format label from the data file, ignoring case.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "" | "очная" => Self::InPerson,
            "онлайн" => Self::Online,
            _ => Self::Other,
        }
    }
}

/// Kind of a calendar day, derived from its visible classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayType {
    /// At least one in-person class.
    InPerson,
    /// Only online classes.
    Online,
    /// No classes.
    Offline,
}

impl DayType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InPerson => "in-person",
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    /// Whether the day has any classes to show.
    #[must_use]
    pub const fn has_classes(self) -> bool {
        !matches!(self, Self::Offline)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
