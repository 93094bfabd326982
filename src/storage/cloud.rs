//! JSON key-value store on top of the database.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::Database;
use crate::error::ScheduleError;

/// Key of the selected electives list.
pub const ELECTIVES_KEY: &str = "selected_electives";
/// Key of the class notes map.
pub const NOTES_KEY: &str = "class_notes";
/// Key of the per-day task map.
pub const TASKS_KEY: &str = "day_tasks";

/// Key-value store holding JSON documents.
pub struct CloudStore {
    db: Database,
}

impl CloudStore {
    /// Use an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Store `value` as JSON under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), ScheduleError> {
        let data = serde_json::to_string(value)?;
        self.db
            .connection()
            .execute(
                r"INSERT INTO cloud_storage (key, value, updated_at)
                  VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, data, Utc::now().to_rfc3339()],
            )
            .map_err(|e| ScheduleError::Database(format!("Failed to save {key}: {e}")))?;

        tracing::debug!(key, bytes = data.len(), "saved value");
        Ok(())
    }

    /// Raw stored value under `key`.
    ///
    /// Text that is not valid JSON is returned as a JSON string; empty text
    /// reads as null.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn load_value(&self, key: &str) -> Result<Option<Value>, ScheduleError> {
        let raw: Option<String> = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM cloud_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ScheduleError::Database(format!("Failed to load {key}: {e}")))?;

        Ok(raw.map(|text| {
            if text.is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&text).unwrap_or(Value::String(text))
            }
        }))
    }

    /// Typed value under `key`, `None` when the key is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the value has the wrong shape.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ScheduleError> {
        match self.load_value(key)? {
            Some(Value::Null) | None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    /// Remove `key`. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove(&self, key: &str) -> Result<bool, ScheduleError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM cloud_storage WHERE key = ?1", [key])
            .map_err(|e| ScheduleError::Database(format!("Failed to remove {key}: {e}")))?;

        tracing::debug!(key, existed = rows > 0, "removed value");
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn create_test_store() -> CloudStore {
        CloudStore::with_database(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_missing_key_loads_none() {
        let store = create_test_store();
        let value: Option<Vec<String>> = store.load(ELECTIVES_KEY).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let store = create_test_store();
        let electives = vec!["Философия".to_string(), "Дизайн".to_string()];
        store.save(ELECTIVES_KEY, &electives).unwrap();

        let loaded: Vec<String> = store.load(ELECTIVES_KEY).unwrap().unwrap();
        assert_eq!(loaded, electives);
    }

    #[test]
    fn test_save_overwrites() {
        let store = create_test_store();
        let mut notes = BTreeMap::new();
        notes.insert("a".to_string(), "first".to_string());
        store.save(NOTES_KEY, &notes).unwrap();
        notes.insert("a".to_string(), "second".to_string());
        store.save(NOTES_KEY, &notes).unwrap();

        let loaded: BTreeMap<String, String> = store.load(NOTES_KEY).unwrap().unwrap();
        assert_eq!(loaded["a"], "second");
    }

    #[test]
    fn test_non_json_text_falls_back_to_string() {
        let store = create_test_store();
        store
            .db
            .connection()
            .execute(
                "INSERT INTO cloud_storage (key, value, updated_at) VALUES ('legacy', 'plain text', '')",
                [],
            )
            .unwrap();

        let value = store.load_value("legacy").unwrap();
        assert_eq!(value, Some(Value::String("plain text".to_string())));
    }

    #[test]
    fn test_empty_text_loads_as_none() {
        let store = create_test_store();
        store
            .db
            .connection()
            .execute(
                "INSERT INTO cloud_storage (key, value, updated_at) VALUES ('blank', '', '')",
                [],
            )
            .unwrap();

        assert_eq!(store.load_value("blank").unwrap(), Some(Value::Null));
        let typed: Option<Vec<String>> = store.load("blank").unwrap();
        assert!(typed.is_none());
    }

    #[test]
    fn test_remove() {
        let store = create_test_store();
        store.save(TASKS_KEY, &BTreeMap::<String, Vec<String>>::new()).unwrap();

        assert!(store.remove(TASKS_KEY).unwrap());
        assert!(!store.remove(TASKS_KEY).unwrap());
        assert!(store.load_value(TASKS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let store = create_test_store();
        store.save(ELECTIVES_KEY, "not a list").unwrap();
        let loaded: Result<Option<Vec<String>>, _> = store.load(ELECTIVES_KEY);
        assert!(loaded.is_err());
    }
}
