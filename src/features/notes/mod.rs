//! Notes attached to classes.
//!
//! Notes are keyed by [`crate::schedule::note_key`] and stored as one JSON
//! object under [`NOTES_KEY`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::storage::{CloudStore, NOTES_KEY};

/// Result of setting one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteChange {
    /// The note was stored.
    Saved {
        /// The text was cut to the length limit.
        truncated: bool,
    },
    /// Blank text removed the note.
    Removed,
}

/// All class notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotesBook {
    notes: BTreeMap<String, String>,
}

/// Cut `text` to at most `max_chars` characters.
///
/// Returns the text and whether anything was cut.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (text[..byte_index].to_string(), true),
        None => (text.to_string(), false),
    }
}

impl NotesBook {
    /// Load the notes, empty when none were saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds a non-object.
    pub fn load(store: &CloudStore) -> Result<Self, ScheduleError> {
        Ok(store.load(NOTES_KEY)?.unwrap_or_default())
    }

    /// Persist the notes.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&self, store: &CloudStore) -> Result<(), ScheduleError> {
        store.save(NOTES_KEY, self)
    }

    /// Delete every note. Returns whether any were stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn reset(store: &CloudStore) -> Result<bool, ScheduleError> {
        store.remove(NOTES_KEY)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.notes.get(key).map(String::as_str)
    }

    /// Set the note under `key`.
    ///
    /// The text is trimmed; blank text removes the note.
    pub fn set(&mut self, key: &str, text: &str, max_chars: usize) -> NoteChange {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.notes.remove(key);
            return NoteChange::Removed;
        }

        let (note, truncated) = truncate_chars(trimmed, max_chars);
        self.notes.insert(key.to_string(), note);
        NoteChange::Saved { truncated }
    }

    /// Merge edited notes into the book.
    ///
    /// Keys not mentioned keep their notes; blank values remove theirs.
    pub fn merge<I, K, V>(&mut self, updates: I, max_chars: usize)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, text) in updates {
            self.set(key.as_ref(), text.as_ref(), max_chars);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
