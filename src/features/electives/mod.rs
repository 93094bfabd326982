//! Selection of elective disciplines.
//!
//! The selection is stored as a JSON array under [`ELECTIVES_KEY`].

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::schedule::Schedule;
use crate::storage::{CloudStore, ELECTIVES_KEY};

/// The electives the user attends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElectiveSelection {
    names: Vec<String>,
}

impl ElectiveSelection {
    /// Select `names`, which must all be electives of `schedule`.
    ///
    /// Duplicates are dropped; the order follows the schedule's electives list.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NotFound`] naming the first unknown elective.
    pub fn choose<S: AsRef<str>>(schedule: &Schedule, names: &[S]) -> Result<Self, ScheduleError> {
        if let Some(unknown) = names
            .iter()
            .map(|n| n.as_ref().trim())
            .find(|n| !schedule.is_elective(n))
        {
            return Err(ScheduleError::NotFound(format!("elective '{unknown}'")));
        }

        let names = schedule
            .electives()
            .iter()
            .filter(|e| names.iter().any(|n| n.as_ref().trim() == e.as_str()))
            .cloned()
            .collect();
        Ok(Self { names })
    }

    /// Load the saved selection, empty when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds a non-array.
    pub fn load(store: &CloudStore) -> Result<Self, ScheduleError> {
        Ok(store.load(ELECTIVES_KEY)?.unwrap_or_default())
    }

    /// Persist the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&self, store: &CloudStore) -> Result<(), ScheduleError> {
        store.save(ELECTIVES_KEY, self)
    }

    /// Forget the selection. Returns whether one was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn reset(store: &CloudStore) -> Result<bool, ScheduleError> {
        store.remove(ELECTIVES_KEY)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
