//! Storage layer for raspis.
//!
//! A `SQLite` key-value store standing in for the web app's cloud storage.
//! Values are JSON documents under fixed keys:
//! - `selected_electives`: chosen elective disciplines
//! - `class_notes`: notes attached to class sessions
//! - `day_tasks`: personal tasks per day

mod cloud;
mod database;
mod migrations;

pub use cloud::{CloudStore, ELECTIVES_KEY, NOTES_KEY, TASKS_KEY};
pub use database::Database;
