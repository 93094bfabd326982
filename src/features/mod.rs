//! Feature implementations for raspis.
//!
//! - Natural language time parsing
//! - Elective selection
//! - Class notes
//! - Personal tasks

pub mod electives;
pub mod nlp;
pub mod notes;
pub mod tasks;
