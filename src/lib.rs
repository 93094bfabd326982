//! raspis - a class schedule calendar for the terminal
//!
//! This crate shows a university class schedule as a month calendar,
//! filtered by the electives the user attends, and keeps class notes and
//! personal day tasks. Task times are free-form Russian expressions
//! normalized by [`features::nlp`].

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod schedule;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::ScheduleError;
pub use features::nlp::{parse_time_expression, ParseOutcome};
