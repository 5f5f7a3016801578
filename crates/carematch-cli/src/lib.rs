//! carematch-cli library root.
//!
//! Exposes the command layer so integration tests can exercise argument
//! parsing, configuration, and the interactive questionnaire directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod interactive;
