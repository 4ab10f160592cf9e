//! MindSpoke - a terminal journaling companion
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod gemini;
pub mod models;
pub mod share;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
