//! AssignMate - a terminal client for the AssignMate rewriting service
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod rewrite;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
