//! `insight-portfolio` library crate.
//!
//! The binary (`portfolio`) is a thin wrapper around this library so that:
//!
//! - the estimator and its input contract are testable without a terminal
//! - the CLI report and the TUI share one page model
//! - presentation stays swappable

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod estimator;
pub mod logging;
pub mod plot;
pub mod report;
pub mod state;
pub mod tui;
