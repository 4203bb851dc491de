//! Terminal plotting for the CLI report.

pub mod ascii;

pub use ascii::*;
