//! Automation-gain estimator.
//!
//! The estimator is a small, pure function so that both front-ends (and the
//! tests) can call it on every input change without caring about state.

pub mod estimate;

pub use estimate::*;
