//! Domain types shared by the estimator, the simulator state and both front-ends.
//!
//! This module defines:
//!
//! - simulator inputs and outputs (`SimulationInput`, `SimulationResult`)
//! - the organization dropdown (`Organization`)
//! - input field identities and slider ranges (`InputField`, `SliderSpec`)

pub mod types;

pub use types::*;
