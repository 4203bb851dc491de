//! Simulator state: one owner for the three inputs and the organization.
//!
//! The simulator panel (sliders) and the playground panel (numeric fields)
//! are two adapters writing into the same `SimulatorState`; neither keeps a
//! copy of the values.

pub mod entry;
pub mod simulator;

pub use entry::*;
pub use simulator::*;
