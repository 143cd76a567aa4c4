//! Simulation control: the current generation, the run flag and the timed loop

pub mod controller;
pub mod stats;

pub use controller::{RunHandle, Simulation};
pub use stats::GenerationStats;
