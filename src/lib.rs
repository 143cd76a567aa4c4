//! Conway's Game of Life
//!
//! A fixed-size, dense Game of Life engine with a headless simulation
//! controller. The step function is pure: it reads one generation and returns
//! a freshly allocated successor.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{step, GameOfLifeRules, Grid, GridError};
pub use simulation::Simulation;
