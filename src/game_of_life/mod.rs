//! Game of Life core functionality

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use error::GridError;
pub use grid::Grid;
pub use patterns::{find_pattern, Pattern, PATTERNS};
pub use rules::{step, GameOfLifeRules, NEIGHBOR_OFFSETS};
