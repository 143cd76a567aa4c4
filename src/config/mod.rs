//! Configuration management for the Game of Life simulator

pub mod settings;

pub use settings::{
    CliOverrides, DisplayStyle, GridConfig, OutputConfig, SimulationConfig, Settings, MAX_CELLS,
};
