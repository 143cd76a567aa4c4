//! Display and output formatting utilities

use crate::config::DisplayStyle;
use crate::game_of_life::Grid;
use crate::simulation::GenerationStats;

/// ANSI sequence that clears the screen and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Render grids for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// Render one frame of the simulation in the requested style
    pub fn format_frame(grid: &Grid, stats: &GenerationStats, style: DisplayStyle) -> String {
        let mut output = String::new();

        match style {
            DisplayStyle::Compact => output.push_str(&Self::format_grid_compact(grid)),
            DisplayStyle::Coords => output.push_str(&Self::format_grid_with_coords(grid)),
            DisplayStyle::Quiet => {}
        }

        output.push_str(&stats.to_string());
        output.push('\n');
        output
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.rows() * (grid.cols() + 1) * 3);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                output.push(if grid.get(row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.rows() {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.cols() {
                output.push_str(if grid.get(row, col) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
