//! Built-in seed patterns

use super::{Grid, GridError};

/// A named configuration of live cells, relative to its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        description: "still life",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        description: "oscillator, period 2",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        description: "oscillator, period 2",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        description: "oscillator, period 2",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        description: "spaceship, moves one cell diagonally every 4 generations",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        description: "methuselah",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

/// Look up a built-in pattern by name, ignoring case
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Stamp the pattern onto an empty `rows` x `cols` grid with its top-left
    /// corner at `origin`
    pub fn place(&self, rows: usize, cols: usize, origin: (usize, usize)) -> Result<Grid, GridError> {
        let (row, col) = origin;
        if self.height() > rows.saturating_sub(row) || self.width() > cols.saturating_sub(col) {
            return Err(GridError::PatternDoesNotFit {
                name: self.name,
                height: self.height(),
                width: self.width(),
                rows,
                cols,
                row,
                col,
            });
        }

        let alive: Vec<(usize, usize)> = self
            .cells
            .iter()
            .map(|&(dr, dc)| (row + dr, col + dc))
            .collect();
        Grid::with_alive(rows, cols, &alive)
    }

    /// Stamp the pattern in the middle of an empty grid
    pub fn place_centered(&self, rows: usize, cols: usize) -> Result<Grid, GridError> {
        let origin = (
            rows.saturating_sub(self.height()) / 2,
            cols.saturating_sub(self.width()) / 2,
        );
        self.place(rows, cols, origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::GameOfLifeRules;

    #[test]
    fn test_find_pattern() {
        assert_eq!(find_pattern("Glider").map(|p| p.name), Some("glider"));
        assert!(find_pattern("gosper").is_none());
    }

    #[test]
    fn test_pattern_dimensions() {
        let beacon = find_pattern("beacon").unwrap();
        assert_eq!((beacon.height(), beacon.width()), (4, 4));
        let blinker = find_pattern("blinker").unwrap();
        assert_eq!((blinker.height(), blinker.width()), (1, 3));
    }

    #[test]
    fn test_place() {
        let grid = find_pattern("block").unwrap().place(4, 4, (1, 1)).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_place_rejects_misfit() {
        let glider = find_pattern("glider").unwrap();
        assert!(matches!(
            glider.place(5, 5, (3, 0)),
            Err(GridError::PatternDoesNotFit { name: "glider", .. })
        ));
        assert!(glider.place_centered(2, 2).is_err());

        let block = find_pattern("block").unwrap();
        assert!(matches!(
            block.place(5, 5, (usize::MAX, 0)),
            Err(GridError::PatternDoesNotFit { row: usize::MAX, .. })
        ));
        assert!(matches!(
            block.place(5, 5, (0, usize::MAX)),
            Err(GridError::PatternDoesNotFit { col: usize::MAX, .. })
        ));
        assert!(block.place(5, 5, (3, 3)).is_ok());
    }

    #[test]
    fn test_period_two_oscillators() {
        for name in ["blinker", "toad", "beacon"] {
            let grid = find_pattern(name).unwrap().place_centered(8, 8).unwrap();
            let once = GameOfLifeRules::step(&grid);
            assert_ne!(once, grid, "{} should change after one step", name);
            assert_eq!(GameOfLifeRules::step(&once), grid, "{} should have period 2", name);
        }
    }

    #[test]
    fn test_glider_translates() {
        let glider = find_pattern("glider").unwrap();
        let start = glider.place(10, 10, (1, 1)).unwrap();
        let moved = glider.place(10, 10, (2, 2)).unwrap();
        assert_eq!(GameOfLifeRules::step_generations(start, 4), moved);
    }
}
