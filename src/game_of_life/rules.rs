//! Game of Life rules implementation

use super::Grid;
use rayon::prelude::*;

/// Relative offsets of the eight Moore neighbours
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation of `current`.
    ///
    /// Every neighbour count is taken from `current`, and the result is written
    /// into a freshly allocated grid, so the update is simultaneous for all
    /// cells. Rows are evaluated in parallel; `current` is only ever read.
    pub fn step(current: &Grid) -> Grid {
        let cols = current.cols();

        let cells: Vec<bool> = (0..current.rows())
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..cols).map(move |col| {
                    Self::next_state(current.get(row, col), current.count_neighbors(row, col))
                })
            })
            .collect();

        Grid::from_parts(current.rows(), cols, cells)
    }

    /// Evolve the grid for multiple generations
    pub fn step_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::step(&grid);
        }
        grid
    }

    /// Next state of a cell given its current state and live neighbour count
    pub fn next_state(current: bool, neighbors: u8) -> bool {
        match (current, neighbors) {
            (_, n) if n < 2 || n > 3 => false,
            (false, 3) => true,
            (state, _) => state,
        }
    }
}

/// Compute the next generation; see [`GameOfLifeRules::step`]
pub fn step(grid: &Grid) -> Grid {
    GameOfLifeRules::step(grid)
}
