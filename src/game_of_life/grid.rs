//! Grid representation and utilities for Game of Life

use super::error::GridError;
use super::rules::NEIGHBOR_OFFSETS;
use itertools::iproduct;
use rand::Rng;
use std::fmt;

/// A fixed-size, dense Game of Life grid.
///
/// Cells are stored row-major; `true` is alive, `false` is dead. The fields are
/// private so every grid satisfies `cells.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Number of cells in a `rows` x `cols` grid.
///
/// Panics when the product overflows `usize`, like any oversized allocation.
fn cell_count(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(count) => count,
        None => panic!("grid {}x{} has more cells than fit in usize", rows, cols),
    }
}

impl Grid {
    /// Create a grid with every cell dead
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; cell_count(rows, cols)],
        }
    }

    /// Create a grid where each cell is alive with probability `density`
    pub fn randomized(rows: usize, cols: usize, density: f64) -> Self {
        Self::randomized_with(rows, cols, density, &mut rand::thread_rng())
    }

    /// Same as [`Grid::randomized`], drawing from the supplied generator
    pub fn randomized_with<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut R,
    ) -> Self {
        let threshold = 1.0 - density;
        let cells = (0..cell_count(rows, cols))
            .map(|_| rng.gen::<f64>() > threshold)
            .collect();

        Self { rows, cols, cells }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);

        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        for (row, values) in cells.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    actual: values.len(),
                    expected: cols,
                });
            }
        }

        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Create a grid with exactly the listed cells alive
    pub fn with_alive(
        rows: usize,
        cols: usize,
        alive: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::empty(rows, cols);
        for &(row, col) in alive {
            let idx = grid.checked_index(row, col)?;
            grid.cells[idx] = true;
        }
        Ok(grid)
    }

    /// Wrap a row-major buffer produced inside the crate
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of the cells
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.index(row, col))
    }

    /// Get cell value at coordinates; out of range reads as dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[self.index(row, col)]
    }

    /// Return a copy of this grid with the cell at `(row, col)` flipped.
    ///
    /// `self` is left untouched.
    pub fn toggled(&self, row: usize, col: usize) -> Result<Self, GridError> {
        let idx = self.checked_index(row, col)?;
        let mut next = self.clone();
        next.cells[idx] = !next.cells[idx];
        Ok(next)
    }

    /// Count living Moore neighbours of a cell.
    ///
    /// Neighbours that fall outside the grid are skipped, so edges behave as
    /// if surrounded by dead cells.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < self.rows && c < self.cols).then(|| self.cells[self.index(r, c)])
            })
            .map(u8::from)
            .sum()
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(row, col)| self.get(row, col))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Fraction of living cells, `0.0` for a zero-sized grid
    pub fn density(&self) -> f64 {
        if self.cells.is_empty() {
            0.0
        } else {
            self.living_count() as f64 / self.cells.len() as f64
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for &cell in row {
                write!(f, "{}", if cell { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    #[should_panic(expected = "more cells than fit in usize")]
    fn test_empty_rejects_overflowing_dimensions() {
        let _ = Grid::empty(1 << (usize::BITS / 2), 1 << (usize::BITS / 2));
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_from_cells_rejects_malformed_input() {
        assert_eq!(Grid::from_cells(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_cells(vec![vec![]]), Err(GridError::Empty));

        let ragged = vec![vec![true, false], vec![true]];
        assert_eq!(
            Grid::from_cells(ragged),
            Err(GridError::RaggedRow { row: 1, actual: 1, expected: 2 })
        );
    }

    #[test]
    fn test_with_alive() {
        let grid = Grid::with_alive(4, 4, &[(0, 0), (3, 3)]).unwrap();
        assert_eq!(grid.living_cells(), vec![(0, 0), (3, 3)]);

        assert!(matches!(
            Grid::with_alive(4, 4, &[(4, 0)]),
            Err(GridError::OutOfBounds { row: 4, col: 0, .. })
        ));
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(1, 1), 8);
        // Corner sees two ring cells; the dead center adds nothing
        assert_eq!(grid.count_neighbors(0, 0), 2);
        assert_eq!(grid.count_neighbors(0, 1), 4);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let cells = vec![
            vec![true, false, true],
            vec![false, false, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 0);
        assert_eq!(grid.count_neighbors(1, 1), 4);
    }

    #[test]
    fn test_toggled_leaves_input_untouched() {
        let grid = Grid::empty(2, 2);
        let toggled = grid.toggled(1, 0).unwrap();

        assert!(grid.is_empty());
        assert!(toggled.get(1, 0));
        assert_eq!(toggled.living_count(), 1);
        assert_eq!(toggled.toggled(1, 0).unwrap(), grid);
    }

    #[test]
    fn test_toggled_out_of_bounds() {
        let grid = Grid::empty(2, 3);
        assert_eq!(
            grid.toggled(0, 3),
            Err(GridError::OutOfBounds { row: 0, col: 3, rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_randomized_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(Grid::randomized_with(10, 10, 0.0, &mut rng).is_empty());

        let grid = Grid::randomized_with(10, 10, 0.25, &mut rng);
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 10);
    }

    #[test]
    fn test_randomized_is_reproducible_with_seed() {
        let a = Grid::randomized_with(20, 20, 0.25, &mut StdRng::seed_from_u64(42));
        let b = Grid::randomized_with(20, 20, 0.25, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_density() {
        let grid = Grid::with_alive(2, 2, &[(0, 0)]).unwrap();
        assert!((grid.density() - 0.25).abs() < f64::EPSILON);
        assert_eq!(Grid::empty(0, 0).density(), 0.0);
    }

    #[test]
    fn test_display() {
        let grid = Grid::with_alive(2, 3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(grid.to_string(), "010\n001\n");
    }
}
