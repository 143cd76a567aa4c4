use game_of_life::{step, Grid};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..12).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(any::<bool>(), rows * cols).prop_map(move |cells| {
            let rows: Vec<Vec<bool>> = cells.chunks(cols).map(<[bool]>::to_vec).collect();
            Grid::from_cells(rows).unwrap()
        })
    })
}

/// Straightforward reference: count neighbours with explicit bounds checks.
fn reference_step(grid: &Grid) -> Grid {
    let (rows, cols) = (grid.rows() as isize, grid.cols() as isize);
    let cells = (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| {
                    let mut neighbours = 0;
                    for di in -1..=1 {
                        for dj in -1..=1 {
                            let (r, c) = (i + di, j + dj);
                            if (di, dj) != (0, 0) && r >= 0 && r < rows && c >= 0 && c < cols {
                                neighbours += grid.get(r as usize, c as usize) as u8;
                            }
                        }
                    }
                    let alive = grid.get(i as usize, j as usize);
                    neighbours == 3 || (alive && neighbours == 2)
                })
                .collect()
        })
        .collect();
    Grid::from_cells(cells).unwrap()
}

proptest! {
    #[test]
    fn step_is_deterministic(grid in arb_grid()) {
        prop_assert_eq!(step(&grid), step(&grid));
    }

    #[test]
    fn step_preserves_dimensions_and_input(grid in arb_grid()) {
        let snapshot = grid.clone();
        let next = step(&grid);
        prop_assert_eq!(&grid, &snapshot);
        prop_assert_eq!((next.rows(), next.cols()), (grid.rows(), grid.cols()));
    }

    #[test]
    fn step_matches_sequential_reference(grid in arb_grid()) {
        prop_assert_eq!(step(&grid), reference_step(&grid));
    }

    #[test]
    fn toggle_twice_is_identity(grid in arb_grid(), row in 0usize..12, col in 0usize..12) {
        let (row, col) = (row % grid.rows(), col % grid.cols());
        let once = grid.toggled(row, col).unwrap();
        prop_assert_ne!(once.get(row, col), grid.get(row, col));
        prop_assert_eq!(once.toggled(row, col).unwrap(), grid);
    }
}

#[test]
fn randomized_density_converges() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let trials = 40;
    let alive: usize = (0..trials)
        .map(|_| Grid::randomized_with(50, 50, 0.25, &mut rng).living_count())
        .sum();

    let fraction = alive as f64 / (trials * 50 * 50) as f64;
    assert!((fraction - 0.25).abs() < 0.01, "observed density {}", fraction);
}

#[test]
fn randomized_uses_thread_rng() {
    let grid = Grid::randomized(50, 50, 0.25);
    assert_eq!((grid.rows(), grid.cols()), (50, 50));
    assert!((grid.density() - 0.25).abs() < 0.1);
}
