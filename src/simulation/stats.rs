//! Per-generation statistics

use crate::game_of_life::Grid;
use std::fmt;

/// Population changes between two consecutive generations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    pub generation: u64,
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
}

impl GenerationStats {
    /// Compare `previous` with its successor `next`.
    ///
    /// Both grids must have the same dimensions.
    pub fn between(generation: u64, previous: &Grid, next: &Grid) -> Self {
        let (births, deaths) = previous
            .cells()
            .iter()
            .zip(next.cells())
            .fold((0, 0), |(births, deaths), (&before, &after)| match (before, after) {
                (false, true) => (births + 1, deaths),
                (true, false) => (births, deaths + 1),
                _ => (births, deaths),
            });

        Self {
            generation,
            population: next.living_count(),
            births,
            deaths,
        }
    }

    /// Nothing changed, so the grid is a still life (or empty)
    pub fn is_stable(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation {}: population {} (+{} / -{})",
            self.generation, self.population, self.births, self.deaths
        )
    }
}
