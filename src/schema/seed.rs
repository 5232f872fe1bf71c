//! Seed patterns for initializing grids.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{Cell, Grid};

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// All-dead grid.
    #[default]
    Empty,
    /// Each cell is alive with the given probability.
    Random {
        /// Probability in [0.0, 1.0] that a cell starts alive.
        density: f64,
        /// RNG seed; the same seed always produces the same grid.
        seed: u64,
    },
    /// Explicit live cells (sparse representation).
    Cells {
        /// List of (row, col) positions to set alive.
        cells: Vec<(usize, usize)>,
    },
}

impl Seed {
    /// Generate a grid of the given dimensions from this seed.
    ///
    /// Out-of-range positions in a sparse pattern are ignored.
    pub fn generate(&self, rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new_dead(rows, cols);
        if grid.is_empty() {
            return grid;
        }

        match &self.pattern {
            Pattern::Empty => {}
            Pattern::Random { density, seed } => {
                let density = density.clamp(0.0, 1.0);
                let mut rng = StdRng::seed_from_u64(*seed);
                for r in 0..rows {
                    for c in 0..cols {
                        if rng.gen_bool(density) {
                            grid.set(r, c, Cell::Alive);
                        }
                    }
                }
            }
            Pattern::Cells { cells } => {
                for &(r, c) in cells {
                    if r < rows && c < cols {
                        grid.set(r, c, Cell::Alive);
                    }
                }
            }
        }

        grid
    }
}
