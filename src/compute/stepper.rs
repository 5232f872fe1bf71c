//! Generation stepper - advances a grid one generation at a time.
//!
//! Two modes share one kernel: the immutable [`step`] returns a freshly
//! allocated grid, and [`LifeSession`] keeps a scratch buffer and swaps
//! it with the current grid after each full pass.

use rayon::prelude::*;

use crate::schema::{Cell, EdgePolicy, Grid};

use super::{count_live_neighbors, next_state};

/// Compute the next generation into `dest`, reading only `grid`.
///
/// Rows of the destination are filled in parallel; every neighbor read
/// targets the frozen source generation, so no cell ever observes an
/// already-updated neighbor.
fn step_into(grid: &Grid, policy: EdgePolicy, dest: &mut [Cell]) {
    debug_assert_eq!(dest.len(), grid.rows() * grid.cols());

    dest.par_chunks_mut(grid.cols())
        .enumerate()
        .for_each(|(r, row_out)| {
            for (c, out) in row_out.iter_mut().enumerate() {
                let live = count_live_neighbors(grid, r, c, policy);
                *out = next_state(grid.get(r, c), live);
            }
        });
}

/// Advance one generation, leaving the input grid untouched.
///
/// The empty grid steps to itself. For a given grid and policy the
/// result is always the same.
pub fn step(grid: &Grid, policy: EdgePolicy) -> Grid {
    if grid.is_empty() {
        return grid.clone();
    }

    let mut next = vec![Cell::Dead; grid.rows() * grid.cols()];
    step_into(grid, policy, &mut next);
    Grid::from_parts(next, grid.rows(), grid.cols())
}

/// Mutable simulation session with double-buffered stepping.
///
/// Owns the current grid and a same-sized scratch buffer. Each step
/// writes the next generation into the scratch buffer and then swaps
/// the two, so the grid handle stays valid across ticks while no pass
/// ever reads its own output. The scratch buffer is never exposed.
pub struct LifeSession {
    current: Grid,
    scratch: Vec<Cell>,
    policy: EdgePolicy,
    generation: u64,
}

impl LifeSession {
    /// Create a session owning the given grid.
    ///
    /// The edge policy is fixed for the lifetime of the session.
    pub fn new(grid: Grid, policy: EdgePolicy) -> Self {
        let scratch = vec![Cell::Dead; grid.rows() * grid.cols()];
        Self {
            current: grid,
            scratch,
            policy,
            generation: 0,
        }
    }

    /// Advance the session's grid by one generation in place.
    pub fn step(&mut self) {
        if !self.current.is_empty() {
            step_into(&self.current, self.policy, &mut self.scratch);
            std::mem::swap(self.current.cells_mut(), &mut self.scratch);
        }
        self.generation += 1;
        log::trace!(
            "generation {}: population {}",
            self.generation,
            self.current.population()
        );
    }

    /// Run the session for the given number of generations.
    pub fn run(&mut self, steps: u64) {
        log::debug!(
            "running {} generations over {}x{} grid ({:?})",
            steps,
            self.current.rows(),
            self.current.cols(),
            self.policy
        );
        for _ in 0..steps {
            self.step();
        }
    }

    /// The current generation's grid.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// The session's fixed edge policy.
    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Generations advanced since the session was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Give the grid back, consuming the session.
    pub fn into_grid(self) -> Grid {
        self.current
    }
}

/// Session statistics for monitoring.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionStats {
    pub generation: u64,
    pub rows: usize,
    pub cols: usize,
    pub population: usize,
    pub density: f64,
}

impl SessionStats {
    /// Compute statistics from a session.
    pub fn from_session(session: &LifeSession) -> Self {
        Self::from_grid(session.grid(), session.generation())
    }

    /// Compute statistics from a grid at a known generation.
    pub fn from_grid(grid: &Grid, generation: u64) -> Self {
        let cells = grid.rows() * grid.cols();
        let population = grid.population();
        Self {
            generation,
            rows: grid.rows(),
            cols: grid.cols(),
            population,
            density: if cells == 0 {
                0.0
            } else {
                population as f64 / cells as f64
            },
        }
    }
}
