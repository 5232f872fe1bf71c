//! Conway's Game of Life generation engine.
//!
//! This crate provides the generation-transition engine for the standard
//! B3/S23 cellular automaton: grid validation, Moore-neighbor counting
//! under bounded or toroidal edge topology, and two stepping modes.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Grid container, validation, edge policy, seeding, codec
//! - `compute`: Neighbor counting, the transition rule, stepping
//!
//! # Example
//!
//! ```rust
//! use life_engine::{
//!     compute::{LifeSession, step},
//!     schema::{EdgePolicy, parse_grid, render_grid},
//! };
//!
//! // A blinker: three live cells in a row.
//! let grid = parse_grid(["00000", "01110", "00000"]).unwrap();
//!
//! // Immutable mode: each generation is a new grid value.
//! let next = step(&grid, EdgePolicy::Bounded);
//! assert_eq!(render_grid(&next), vec!["00100", "00100", "00100"]);
//!
//! // Mutable mode: one double-buffered session, stepped in place.
//! let mut session = LifeSession::new(grid.clone(), EdgePolicy::Bounded);
//! session.run(2);
//! assert_eq!(session.grid(), &grid);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{LifeSession, SessionStats, count_live_neighbors, next_state, step};
pub use schema::{
    Cell, EdgePolicy, Grid, GridError, Pattern, Seed, SimConfig, parse_grid, render_grid,
    render_grid_with,
};
