//! Schema module - Grid, configuration, and codec types.

mod codec;
mod config;
mod grid;
mod seed;

pub use codec::*;
pub use config::*;
pub use grid::*;
pub use seed::*;
