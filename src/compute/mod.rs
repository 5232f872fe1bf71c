//! Compute module - Neighbor counting, the transition rule, and stepping.

mod neighbors;
mod rule;
mod stepper;

pub use neighbors::*;
pub use rule::*;
pub use stepper::*;
