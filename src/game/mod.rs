//! The simulation core: a bird, one recycled pipe pair, a score.
//!
//! Gravity pulls the bird down each tick, a flap overrides its velocity
//! upward, and hitting a pipe or the playfield edge ends the run. Passing
//! a pipe scores a point and narrows the gap, down to a floor.

pub mod logic;
pub mod types;
