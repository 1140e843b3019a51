//! Flappy Birb - terminal Flappy Bird clone.
//!
//! Exposes the simulation core for tests and the headless simulator. The
//! terminal UI lives in the binary; it only reads `GameState`.

pub mod build_info;
pub mod game;
pub mod sim;

pub use game::types::GameState;
