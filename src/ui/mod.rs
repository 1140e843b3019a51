//! Terminal rendering. Read-only over `GameState`.

pub mod game_scene;
