//! Headless balance simulator.
//!
//! Runs full games with a naive autopilot on a fixed playfield and reports
//! the score distribution. Useful for checking how far the gap-shrink rule
//! lets a competent player get before the game turns unwinnable.

use crate::game::logic::{jump, step};
use crate::game::types::{GameState, BIRD_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Simulator configuration.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play.
    pub num_runs: u32,
    /// Safety cap on ticks per game.
    pub max_ticks_per_run: u64,
    /// RNG seed for reproducible reports; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Playfield size in units (portrait, the tuning the constants assume).
    pub playfield_width: f64,
    pub playfield_height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            max_ticks_per_run: 100_000,
            seed: None,
            playfield_width: 400.0,
            playfield_height: 600.0,
        }
    }
}

/// Outcome of one simulated game.
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub score: u32,
    pub ticks: u64,
}

/// Aggregated results across all runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub runs: Vec<RunOutcome>,
}

impl SimReport {
    pub fn min_score(&self) -> u32 {
        self.runs.iter().map(|r| r.score).min().unwrap_or(0)
    }

    pub fn max_score(&self) -> u32 {
        self.runs.iter().map(|r| r.score).max().unwrap_or(0)
    }

    pub fn mean_score(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| f64::from(r.score)).sum::<f64>() / self.runs.len() as f64
    }

    pub fn mean_ticks(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| r.ticks as f64).sum::<f64>() / self.runs.len() as f64
    }

    /// Plain-text report for the CLI.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Results:\n");
        out.push_str(&format!("  Games:        {}\n", self.runs.len()));
        out.push_str(&format!("  Score (min):  {}\n", self.min_score()));
        out.push_str(&format!("  Score (mean): {:.1}\n", self.mean_score()));
        out.push_str(&format!("  Score (max):  {}\n", self.max_score()));
        out.push_str(&format!(
            "  Survival:     {:.1} ticks ({:.1}s at 60 Hz)\n",
            self.mean_ticks(),
            self.mean_ticks() / 60.0
        ));
        out
    }
}

/// The autopilot: flap whenever the bird sinks close to the bottom pipe.
///
/// A flap climbs roughly 160 units before gravity wins, so triggering near
/// the gap's lower edge keeps the bird inside the gap until the shrink rule
/// makes the climb taller than the gap itself (around score 11).
pub fn should_flap(game: &GameState) -> bool {
    game.bird_y + BIRD_SIZE / 2.0 >= game.bottom_pipe_top - 60.0
}

/// Play one game to completion (or the tick cap).
pub fn run_one<R: Rng>(rng: &mut R, config: &SimConfig) -> RunOutcome {
    let width = config.playfield_width;
    let height = config.playfield_height;
    let mut game = GameState::new(rng, width, height);
    let mut ticks = 0;
    while !game.game_over && ticks < config.max_ticks_per_run {
        if should_flap(&game) {
            jump(&mut game);
        }
        step(&mut game, rng, width, height);
        ticks += 1;
    }
    RunOutcome {
        score: game.score,
        ticks,
    }
}

/// Run the full batch.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let runs = (0..config.num_runs)
        .map(|_| run_one(&mut rng, config))
        .collect();
    SimReport { runs }
}
