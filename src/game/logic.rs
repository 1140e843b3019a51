//! Game logic: physics step, flap input, pipe recycling, collision.
//!
//! All operations are total and O(1). Randomness is injected as `&mut R`
//! so runs can be replayed deterministically in tests and the simulator.

use super::types::*;
use rand::Rng;

/// Reinitialize the state in place for a new run.
///
/// The playfield size is sampled at call time, so a terminal resize takes
/// effect on the next restart.
pub fn reset<R: Rng>(game: &mut GameState, rng: &mut R, width: f64, height: f64) {
    game.bird_y = height / 2.0;
    game.bird_velocity = 0.0;
    game.pipe_x = width;
    game.gap_height = INITIAL_GAP_HEIGHT;
    regenerate_pipe(game, rng, height);
    game.score = 0;
    game.game_over = false;
}

/// Flap: override the vertical velocity with the fixed upward impulse.
/// No-op once the run has ended.
pub fn jump(game: &mut GameState) {
    if game.game_over {
        return;
    }
    game.bird_velocity = JUMP_IMPULSE;
}

/// Pick new segment heights for the pipe pair.
///
/// The gap is clamped first so at least `MIN_PIPE_SEGMENT` of pipe stays
/// visible above and below it; on a playfield too short for that, the gap
/// gives way and the sampling range collapses to its lower bound rather
/// than inverting.
fn regenerate_pipe<R: Rng>(game: &mut GameState, rng: &mut R, height: f64) {
    game.gap_height = game.gap_height.min((height - 2.0 * MIN_PIPE_SEGMENT).max(0.0));
    let lo = MIN_PIPE_SEGMENT;
    let hi = (height - game.gap_height - MIN_PIPE_SEGMENT).max(lo);
    game.top_pipe_height = rng.gen_range(lo..=hi);
    game.bottom_pipe_top = game.top_pipe_height + game.gap_height;
}

/// Advance the simulation by one fixed tick.
///
/// The order of effects matters: collision is tested against post-move
/// positions, and a recycled pipe is tested on the same tick it respawns
/// at the right edge.
pub fn step<R: Rng>(game: &mut GameState, rng: &mut R, width: f64, height: f64) {
    if game.game_over {
        return;
    }

    // 1-2. Gravity, then position integration clamped to the playfield.
    game.bird_velocity += GRAVITY;
    game.bird_y = (game.bird_y + game.bird_velocity).clamp(0.0, (height - BIRD_SIZE).max(0.0));

    // 3-4. Scroll the pipe; recycle it once fully off the left edge. The
    // gap for the *next* respawn is recomputed from the score alone, so it
    // never drifts: gap(score) = max(initial - score * shrink, floor).
    game.pipe_x -= PIPE_SPEED;
    if game.pipe_x <= -PIPE_WIDTH {
        game.pipe_x = width;
        regenerate_pipe(game, rng, height);
        game.score += 1;
        game.gap_height = (INITIAL_GAP_HEIGHT - f64::from(game.score) * GAP_SHRINK_PER_SCORE)
            .max(MIN_GAP_HEIGHT);
    }

    // 5-7. Collision and bounds checks on the post-move geometry. Edge
    // contact with a pipe is survivable (strict AABB overlap); edge contact
    // with the playfield boundary is not.
    let bird = game.bird_rect();
    let hit_top = bird.intersects(&game.top_pipe_rect());
    let hit_bottom = bird.intersects(&game.bottom_pipe_rect(height));
    let out_of_bounds = game.bird_y <= 0.0 || game.bird_y >= height - BIRD_SIZE;

    if hit_top || hit_bottom || out_of_bounds {
        game.game_over = true;
    }
}
