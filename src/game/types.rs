//! Simulation state and tuning constants.
//!
//! All geometry lives in abstract float units on a playfield whose size is
//! supplied by the caller each tick (it derives from the terminal surface).
//! The renderer scales units to cells; the simulation never sees cells.

/// Gravity in units per tick squared (60 ticks per second).
pub const GRAVITY: f64 = 0.7;

/// Velocity assigned on a flap (negative = upward).
///
/// This is a velocity override, not an additive impulse: flapping while
/// already rising still yields exactly this velocity.
pub const JUMP_IMPULSE: f64 = -15.0;

/// Leftward pipe speed in units per tick.
pub const PIPE_SPEED: f64 = 3.0;

/// Pipe width in units.
pub const PIPE_WIDTH: f64 = 80.0;

/// Edge length of the bird's square hitbox.
pub const BIRD_SIZE: f64 = 40.0;

/// Fixed horizontal position of the bird's center.
pub const BIRD_X: f64 = 100.0;

/// Gap between the pipe segments at score 0.
pub const INITIAL_GAP_HEIGHT: f64 = 300.0;

/// The gap never shrinks below this.
pub const MIN_GAP_HEIGHT: f64 = 150.0;

/// Gap units lost per pipe passed.
pub const GAP_SHRINK_PER_SCORE: f64 = 5.0;

/// Minimum visible length of either pipe segment.
pub const MIN_PIPE_SEGMENT: f64 = 50.0;

/// Simulation rate. One tick advances the world by 1/60 s.
pub const TICKS_PER_SECOND: u64 = 60;

/// Axis-aligned bounding box for bird/pipe collision tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the boxes overlap with positive area on both axes.
    /// Boxes that merely touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// True when the point lies inside the box (edges inclusive on the
    /// low side, exclusive on the high side).
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// The sole mutable entity of the game.
///
/// Owned by the main loop, mutated only through `logic::{reset, jump, step}`
/// and read-only for the renderer. Holds one recycled pipe pair: when it
/// scrolls off the left edge it respawns at the right edge with fresh
/// heights.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Vertical center of the bird in units. 0 = top of playfield.
    pub bird_y: f64,
    /// Vertical velocity in units/tick (negative = upward).
    pub bird_velocity: f64,
    /// X of the leading (left) edge of the pipe pair.
    pub pipe_x: f64,
    /// Height of the ceiling-mounted pipe segment.
    pub top_pipe_height: f64,
    /// Y where the floor-mounted pipe segment begins.
    pub bottom_pipe_top: f64,
    /// Vertical clearance between the two segments at the next respawn.
    pub gap_height: f64,
    /// Pipe pairs passed this run.
    pub score: u32,
    /// Set on collision or out-of-bounds; cleared only by reset.
    pub game_over: bool,
}

impl GameState {
    /// Fresh state for the given playfield. Equivalent to `logic::reset`
    /// on an existing value.
    pub fn new<R: rand::Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        let mut state = Self {
            bird_y: 0.0,
            bird_velocity: 0.0,
            pipe_x: 0.0,
            top_pipe_height: 0.0,
            bottom_pipe_top: 0.0,
            gap_height: INITIAL_GAP_HEIGHT,
            score: 0,
            game_over: false,
        };
        super::logic::reset(&mut state, rng, width, height);
        state
    }

    /// Bird hitbox, centered at (BIRD_X, bird_y).
    pub fn bird_rect(&self) -> Rect {
        Rect::new(
            BIRD_X - BIRD_SIZE / 2.0,
            self.bird_y - BIRD_SIZE / 2.0,
            BIRD_SIZE,
            BIRD_SIZE,
        )
    }

    /// Ceiling-mounted pipe segment.
    pub fn top_pipe_rect(&self) -> Rect {
        Rect::new(self.pipe_x, 0.0, PIPE_WIDTH, self.top_pipe_height)
    }

    /// Floor-mounted pipe segment; extends to the bottom of the playfield.
    pub fn bottom_pipe_rect(&self, playfield_height: f64) -> Rect {
        Rect::new(
            self.pipe_x,
            self.bottom_pipe_top,
            PIPE_WIDTH,
            playfield_height - self.bottom_pipe_top,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_rect_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(12.0, 14.9));
        assert!(!r.contains(15.0, 12.0));
        assert!(!r.contains(9.9, 12.0));
    }

    #[test]
    fn test_bird_rect_centered() {
        let mut rng = rand::thread_rng();
        let state = GameState::new(&mut rng, 400.0, 600.0);
        let rect = state.bird_rect();
        assert_eq!(rect.x, BIRD_X - BIRD_SIZE / 2.0);
        assert_eq!(rect.y, state.bird_y - BIRD_SIZE / 2.0);
        assert_eq!(rect.width, BIRD_SIZE);
        assert_eq!(rect.height, BIRD_SIZE);
    }

    #[test]
    fn test_pipe_rects_share_column() {
        let mut rng = rand::thread_rng();
        let state = GameState::new(&mut rng, 400.0, 600.0);
        let top = state.top_pipe_rect();
        let bottom = state.bottom_pipe_rect(600.0);
        assert_eq!(top.x, state.pipe_x);
        assert_eq!(bottom.x, state.pipe_x);
        assert_eq!(top.y, 0.0);
        assert_eq!(top.height, state.top_pipe_height);
        assert_eq!(bottom.y, state.bottom_pipe_top);
        assert_eq!(bottom.y + bottom.height, 600.0);
    }
}
