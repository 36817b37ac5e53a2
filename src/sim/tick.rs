//! Fixed timestep gameplay tick
//!
//! Advances the simulation one step in a strict order: paddles, then the
//! ball (wall bounce, then movement), then ball-vs-paddle resolution, then
//! scoring. The order is observable and must not change.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Arena, Ball, HDir, PongState, Side, VDir};

/// Held-key snapshot for a single gameplay tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
}

/// Something the host may want to react to (sound, effects). Fire-and-forget:
/// the simulation never waits on the host's handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball touched the given player's paddle this tick. Emitted once per
    /// contact tick with no debounce, so a ball embedded in a paddle across
    /// several ticks re-emits (source behavior, preserved).
    PaddleHit(Side),
    /// The given player scored; the ball has been respawned at center.
    PointScored(Side),
}

/// Advance the game state by one timestep.
///
/// Events are appended to `events`; the buffer is not cleared here so the
/// caller can accumulate across substeps if it wants to.
pub fn tick(
    state: &mut PongState,
    input: &TickInput,
    dt: f32,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) {
    let arena = state.arena;

    // 1. Paddles
    state.paddle_1.update(dt, input.p1_up, input.p1_down, &arena);
    state.paddle_2.update(dt, input.p2_up, input.p2_down, &arena);

    // 2. Ball: resolve wall contact against the pre-move position, then move
    resolve_wall_bounce(&mut state.ball, &arena, events);
    state.ball.advance(dt);

    // 3. Paddle contact forces the horizontal direction away from the hit
    //    paddle, overriding anything the wall step decided this tick
    let circle = state.ball.circle();
    if state.paddle_1.rect().overlaps_circle(&circle) {
        state.ball.dir_x = HDir::Right;
        events.push(GameEvent::PaddleHit(Side::Player1));
    } else if state.paddle_2.rect().overlaps_circle(&circle) {
        state.ball.dir_x = HDir::Left;
        events.push(GameEvent::PaddleHit(Side::Player2));
    }

    // 4. Scoring: the ball must have fully exited the arena. At most one
    //    side scores per tick, and scoring always respawns the ball.
    let circle = state.ball.circle();
    if circle.right() <= 0.0 {
        state.score.award(Side::Player2);
        events.push(GameEvent::PointScored(Side::Player2));
        state.ball.reset(rng, &arena);
    } else if circle.left() >= arena.width {
        state.score.award(Side::Player1);
        events.push(GameEvent::PointScored(Side::Player1));
        state.ball.reset(rng, &arena);
    }
}

/// Top/bottom wall resolution. Each axis flips at most once per tick and the
/// horizontal axis is untouched here: side walls are open so the ball can
/// exit for scoring, and horizontal reversal comes only from paddles.
fn resolve_wall_bounce(ball: &mut Ball, arena: &Arena, events: &mut Vec<GameEvent>) {
    let circle = ball.circle();
    if circle.top() <= 0.0 {
        ball.dir_y = VDir::Down;
        events.push(GameEvent::WallBounce);
    } else if circle.bottom() >= arena.height {
        ball.dir_y = VDir::Up;
        events.push(GameEvent::WallBounce);
    }
}
