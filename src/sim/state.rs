//! Gameplay entities and simulation state
//!
//! Coordinates are y-down: the top wall is y = 0, "up" decreases y.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::{Circle, Rect};
use crate::consts::*;

/// Which player, used for paddle identity and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player1,
    Player2,
}

/// Horizontal travel direction. A ball always has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HDir {
    Left,
    Right,
}

/// Vertical travel direction. A ball always has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VDir {
    Up,
    Down,
}

/// The fixed play field bounding all entity motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// One player's paddle. Moves vertically only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            speed: PADDLE_SPEED,
        }
    }

    /// Bounding box, recomputed from the current position.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT))
    }

    /// Move per held inputs. When both keys are held, up wins (source
    /// behavior, preserved). A move is refused outright if the moved edge
    /// would cross its bound; there is no clamp after the fact.
    pub fn update(&mut self, dt: f32, up: bool, down: bool, arena: &Arena) {
        let step = self.speed * dt;
        let half_h = PADDLE_HEIGHT / 2.0;
        if up {
            if self.pos.y - half_h - step >= 0.0 {
                self.pos.y -= step;
            }
        } else if down {
            if self.pos.y + half_h + step <= arena.height {
                self.pos.y += step;
            }
        }
    }
}

/// The ball. Speed is constant in magnitude; only the per-axis direction
/// signs change, and only on collision or respawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub speed: f32,
    pub dir_x: HDir,
    pub dir_y: VDir,
}

impl Ball {
    /// Spawn a ball at the arena center with random directions.
    pub fn spawn(rng: &mut impl Rng, arena: &Arena) -> Self {
        let mut ball = Self {
            pos: arena.center(),
            speed: BALL_SPEED,
            dir_x: HDir::Left,
            dir_y: VDir::Up,
        };
        ball.reset(rng, arena);
        ball
    }

    /// Move to the arena center, pick each axis direction uniformly at
    /// random, restore nominal speed. Initial condition at gameplay entry
    /// and after every scoring event.
    pub fn reset(&mut self, rng: &mut impl Rng, arena: &Arena) {
        self.pos = arena.center();
        self.dir_x = if rng.random_bool(0.5) {
            HDir::Left
        } else {
            HDir::Right
        };
        self.dir_y = if rng.random_bool(0.5) {
            VDir::Up
        } else {
            VDir::Down
        };
        self.speed = BALL_SPEED;
    }

    /// Bounding circle, recomputed from the current position.
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, BALL_RADIUS)
    }

    /// Advance `speed * dt` along the current direction on each axis.
    /// Both axes move every tick; diagonal motion is the norm.
    pub fn advance(&mut self, dt: f32) {
        let step = self.speed * dt;
        match self.dir_x {
            HDir::Left => self.pos.x -= step,
            HDir::Right => self.pos.x += step,
        }
        match self.dir_y {
            VDir::Up => self.pos.y -= step,
            VDir::Down => self.pos.y += step,
        }
    }
}

/// Two non-negative point counters, mutated only by scoring events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub player_1: u32,
    pub player_2: u32,
}

impl ScoreBoard {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player1 => self.player_1 += 1,
            Side::Player2 => self.player_2 += 1,
        }
    }

    /// Scoreboard label, e.g. `"2 : 1"`.
    pub fn label(&self) -> String {
        format!("{} : {}", self.player_1, self.player_2)
    }
}

/// Complete gameplay simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongState {
    pub arena: Arena,
    pub paddle_1: Paddle,
    pub paddle_2: Paddle,
    pub ball: Ball,
    pub score: ScoreBoard,
}

impl PongState {
    /// Fresh match: paddles centered against their side walls, ball served
    /// from the center with random directions, zero scores.
    pub fn new(rng: &mut impl Rng, arena: Arena) -> Self {
        let mid_y = arena.height / 2.0;
        Self {
            paddle_1: Paddle::new(Vec2::new(PADDLE_MARGIN, mid_y)),
            paddle_2: Paddle::new(Vec2::new(arena.width - PADDLE_MARGIN, mid_y)),
            ball: Ball::spawn(rng, &arena),
            score: ScoreBoard::default(),
            arena,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_paddle_refuses_move_past_top() {
        let arena = Arena::default();
        // One 2.5-unit step (300 * 1/120) fits, the next would cross y=0.
        let mut paddle = Paddle::new(Vec2::new(20.0, PADDLE_HEIGHT / 2.0 + 3.0));

        paddle.update(1.0 / 120.0, true, false, &arena);
        let after_first = paddle.pos.y;
        assert!(after_first < PADDLE_HEIGHT / 2.0 + 3.0);

        paddle.update(1.0 / 120.0, true, false, &arena);
        assert_eq!(paddle.pos.y, after_first, "move past the bound must be refused, not clamped");
        assert!(paddle.rect().top() >= 0.0);
    }

    #[test]
    fn test_paddle_up_wins_when_both_held() {
        let arena = Arena::default();
        let mut paddle = Paddle::new(arena.center());
        paddle.update(0.1, true, true, &arena);
        assert!(paddle.pos.y < arena.center().y);
    }

    #[test]
    fn test_ball_reset_restores_center_and_speed() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::spawn(&mut rng, &arena);

        ball.pos = Vec2::new(-50.0, 900.0);
        ball.speed = 1.0;
        ball.reset(&mut rng, &arena);

        assert_eq!(ball.pos, Vec2::new(640.0, 360.0));
        assert_eq!(ball.speed, BALL_SPEED);
    }

    #[test]
    fn test_ball_moves_on_both_axes() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::spawn(&mut rng, &arena);
        ball.dir_x = HDir::Right;
        ball.dir_y = VDir::Down;

        let before = ball.pos;
        ball.advance(0.01);
        assert!(ball.pos.x > before.x);
        assert!(ball.pos.y > before.y);
    }

    #[test]
    fn test_scoreboard() {
        let mut score = ScoreBoard::default();
        score.award(Side::Player1);
        score.award(Side::Player1);
        score.award(Side::Player2);
        assert_eq!(score.label(), "2 : 1");

        score.reset();
        assert_eq!((score.player_1, score.player_2), (0, 0));
    }
}
