//! Gameplay mode: wraps the simulation behind the `GameMode` interface
//!
//! Owns the match state and the seeded RNG, maps simulation events to audio
//! cues, and turns entities into draw commands. There is deliberately no
//! exit path from gameplay: escape is ignored by the core and the host ends
//! the run by closing the window.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{BALL_RADIUS, PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::host::{AudioCue, Frame, HostCtx};
use crate::input::InputSnapshot;
use crate::machine::{GameMode, Transition};
use crate::sim::{Arena, GameEvent, PongState, TickInput, tick};

pub struct Gameplay {
    state: PongState,
    rng: Pcg32,
    /// Reused across ticks to avoid reallocating every frame
    events: Vec<GameEvent>,
}

impl Gameplay {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            state: PongState::new(&mut rng, Arena::default()),
            rng,
            events: Vec::new(),
        }
    }

    /// Read access for the host's diagnostics and for tests.
    pub fn state(&self) -> &PongState {
        &self.state
    }
}

impl GameMode for Gameplay {
    fn name(&self) -> &'static str {
        "gameplay"
    }

    fn enter(&mut self, _host: &mut HostCtx) {
        // Fresh entities and zero scores on every entry
        self.state = PongState::new(&mut self.rng, self.state.arena);
        log::info!("match started (arena {}x{})", self.state.arena.width, self.state.arena.height);
    }

    fn exit(&mut self, _host: &mut HostCtx) {}

    fn update(
        &mut self,
        host: &mut HostCtx,
        input: &InputSnapshot,
        dt: f32,
    ) -> Option<Transition> {
        let tick_input = TickInput {
            p1_up: input.p1_up,
            p1_down: input.p1_down,
            p2_up: input.p2_up,
            p2_down: input.p2_down,
        };

        self.events.clear();
        tick(&mut self.state, &tick_input, dt, &mut self.rng, &mut self.events);

        for event in &self.events {
            match event {
                GameEvent::WallBounce | GameEvent::PaddleHit(_) => {
                    host.play(AudioCue::Collision);
                }
                GameEvent::PointScored(side) => {
                    log::info!("point for {:?}, score {}", side, self.state.score.label());
                    host.play(AudioCue::Score);
                }
            }
        }
        None
    }

    fn draw(&self, _host: &HostCtx, frame: &mut Frame) {
        let paddle_size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        frame.rect(self.state.paddle_1.pos, paddle_size);
        frame.rect(self.state.paddle_2.pos, paddle_size);
        frame.circle(self.state.ball.pos, BALL_RADIUS);
        frame.text(
            self.state.score.label(),
            Vec2::new(self.state.arena.width / 2.0, 10.0),
            36.0,
        );
    }
}
