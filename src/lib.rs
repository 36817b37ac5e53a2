//! Pong Duel - a two-player Pong with a menu state machine
//!
//! Core modules:
//! - `sim`: Deterministic gameplay simulation (paddles, ball, scoring)
//! - `machine`: Game mode state machine with enter/exit lifecycle
//! - `menu`: Main menu and options menu with debounced navigation
//! - `host`: Host-services context (audio cues, draw commands, settings)
//!
//! The crate owns no window, renderer, or audio device. The host drives
//! `StateMachine::update` at a fixed tick rate with an [`input::InputSnapshot`]
//! and drains the resulting audio cues and draw commands each frame.

pub mod gameplay;
pub mod host;
pub mod input;
pub mod machine;
pub mod menu;
pub mod settings;
pub mod sim;

pub use host::{AudioCue, DrawCmd, Frame, HostCtx};
pub use input::InputSnapshot;
pub use machine::{GameMode, StateId, StateMachine, Transition};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Arena dimensions (y-down, origin at the top-left corner)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Horizontal inset of each paddle's center from its side wall
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Nominal ball speed, restored on every respawn
    pub const BALL_SPEED: f32 = 300.0;

    /// Minimum time between two menu navigation actions (seconds)
    pub const MENU_COOLDOWN: f32 = 0.2;
}
