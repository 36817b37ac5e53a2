//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies
//!
//! Side effects are reported as [`GameEvent`]s pushed to a caller-supplied
//! buffer; the host decides what (if anything) to do with them.

pub mod geom;
pub mod state;
pub mod tick;

pub use geom::{Circle, Rect};
pub use state::{Arena, Ball, HDir, Paddle, PongState, ScoreBoard, Side, VDir};
pub use tick::{GameEvent, TickInput, tick};
