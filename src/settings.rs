//! Host-visible game settings
//!
//! Mutated only through the options menu and read by the host's render
//! loop. Nothing here is persisted; every run starts from the defaults.

use serde::{Deserialize, Serialize};

/// Game settings/preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Show the FPS overlay (drawn by the host, not the core)
    pub show_fps: bool,
}
