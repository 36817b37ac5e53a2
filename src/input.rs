//! Per-tick input snapshot
//!
//! The core never polls a keyboard. The host samples whatever input library
//! it uses into this value object once per tick, which keeps the simulation
//! decoupled from any key-state table.

/// Boolean key state for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    // Gameplay
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
    // Menus
    pub menu_up: bool,
    pub menu_down: bool,
    pub confirm: bool,
    /// Carried for the host's benefit; the core ignores it entirely and
    /// never shuts down on it.
    pub escape: bool,
}
