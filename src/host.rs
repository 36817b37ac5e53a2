//! Host services context
//!
//! The simulation and menus never reach out to ambient globals for sound or
//! drawing. Instead they receive a [`HostCtx`] and push fire-and-forget
//! requests into it: audio cues the host drains each frame, and draw
//! commands rebuilt into a [`Frame`] every draw call. The host owns the
//! actual audio device, window, and renderer.

use glam::Vec2;

use crate::settings::Settings;

/// A request to play a sound. Never awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Menu navigation or confirm
    MenuClick,
    /// Ball hit a wall or a paddle
    Collision,
    /// A point was scored
    Score,
}

/// A single draw request. Coordinates are arena-space, y-down.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect { center: Vec2, size: Vec2 },
    Circle { center: Vec2, radius: f32 },
    Text { text: String, pos: Vec2, size: f32 },
}

/// One frame's worth of draw commands, rebuilt from scratch each draw call.
#[derive(Debug, Default)]
pub struct Frame {
    pub cmds: Vec<DrawCmd>,
}

impl Frame {
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn rect(&mut self, center: Vec2, size: Vec2) {
        self.cmds.push(DrawCmd::Rect { center, size });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32) {
        self.cmds.push(DrawCmd::Circle { center, radius });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, size: f32) {
        self.cmds.push(DrawCmd::Text {
            text: text.into(),
            pos,
            size,
        });
    }
}

/// Everything the host exposes to the active game mode.
#[derive(Debug)]
pub struct HostCtx {
    /// Settings flags, mutated in place by the options menu
    pub settings: Settings,
    /// Seed for the gameplay RNG, fixed per run
    pub seed: u64,
    /// Queued audio cues, drained by the host each frame
    audio: Vec<AudioCue>,
}

impl HostCtx {
    pub fn new(seed: u64) -> Self {
        Self {
            settings: Settings::default(),
            seed,
            audio: Vec::new(),
        }
    }

    /// Queue a sound request.
    pub fn play(&mut self, cue: AudioCue) {
        self.audio.push(cue);
    }

    /// Take all queued cues, leaving the queue empty.
    pub fn drain_audio(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.audio)
    }
}
