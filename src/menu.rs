//! Menus: debounced navigation and the two menu modes
//!
//! Both menus share [`MenuNav`], a cursor over a fixed option list with
//! wraparound and a cooldown between actions. The cooldown is the critical
//! correctness property: without it a held key would re-trigger every tick
//! (60-120x per second); with it, actions are throttled to at most 5 per
//! second of simulated time regardless of tick rate.

use glam::Vec2;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, MENU_COOLDOWN};
use crate::host::{AudioCue, Frame, HostCtx};
use crate::input::InputSnapshot;
use crate::machine::{GameMode, StateId, Transition};

/// Which navigation action fired on a given tick. At most one fires per
/// eligible tick; up, down, and confirm are mutually exclusive in that
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Up,
    Down,
    Confirm,
}

/// Debounced cursor over a fixed, ordered option list.
///
/// Time is the simulated clock accumulated from `dt`, so behavior is
/// deterministic and independent of the host's frame rate. An action is
/// eligible only when strictly more than the cooldown has elapsed since the
/// last one; `elapsed == cooldown` is a no-action tick.
#[derive(Debug, Clone)]
pub struct MenuNav {
    len: usize,
    selected: usize,
    clock: f32,
    last_action: f32,
    cooldown: f32,
}

impl MenuNav {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            len,
            selected: 0,
            clock: 0.0,
            last_action: 0.0,
            cooldown: MENU_COOLDOWN,
        }
    }

    /// Currently selected option index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Advance the clock by `dt` and resolve this tick's held keys into at
    /// most one action. Selection moves wrap around at both ends.
    pub fn poll(&mut self, dt: f32, up: bool, down: bool, confirm: bool) -> Option<NavAction> {
        self.clock += dt;
        if self.clock - self.last_action <= self.cooldown {
            return None;
        }
        if up {
            self.last_action = self.clock;
            self.selected = (self.selected + self.len - 1) % self.len;
            Some(NavAction::Up)
        } else if down {
            self.last_action = self.clock;
            self.selected = (self.selected + 1) % self.len;
            Some(NavAction::Down)
        } else if confirm {
            self.last_action = self.clock;
            Some(NavAction::Confirm)
        } else {
            None
        }
    }
}

/// Vertical position of menu item `i` in the shared layout.
fn item_y(i: usize) -> f32 {
    ARENA_HEIGHT / 2.0 + 60.0 * i as f32
}

const TITLE_Y: f32 = 100.0;
const POINTER_X: f32 = ARENA_WIDTH / 2.0 - 220.0;

/// The main menu: start a match, open options, or quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainMenuItem {
    Start,
    Options,
    Quit,
}

impl MainMenuItem {
    const ALL: [MainMenuItem; 3] = [Self::Start, Self::Options, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::Start => "Start Game",
            Self::Options => "Options",
            Self::Quit => "Quit",
        }
    }
}

pub struct MainMenu {
    nav: MenuNav,
    pointer_y: f32,
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            nav: MenuNav::new(MainMenuItem::ALL.len()),
            pointer_y: item_y(0),
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMode for MainMenu {
    fn name(&self) -> &'static str {
        "main menu"
    }

    fn enter(&mut self, _host: &mut HostCtx) {
        self.nav = MenuNav::new(MainMenuItem::ALL.len());
        self.pointer_y = item_y(0);
    }

    fn exit(&mut self, _host: &mut HostCtx) {}

    fn update(
        &mut self,
        host: &mut HostCtx,
        input: &InputSnapshot,
        dt: f32,
    ) -> Option<Transition> {
        // Pointer tracks the selection made on the previous tick
        self.pointer_y = item_y(self.nav.selected());

        let action = self
            .nav
            .poll(dt, input.menu_up, input.menu_down, input.confirm)?;
        host.play(AudioCue::MenuClick);
        if action != NavAction::Confirm {
            return None;
        }
        match MainMenuItem::ALL[self.nav.selected()] {
            MainMenuItem::Start => Some(Transition::To(StateId::Gameplay)),
            MainMenuItem::Options => Some(Transition::To(StateId::OptionsMenu)),
            MainMenuItem::Quit => Some(Transition::Quit),
        }
    }

    fn draw(&self, _host: &HostCtx, frame: &mut Frame) {
        frame.text("PONG DUEL", Vec2::new(ARENA_WIDTH / 2.0, TITLE_Y), 36.0);
        for (i, item) in MainMenuItem::ALL.iter().enumerate() {
            frame.text(item.label(), Vec2::new(ARENA_WIDTH / 2.0, item_y(i)), 24.0);
        }
        frame.text("->", Vec2::new(POINTER_X, self.pointer_y), 30.0);
    }
}

/// The options menu: toggle the FPS overlay or go back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionsItem {
    ShowFps,
    Back,
}

impl OptionsItem {
    const ALL: [OptionsItem; 2] = [Self::ShowFps, Self::Back];

    fn label(self) -> &'static str {
        match self {
            Self::ShowFps => "Show FPS",
            Self::Back => "Back to main menu",
        }
    }
}

pub struct OptionsMenu {
    nav: MenuNav,
    pointer_y: f32,
}

impl OptionsMenu {
    pub fn new() -> Self {
        Self {
            nav: MenuNav::new(OptionsItem::ALL.len()),
            pointer_y: item_y(0),
        }
    }
}

impl Default for OptionsMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMode for OptionsMenu {
    fn name(&self) -> &'static str {
        "options menu"
    }

    fn enter(&mut self, _host: &mut HostCtx) {
        self.nav = MenuNav::new(OptionsItem::ALL.len());
        self.pointer_y = item_y(0);
    }

    fn exit(&mut self, _host: &mut HostCtx) {}

    fn update(
        &mut self,
        host: &mut HostCtx,
        input: &InputSnapshot,
        dt: f32,
    ) -> Option<Transition> {
        self.pointer_y = item_y(self.nav.selected());

        let action = self
            .nav
            .poll(dt, input.menu_up, input.menu_down, input.confirm)?;
        host.play(AudioCue::MenuClick);
        if action != NavAction::Confirm {
            return None;
        }
        match OptionsItem::ALL[self.nav.selected()] {
            OptionsItem::ShowFps => {
                host.settings.show_fps = !host.settings.show_fps;
                None
            }
            OptionsItem::Back => Some(Transition::To(StateId::MainMenu)),
        }
    }

    fn draw(&self, host: &HostCtx, frame: &mut Frame) {
        frame.text("OPTIONS", Vec2::new(ARENA_WIDTH / 2.0, TITLE_Y), 36.0);
        for (i, item) in OptionsItem::ALL.iter().enumerate() {
            frame.text(item.label(), Vec2::new(ARENA_WIDTH / 2.0, item_y(i)), 24.0);
        }
        let check = if host.settings.show_fps { "[x]" } else { "[ ]" };
        frame.text(check, Vec2::new(ARENA_WIDTH / 2.0 - 260.0, item_y(0)), 24.0);
        frame.text("->", Vec2::new(POINTER_X - 80.0, self.pointer_y), 30.0);
    }
}
