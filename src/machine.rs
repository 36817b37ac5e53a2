//! Game mode state machine
//!
//! Exactly one mode (main menu, options menu, or gameplay) is live at a
//! time, with an explicit enter/exit lifecycle around every transition.
//! Transitions are requested by the active mode's `update` return value and
//! applied only after that update has fully completed, so no tick ever runs
//! against a half-switched state.

use crate::gameplay::Gameplay;
use crate::host::{Frame, HostCtx};
use crate::input::InputSnapshot;
use crate::menu::{MainMenu, OptionsMenu};

/// Identifies a constructible game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateId {
    MainMenu,
    OptionsMenu,
    Gameplay,
}

/// What the active mode wants to happen after its update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Switch to another mode (exit current, enter new)
    To(StateId),
    /// Ask the host to shut down cleanly
    Quit,
}

/// A game mode: owns its entities and labels between `enter` and `exit`.
pub trait GameMode {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Acquire owned state. Called exactly once, before any update.
    fn enter(&mut self, host: &mut HostCtx);

    /// Release owned state. Called exactly once, on transition-out.
    fn exit(&mut self, host: &mut HostCtx);

    /// Advance one tick. `dt` is the externally supplied elapsed time.
    fn update(&mut self, host: &mut HostCtx, input: &InputSnapshot, dt: f32)
    -> Option<Transition>;

    /// Emit this mode's draw commands into `frame`.
    fn draw(&self, host: &HostCtx, frame: &mut Frame);
}

/// Holds the single active mode and forwards update/draw to it.
#[derive(Default)]
pub struct StateMachine {
    current: Option<Box<dyn GameMode>>,
    /// Set when a mode requests shutdown; the host polls it. The core never
    /// terminates the process itself.
    pub quit_requested: bool,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    fn build(&self, host: &HostCtx, id: StateId) -> Box<dyn GameMode> {
        match id {
            StateId::MainMenu => Box::new(MainMenu::new()),
            StateId::OptionsMenu => Box::new(OptionsMenu::new()),
            StateId::Gameplay => Box::new(Gameplay::new(host.seed)),
        }
    }

    /// Exit the current mode (if any), then enter the new one. The outgoing
    /// mode's entities are dropped immediately; no drain is needed because
    /// transitions only happen between completed ticks.
    pub fn set_state(&mut self, host: &mut HostCtx, id: StateId) {
        if let Some(mut old) = self.current.take() {
            log::debug!("state transition: {} -> {:?}", old.name(), id);
            old.exit(host);
        } else {
            log::debug!("initial state: {:?}", id);
        }
        let mut new = self.build(host, id);
        new.enter(host);
        self.current = Some(new);
    }

    /// Forward one tick to the active mode, then apply any transition it
    /// requested. Calling this with no active mode is a programming error.
    pub fn update(&mut self, host: &mut HostCtx, input: &InputSnapshot, dt: f32) {
        let requested = self
            .current
            .as_mut()
            .expect("StateMachine::update called with no active state")
            .update(host, input, dt);
        match requested {
            Some(Transition::To(id)) => self.set_state(host, id),
            Some(Transition::Quit) => {
                log::info!("quit requested from {:?}", self.current_name());
                self.quit_requested = true;
            }
            None => {}
        }
    }

    /// Forward a draw call to the active mode. Calling this with no active
    /// mode is a programming error.
    pub fn draw(&self, host: &HostCtx, frame: &mut Frame) {
        self.current
            .as_ref()
            .expect("StateMachine::draw called with no active state")
            .draw(host, frame);
    }

    /// Name of the active mode, for the host's diagnostics.
    pub fn current_name(&self) -> Option<&'static str> {
        self.current.as_deref().map(GameMode::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records lifecycle calls so tests can assert ordering.
    struct Probe {
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl GameMode for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }
        fn enter(&mut self, _host: &mut HostCtx) {
            self.log.borrow_mut().push("enter");
        }
        fn exit(&mut self, _host: &mut HostCtx) {
            self.log.borrow_mut().push("exit");
        }
        fn update(
            &mut self,
            _host: &mut HostCtx,
            _input: &InputSnapshot,
            _dt: f32,
        ) -> Option<Transition> {
            self.log.borrow_mut().push("update");
            None
        }
        fn draw(&self, _host: &HostCtx, _frame: &mut Frame) {
            self.log.borrow_mut().push("draw");
        }
    }

    #[test]
    fn test_lifecycle_order_on_transition() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut host = HostCtx::new(0);
        let mut machine = StateMachine::new();
        machine.current = Some(Box::new(Probe { log: log.clone() }));

        machine.update(&mut host, &InputSnapshot::default(), 1.0 / 120.0);
        machine.set_state(&mut host, StateId::MainMenu);

        // The probe's exit runs before the new mode takes over.
        assert_eq!(*log.borrow(), vec!["update", "exit"]);
        assert_eq!(machine.current_name(), Some("main menu"));
    }

    #[test]
    fn test_exactly_one_state_live() {
        let mut host = HostCtx::new(0);
        let mut machine = StateMachine::new();
        machine.set_state(&mut host, StateId::MainMenu);
        machine.set_state(&mut host, StateId::Gameplay);
        assert_eq!(machine.current_name(), Some("gameplay"));
    }

    #[test]
    #[should_panic(expected = "no active state")]
    fn test_update_with_no_state_panics() {
        let mut host = HostCtx::new(0);
        let mut machine = StateMachine::new();
        machine.update(&mut host, &InputSnapshot::default(), 1.0 / 120.0);
    }

    #[test]
    #[should_panic(expected = "no active state")]
    fn test_draw_with_no_state_panics() {
        let host = HostCtx::new(0);
        let machine = StateMachine::new();
        let mut frame = Frame::default();
        machine.draw(&host, &mut frame);
    }
}
