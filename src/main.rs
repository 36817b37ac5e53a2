//! Headless demo driver
//!
//! Runs the state machine at the fixed tick rate with scripted input:
//! confirms "Start Game" from the main menu, then lets both paddles track
//! the ball for a few simulated minutes and logs the scoring. A real host
//! would replace this loop with a window, renderer, and input sampling.

use std::time::{SystemTime, UNIX_EPOCH};

use pong_duel::consts::{ARENA_HEIGHT, SIM_DT};
use pong_duel::{DrawCmd, Frame, HostCtx, InputSnapshot, StateId, StateMachine};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("run seed: {seed}");

    let mut host = HostCtx::new(seed);
    let mut machine = StateMachine::new();
    machine.set_state(&mut host, StateId::MainMenu);

    // Hold confirm until the menu debounce lets "Start Game" through
    let confirm = InputSnapshot {
        confirm: true,
        ..Default::default()
    };
    while machine.current_name() == Some("main menu") {
        machine.update(&mut host, &confirm, SIM_DT);
    }

    // Two simulated minutes of both paddles chasing the ball
    let mut frame = Frame::default();
    let mut input = InputSnapshot::default();
    for _ in 0..(120 * 120) {
        machine.update(&mut host, &input, SIM_DT);

        frame.clear();
        machine.draw(&host, &mut frame);
        host.drain_audio();

        // Steer from the freshly drawn ball position: chase it vertically
        if let Some(DrawCmd::Circle { center, .. }) = frame
            .cmds
            .iter()
            .find(|c| matches!(c, DrawCmd::Circle { .. }))
        {
            let chase_up = center.y < ARENA_HEIGHT / 2.0;
            input.p1_up = chase_up;
            input.p1_down = !chase_up;
            input.p2_up = chase_up;
            input.p2_down = !chase_up;
        }
    }

    log::info!("demo finished");
}
