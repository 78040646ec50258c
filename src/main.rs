//! Terminal runner (default binary).
//!
//! Owns the two stimuli the engine leaves external: the 500ms gravity
//! clock and keyboard input. Every engine mutation is followed by a fresh
//! snapshot render.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Engine;
use blockfall::input::{map_key, should_quit, should_reset};
use blockfall::term::{GameView, TerminalRenderer};
use blockfall::types::DROP_INTERVAL_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::process::id();
    let mut engine = Engine::new(seed);
    let view = GameView;

    let tick_duration = Duration::from_millis(DROP_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        term.draw(&view.render(&engine.snapshot()))?;

        // Wait for input, but never past the next gravity deadline.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if should_reset(key) {
                        engine.reset();
                    } else if let Some(cmd) = map_key(key.code) {
                        engine.input(cmd);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}
