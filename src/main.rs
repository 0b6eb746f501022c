//! Terminal tank arcade runner (default binary).
//!
//! The binary is only the shell around `core::GameState`: argument
//! parsing, input draining, pacing and rendering. With stdout redirected
//! it runs the same simulation headless, which is how `--frames=<N>` is
//! meant to be used for non-interactive verification.

use std::io::IsTerminal;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_tanks::core::GameState;
use tui_tanks::input::{handle_key_event, should_quit, HeldKeys};
use tui_tanks::term::{GameView, TerminalRenderer, Viewport};
use tui_tanks::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    env_logger::init();

    let budget = parse_frame_budget(std::env::args().skip(1))?;
    let seed = clock_seed();
    log::info!("starting session (seed {seed}, frame budget {budget:?})");

    if !std::io::stdout().is_terminal() {
        return run_headless(seed, budget);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, seed, budget);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Parse the single supported flag, `--frames=<N>`. Anything else is a
/// fatal diagnostic.
fn parse_frame_budget(args: impl Iterator<Item = String>) -> Result<Option<u64>> {
    let mut budget = None;
    for arg in args {
        if let Some(value) = arg.strip_prefix("--frames=") {
            let frames: u64 = value
                .parse()
                .with_context(|| format!("invalid --frames value: {value:?}"))?;
            budget = Some(frames);
        } else {
            bail!("unrecognized argument: {arg:?} (expected --frames=<N>)");
        }
    }
    Ok(budget)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32, budget: Option<u64>) -> Result<()> {
    let mut state = GameState::new(seed);
    let view = GameView::default();
    let mut held = HeldKeys::new();
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state, Viewport::new(w, h));
        term.draw(&fb)?;

        if budget.is_some_and(|frames| state.tick_count >= frames) {
            log::info!("frame budget reached after {} ticks", state.tick_count);
            return Ok(());
        }

        // Drain input until the tick deadline; the poll timeout is the
        // pacing sleep.
        let mut fire_pending = false;
        let mut quit_pending = false;
        loop {
            let timeout = tick_duration
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);
            if timeout.is_zero() {
                break;
            }
            if !event::poll(timeout)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    drain_key(key, &mut held, &mut fire_pending, &mut quit_pending)
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
        last_tick = Instant::now();

        // One tick: pending fire, at most one held movement, then the
        // simulation step. Quit takes effect after the tick completes.
        let mut actions: ArrayVec<GameAction, 2> = ArrayVec::new();
        if fire_pending {
            actions.push(GameAction::Fire);
        }
        if let Some(direction) = held.current() {
            actions.push(GameAction::from_direction(direction));
        }
        for action in actions {
            state.apply_action(action);
        }
        state.tick();

        if quit_pending {
            log::info!("quit after {} ticks", state.tick_count);
            return Ok(());
        }
    }
}

fn drain_key(key: KeyEvent, held: &mut HeldKeys, fire_pending: &mut bool, quit_pending: &mut bool) {
    match key.kind {
        // Auto-repeat refreshes the hold on terminals without release
        // events, so it is treated like a press.
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if should_quit(key) {
                *quit_pending = true;
                return;
            }
            match handle_key_event(key) {
                Some(GameAction::Fire) => *fire_pending = true,
                _ => {
                    held.handle_key_press(key.code);
                }
            }
        }
        KeyEventKind::Release => held.handle_key_release(key.code),
    }
}

/// No terminal attached: same tick cadence, no input, no drawing.
fn run_headless(seed: u32, budget: Option<u64>) -> Result<()> {
    if budget.is_none() {
        log::warn!("headless session without --frames runs until killed");
    }
    let mut state = GameState::new(seed);
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        if budget.is_some_and(|frames| state.tick_count >= frames) {
            log::info!("frame budget reached after {} ticks", state.tick_count);
            return Ok(());
        }
        let started = Instant::now();
        state.tick();
        if let Some(rest) = tick_duration.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
