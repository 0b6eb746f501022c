//! Held-state tracker for the four movement arrows.
//!
//! Movement is sampled as held-state once per tick, while fire stays an
//! edge-triggered key-down event handled by the shell. Terminals that do
//! not emit key release events get a short auto-release timeout so a
//! single tap does not turn into a sustained hold.

use crossterm::event::KeyCode;

use crate::types::Direction;

// Auto-release window for terminals without key-release events. Terminal
// auto-repeat refreshes the hold well within this interval.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which movement arrows are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    held: [bool; 4],
    last_key_time: std::time::Instant,
    release_timeout_ms: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            held: [false; 4],
            last_key_time: std::time::Instant::now(),
            release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Record an arrow press (or auto-repeat, which refreshes the hold).
    /// Returns whether the key was a movement arrow.
    pub fn handle_key_press(&mut self, code: KeyCode) -> bool {
        let Some(direction) = arrow_direction(code) else {
            return false;
        };
        self.held[direction.index()] = true;
        self.last_key_time = std::time::Instant::now();
        true
    }

    /// Record an arrow release, on terminals that report them.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(direction) = arrow_direction(code) {
            self.held[direction.index()] = false;
        }
    }

    /// The single movement direction for this tick, if any.
    ///
    /// When several arrows are held at once the precedence is fixed:
    /// Up > Down > Left > Right. Applies the auto-release timeout first.
    pub fn current(&mut self) -> Option<Direction> {
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.release_timeout_ms {
            self.held = [false; 4];
        }
        Direction::ALL
            .into_iter()
            .find(|direction| self.held[direction.index()])
    }

    pub fn reset(&mut self) {
        self.held = [false; 4];
        self.last_key_time = std::time::Instant::now();
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

fn arrow_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}
