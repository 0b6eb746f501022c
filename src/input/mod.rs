//! Terminal input: key mapping and held-key tracking.

pub mod handler;
pub mod map;

pub use handler::HeldKeys;
pub use map::{handle_key_event, should_quit};
