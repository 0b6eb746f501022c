//! Core game logic: level, entities and the per-tick state machine.
//!
//! Everything in this module is pure (no I/O, no wall-clock time) so the
//! whole simulation can be driven deterministically from tests.

pub mod bullet;
pub mod game_state;
pub mod level;
pub mod rng;
pub mod tank;

pub use bullet::{Bullet, BulletSet};
pub use game_state::GameState;
pub use level::{build_level, LAYOUT};
pub use rng::SimpleRng;
pub use tank::{Controller, Tank};
