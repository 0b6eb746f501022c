//! TUI Tanks: a Battle City style arcade game for the terminal.
//!
//! The crate is split into a pure simulation (`core`), pure data (`types`),
//! terminal input mapping (`input`) and terminal rendering (`term`). The
//! binary in `main.rs` is only the pacing/IO shell around `core::GameState`.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
