//! Keyboard input module (engine-facing).
//!
//! This crate does not depend on the game loop. It turns raw
//! per-key "is down" readings into edge-triggered press/hold/release state and
//! provides sources of those readings:
//!
//! - [`ScriptedInput`] replays synthetic snapshots (tests, demos)
//! - [`TerminalInput`] reconstructs key levels from `crossterm` key events,
//!   including terminals without key-release events

pub mod map;
pub mod source;
pub mod terminal;
pub mod tracker;

pub use tui_console_types as types;

pub use map::{is_interrupt, virtual_key};
pub use source::{InputSource, ScriptedInput};
pub use terminal::TerminalInput;
pub use tracker::{InputTracker, KeyState, RawKeySnapshot};
