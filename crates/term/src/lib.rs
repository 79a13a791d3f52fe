//! Terminal presentation surface.
//!
//! This is a small, game-oriented presentation layer: it flushes a
//! [`FrameBuffer`](crate::core::FrameBuffer) of palette-colored cells to a
//! terminal through `crossterm`, and uses the terminal title as the status
//! line.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only emit changed cell runs after the first frame
//! - Stay allocation-free per frame once warmed up

pub mod renderer;

pub use tui_console_core as core;
pub use tui_console_types as types;

pub use renderer::{encode_diff_into, encode_full_into, TerminalSurface};
