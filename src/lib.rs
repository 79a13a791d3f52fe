//! TUI Console (workspace facade crate).
//!
//! This package exposes the framework as `tui_console::{core,engine,input,term,types}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_console_core as core;
pub use tui_console_engine as engine;
pub use tui_console_input as input;
pub use tui_console_term as term;
pub use tui_console_types as types;
