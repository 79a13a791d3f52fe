//! Game loop and application runtime.
//!
//! This crate drives a host-supplied [`Application`] through a continuously
//! running loop: it measures frame time, refreshes key edge states from an
//! [`InputSource`](crate::input::InputSource), calls the application, and
//! hands the screen to a [`PresentationSurface`](crate::core::PresentationSurface).
//!
//! # Module Structure
//!
//! - [`app`]: the application contract and the per-tick [`Frame`]
//! - [`game_loop`]: the `Created -> Running -> Stopping -> Finished` machine
//! - [`runtime`]: [`Engine`], the controller that starts the loop and waits
//! - [`clock`]: wall-clock and deterministic time sources
//! - [`status`]: allocation-free status line formatting
//! - [`config`]: startup configuration (`TUI_CONSOLE_*` environment)
//! - [`error`]: engine errors
//!
//! # Timing
//!
//! There is no fixed timestep. Each tick lasts however long it takes and the
//! application receives the elapsed seconds; scale simulation by it.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use tui_console_core::{CellSize, ConfigError, FrameBuffer, PresentationSurface};
//! use tui_console_engine::{Application, Frame, GameLoop, SteppedClock, StopReason};
//! use tui_console_input::ScriptedInput;
//!
//! struct Headless;
//!
//! impl PresentationSurface for Headless {
//!     fn max_size(&self) -> (u16, u16) { (80, 30) }
//!     fn initialize(&mut self, _: u16, _: u16, _: CellSize) -> Result<(), ConfigError> { Ok(()) }
//!     fn present(&mut self, _: &FrameBuffer) -> anyhow::Result<()> { Ok(()) }
//!     fn set_status_line(&mut self, _: &str) -> anyhow::Result<()> { Ok(()) }
//! }
//!
//! struct Countdown(u32);
//!
//! impl Application for Countdown {
//!     fn on_create(&mut self, _: &mut FrameBuffer) -> bool { true }
//!     fn on_update(&mut self, _: &mut Frame<'_>, _: f64) -> bool {
//!         self.0 -= 1;
//!         self.0 > 0
//!     }
//! }
//!
//! let clock = SteppedClock::new(Duration::from_millis(16));
//! let mut game = GameLoop::with_clock(
//!     Countdown(3),
//!     Headless,
//!     ScriptedInput::default(),
//!     FrameBuffer::new(80, 30),
//!     clock,
//! );
//! let outcome = game.run();
//! assert_eq!(outcome.ticks, 3);
//! assert_eq!(outcome.reason, StopReason::UpdateReturnedFalse);
//! ```

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod runtime;
pub mod status;

pub use tui_console_core as core;
pub use tui_console_input as input;
pub use tui_console_types as types;

pub use app::{Application, Frame};
pub use clock::{Clock, SteppedClock, SystemClock};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use game_loop::{GameLoop, LoopOutcome, LoopState, StopReason};
pub use runtime::Engine;
pub use status::{format_status_line, StatusLine};
