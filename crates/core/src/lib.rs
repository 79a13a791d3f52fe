//! Screen buffer and rasterization core - pure, deterministic, and testable
//!
//! This crate owns the in-memory grid of colored character cells and the
//! primitive drawing operations on it. It performs no I/O: physical display is
//! delegated to a [`PresentationSurface`] implementation.
//!
//! # Module Structure
//!
//! - [`fb`]: `Cell` and `FrameBuffer` (point, fill, text)
//! - [`raster`]: Bresenham line rasterization
//! - [`surface`]: the presentation surface contract
//! - [`error`]: configuration errors raised at startup
//!
//! # Clipping
//!
//! Every write whose column or row falls outside `[0, width) x [0, height)` is
//! silently dropped. Primitives may therefore be called with off-screen
//! coordinates.
//!
//! # Example
//!
//! ```
//! use tui_console_core::FrameBuffer;
//! use tui_console_types::{Attribute, Color, PIXEL_SOLID};
//!
//! let mut fb = FrameBuffer::new(8, 4);
//! let red = Attribute::fg(Color::Red);
//!
//! fb.fill(0, 0, 8, 1, '-', red);
//! fb.draw_line(0, 3, 7, 3, PIXEL_SOLID, red);
//! fb.draw_text(1, 2, "hi", Attribute::default());
//! fb.set(-1, 0, 'x', red); // clipped
//!
//! assert_eq!(fb.get(2, 2).unwrap().glyph, 'i');
//! assert_eq!(fb.get(7, 3).unwrap().glyph, PIXEL_SOLID);
//! ```

pub mod error;
pub mod fb;
pub mod raster;
pub mod surface;

pub use tui_console_types as types;

pub use error::ConfigError;
pub use fb::{Cell, FrameBuffer};
pub use raster::LinePoints;
pub use surface::{CellSize, PresentationSurface};
