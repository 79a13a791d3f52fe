//! Presentation surface contract.
//!
//! A surface is the physical display a [`FrameBuffer`] is flushed to. The
//! game loop only ever talks to this trait, so tests can substitute a
//! recording surface for the terminal.

use anyhow::Result;

use crate::error::ConfigError;
use crate::fb::FrameBuffer;

/// Glyph size in pixels.
///
/// Advisory for surfaces that cannot change their font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl CellSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub trait PresentationSurface {
    /// Largest grid (columns, rows) this surface can display.
    fn max_size(&self) -> (u16, u16);

    /// Prepare the display for a `width`x`height` grid.
    fn initialize(&mut self, width: u16, height: u16, cell: CellSize) -> Result<(), ConfigError>;

    /// Flush a complete frame.
    fn present(&mut self, screen: &FrameBuffer) -> Result<()>;

    /// Human-readable status, e.g. `"Demo - FPS: 61.23"`.
    fn set_status_line(&mut self, text: &str) -> Result<()>;

    /// Restore the display to its pre-initialization state.
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for Box<S> {
    fn max_size(&self) -> (u16, u16) {
        (**self).max_size()
    }

    fn initialize(&mut self, width: u16, height: u16, cell: CellSize) -> Result<(), ConfigError> {
        (**self).initialize(width, height, cell)
    }

    fn present(&mut self, screen: &FrameBuffer) -> Result<()> {
        (**self).present(screen)
    }

    fn set_status_line(&mut self, text: &str) -> Result<()> {
        (**self).set_status_line(text)
    }

    fn shutdown(&mut self) -> Result<()> {
        (**self).shutdown()
    }
}
