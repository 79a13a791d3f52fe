//! Framebuffer and cell types.

use tui_console_types::{Attribute, Color, PIXEL_SOLID};

use crate::error::ConfigError;

/// A single screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub attr: Attribute,
}

impl Cell {
    /// Space on black. Fresh and cleared buffers hold this.
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        attr: Attribute::new(Color::White, Color::Black),
    };

    pub const fn new(glyph: char, attr: Attribute) -> Self {
        Self { glyph, attr }
    }
}

impl Default for Cell {
    /// Solid white block on black, the default "pixel".
    fn default() -> Self {
        Self {
            glyph: PIXEL_SOLID,
            attr: Attribute::default(),
        }
    }
}

/// 2D row-major grid of colored character cells.
///
/// Coordinates are signed so callers can pass off-screen positions; any write
/// outside `[0, width) x [0, height)` is a no-op.
#[derive(Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Clone for FrameBuffer {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    // Surfaces keep a copy of the last frame; reuse its storage.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.cells.clone_from(&source.cells);
    }
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
        }
    }

    /// Create a buffer that a surface reporting `max` as its largest
    /// displayable size can show.
    pub fn create(width: u16, height: u16, max: (u16, u16)) -> Result<Self, ConfigError> {
        ConfigError::check_dimensions(width, height, max)?;
        Ok(Self::new(width, height))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one cell. Out-of-bounds positions are ignored.
    pub fn set(&mut self, x: i32, y: i32, glyph: char, attr: Attribute) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { glyph, attr };
        }
    }

    /// Plot the default solid white block.
    pub fn draw(&mut self, x: i32, y: i32) {
        let cell = Cell::default();
        self.set(x, y, cell.glyph, cell.attr);
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fill the half-open rectangle spanned by the two corners.
    ///
    /// Corners may be given in any order. Both are clamped into
    /// `[0, width] x [0, height]` first, so the exclusive edge can reach the
    /// buffer edge but never past it.
    pub fn fill(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, glyph: char, attr: Attribute) {
        let (x1, y1) = self.clamp(x1, y1);
        let (x2, y2) = self.clamp(x2, y2);
        for y in y1.min(y2)..y1.max(y2) {
            for x in x1.min(x2)..x1.max(x2) {
                self.set(x, y, glyph, attr);
            }
        }
    }

    fn clamp(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.clamp(0, self.width as i32),
            y.clamp(0, self.height as i32),
        )
    }

    /// Write `text` left to right from `(x, y)`, one glyph per column.
    ///
    /// Columns left of the buffer are skipped; drawing stops at the right edge.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, attr: Attribute) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let mut cx = x;
        for glyph in text.chars() {
            if cx >= self.width as i32 {
                break;
            }
            self.set(cx, y, glyph, attr);
            cx += 1;
        }
    }
}
