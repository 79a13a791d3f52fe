//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the framework.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (buffer model, rasterizer, input tracking, presentation).
//!
//! # Screen Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SCREEN_WIDTH` | 80 | Grid width in cells |
//! | `DEFAULT_SCREEN_HEIGHT` | 30 | Grid height in cells |
//! | `DEFAULT_CELL_PIXELS` | 12 | Glyph width/height in pixels |
//! | `KEY_COUNT` | 256 | Number of tracked key codes |
//!
//! # Palette
//!
//! Colors follow the classic 16-entry console palette. An [`Attribute`] packs a
//! foreground (low nibble) and background (high nibble) into one byte:
//!
//! ```
//! use tui_console_types::{Attribute, Color};
//!
//! let attr = Attribute::new(Color::Yellow, Color::DarkBlue);
//! assert_eq!(attr.bits(), 0x1E);
//! assert_eq!(Attribute::from_bits(0x1E), attr);
//!
//! // White on black is the default draw attribute.
//! assert_eq!(Attribute::default().bits(), 0x0F);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Default grid width in cells.
pub const DEFAULT_SCREEN_WIDTH: u16 = 80;

/// Default grid height in cells.
pub const DEFAULT_SCREEN_HEIGHT: u16 = 30;

/// Default glyph size in pixels (both axes).
pub const DEFAULT_CELL_PIXELS: u16 = 12;

/// Application name used in the status line when none is configured.
pub const DEFAULT_APP_NAME: &str = "Default";

/// Number of key codes covered by a raw key snapshot (0-255).
pub const KEY_COUNT: usize = 256;

/// Full block. The default glyph for point drawing.
pub const PIXEL_SOLID: char = '\u{2588}';

/// Dark shade.
pub const PIXEL_THREEQUARTERS: char = '\u{2593}';

/// Medium shade.
pub const PIXEL_HALF: char = '\u{2592}';

/// Light shade.
pub const PIXEL_QUARTER: char = '\u{2591}';

/// A virtual key code. Every `u8` is a valid index into a key table.
pub type KeyCode = u8;

/// Named virtual key codes.
///
/// Letters use their upper-case ASCII value and digits their ASCII value,
/// so `b'A'` and `b'7'` are valid key codes as well.
pub mod vk {
    use super::KeyCode;

    pub const BACK: KeyCode = 0x08;
    pub const TAB: KeyCode = 0x09;
    pub const RETURN: KeyCode = 0x0D;
    pub const SHIFT: KeyCode = 0x10;
    pub const CONTROL: KeyCode = 0x11;
    pub const MENU: KeyCode = 0x12;
    pub const ESCAPE: KeyCode = 0x1B;
    pub const SPACE: KeyCode = 0x20;
    pub const PRIOR: KeyCode = 0x21;
    pub const NEXT: KeyCode = 0x22;
    pub const END: KeyCode = 0x23;
    pub const HOME: KeyCode = 0x24;
    pub const LEFT: KeyCode = 0x25;
    pub const UP: KeyCode = 0x26;
    pub const RIGHT: KeyCode = 0x27;
    pub const DOWN: KeyCode = 0x28;
    pub const INSERT: KeyCode = 0x2D;
    pub const DELETE: KeyCode = 0x2E;
    pub const F1: KeyCode = 0x70;
    pub const F12: KeyCode = 0x7B;
}

/// The 16-entry console palette.
///
/// Discriminants are the palette indices used in packed attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0x0,
    DarkBlue = 0x1,
    DarkGreen = 0x2,
    DarkCyan = 0x3,
    DarkRed = 0x4,
    DarkMagenta = 0x5,
    DarkYellow = 0x6,
    Grey = 0x7,
    DarkGrey = 0x8,
    Blue = 0x9,
    Green = 0xA,
    Cyan = 0xB,
    Red = 0xC,
    Magenta = 0xD,
    Yellow = 0xE,
    White = 0xF,
}

impl Color {
    /// All palette entries in index order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkRed,
        Color::DarkMagenta,
        Color::DarkYellow,
        Color::Grey,
        Color::DarkGrey,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// Palette entry for the low four bits of `index`.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index & 0x0F) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Foreground/background color pair of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub fg: Color,
    pub bg: Color,
}

impl Attribute {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// Foreground on black.
    pub const fn fg(fg: Color) -> Self {
        Self::new(fg, Color::Black)
    }

    /// Unpack a console attribute byte (fg in the low nibble, bg in the high
    /// nibble). Bits above 0xFF are ignored.
    pub const fn from_bits(bits: u16) -> Self {
        Self {
            fg: Color::from_index((bits & 0x0F) as u8),
            bg: Color::from_index(((bits >> 4) & 0x0F) as u8),
        }
    }

    pub const fn bits(self) -> u16 {
        (self.fg.index() as u16) | ((self.bg.index() as u16) << 4)
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self::new(Color::White, Color::Black)
    }
}

/// Cooperative "stop requested" flag shared between the controller and the
/// loop context.
///
/// Clones observe the same flag. The loop checks it once per tick boundary.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    requested: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.requested.store(true, Ordering::Release);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}
