//! Engine configuration.

use crate::core::CellSize;
use crate::types::{
    DEFAULT_APP_NAME, DEFAULT_CELL_PIXELS, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH,
};

/// Startup parameters supplied by the host program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Grid width in cells.
    pub width: u16,
    /// Grid height in cells.
    pub height: u16,
    /// Glyph width in pixels.
    pub cell_width: u16,
    /// Glyph height in pixels.
    pub cell_height: u16,
    /// Shown in the status line.
    pub app_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
            cell_width: DEFAULT_CELL_PIXELS,
            cell_height: DEFAULT_CELL_PIXELS,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_cell_size(mut self, width: u16, height: u16) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    pub fn cell_size(&self) -> CellSize {
        CellSize::new(self.cell_width, self.cell_height)
    }

    /// Read configuration from `TUI_CONSOLE_*` environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let num = |key: &str, default: u16| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        let app_name = lookup("TUI_CONSOLE_APP_NAME")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .unwrap_or(defaults.app_name);

        Self {
            width: num("TUI_CONSOLE_WIDTH", defaults.width),
            height: num("TUI_CONSOLE_HEIGHT", defaults.height),
            cell_width: num("TUI_CONSOLE_CELL_WIDTH", defaults.cell_width),
            cell_height: num("TUI_CONSOLE_CELL_HEIGHT", defaults.cell_height),
            app_name,
        }
    }
}
