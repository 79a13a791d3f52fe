//! Startup configuration errors.

use thiserror::Error;

/// Reasons a screen cannot be constructed or a surface cannot be initialized.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Width or height of zero
    #[error("screen dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u16, height: u16 },

    /// Requested width exceeds what the surface can display
    #[error("screen width too big: requested {requested}, maximum {max}")]
    WidthTooLarge { requested: u16, max: u16 },

    /// Requested height exceeds what the surface can display
    #[error("screen height too big: requested {requested}, maximum {max}")]
    HeightTooLarge { requested: u16, max: u16 },

    /// The surface cannot honour the requested glyph size
    #[error("unsupported cell size {width}x{height} pixels")]
    UnsupportedCellSize { width: u16, height: u16 },

    /// The underlying display refused to initialize
    #[error("display initialization failed: {0}")]
    Display(#[from] std::io::Error),
}

impl ConfigError {
    /// Check `width`x`height` against a surface maximum.
    pub fn check_dimensions(width: u16, height: u16, max: (u16, u16)) -> Result<(), Self> {
        if width == 0 || height == 0 {
            return Err(Self::ZeroDimension { width, height });
        }
        let (max_w, max_h) = max;
        if height > max_h {
            return Err(Self::HeightTooLarge {
                requested: height,
                max: max_h,
            });
        }
        if width > max_w {
            return Err(Self::WidthTooLarge {
                requested: width,
                max: max_w,
            });
        }
        Ok(())
    }
}
