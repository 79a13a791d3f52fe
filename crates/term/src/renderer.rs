//! TerminalSurface: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a size change) is a full redraw;
//! later frames only emit the runs of cells that changed since the previous
//! present.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute as TextAttribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::{CellSize, ConfigError, FrameBuffer, PresentationSurface};
use crate::types::{Attribute, Color as Palette};

/// Fallback when the terminal size cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalSurface<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    entered: bool,
    cell: Option<CellSize>,
}

impl TerminalSurface<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalSurface<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            entered: false,
            cell: None,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Glyph size requested at initialization, if any.
    pub fn cell_size(&self) -> Option<CellSize> {
        self.cell
    }

    fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    fn exit(&mut self) -> io::Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(TextAttribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.entered = false;
        Ok(())
    }

    /// Force the next present to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()
    }
}

impl<W: Write> PresentationSurface for TerminalSurface<W> {
    fn max_size(&self) -> (u16, u16) {
        terminal::size().unwrap_or(FALLBACK_SIZE)
    }

    fn initialize(&mut self, width: u16, height: u16, cell: CellSize) -> Result<(), ConfigError> {
        if cell.width == 0 || cell.height == 0 {
            return Err(ConfigError::UnsupportedCellSize {
                width: cell.width,
                height: cell.height,
            });
        }
        ConfigError::check_dimensions(width, height, self.max_size())?;

        self.cell = Some(cell);
        self.last = None;
        self.enter()?;
        tracing::debug!(
            width,
            height,
            cell_w = cell.width,
            cell_h = cell.height,
            "terminal surface initialized"
        );
        Ok(())
    }

    fn present(&mut self, screen: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == screen.width() && prev.height() == screen.height() => {
                encode_diff_into(prev, screen, &mut self.buf)?;
            }
            _ => encode_full_into(screen, &mut self.buf)?,
        }
        self.flush_buf()?;

        // Keep a copy for the next diff; reuses the allocation after the first frame.
        match &mut self.last {
            Some(prev) => prev.clone_from(screen),
            None => self.last = Some(screen.clone()),
        }
        Ok(())
    }

    fn set_status_line(&mut self, text: &str) -> Result<()> {
        self.out.queue(terminal::SetTitle(text))?;
        self.out.flush()?;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.entered {
            self.exit()?;
            tracing::debug!("terminal surface restored");
        }
        Ok(())
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        if self.entered {
            let _ = self.exit();
        }
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Attribute> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x as i32, y as i32).unwrap_or_default();
            if current != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current = Some(cell.attr);
            }
            out.queue(Print(cell.glyph))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Attribute> = None;
    let mut any = false;

    for_each_changed_run(prev, next, |x, y, len| {
        any = true;
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get((x + dx) as i32, y as i32).unwrap_or_default();
            if current != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current = Some(cell.attr);
            }
            out.queue(Print(cell.glyph))?;
        }
        Ok(())
    })?;

    if any {
        out.queue(ResetColor)?;
    }
    Ok(())
}

fn apply_attr_into(out: &mut Vec<u8>, attr: Attribute) -> Result<()> {
    out.queue(SetForegroundColor(palette_to_color(attr.fg)))?;
    out.queue(SetBackgroundColor(palette_to_color(attr.bg)))?;
    Ok(())
}

fn palette_to_color(c: Palette) -> Color {
    match c {
        Palette::Black => Color::Black,
        Palette::DarkBlue => Color::DarkBlue,
        Palette::DarkGreen => Color::DarkGreen,
        Palette::DarkCyan => Color::DarkCyan,
        Palette::DarkRed => Color::DarkRed,
        Palette::DarkMagenta => Color::DarkMagenta,
        Palette::DarkYellow => Color::DarkYellow,
        Palette::Grey => Color::Grey,
        Palette::DarkGrey => Color::DarkGrey,
        Palette::Blue => Color::Blue,
        Palette::Green => Color::Green,
        Palette::Cyan => Color::Cyan,
        Palette::Red => Color::Red,
        Palette::Magenta => Color::Magenta,
        Palette::Yellow => Color::Yellow,
        Palette::White => Color::White,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width() as usize;
    let a = prev.cells();
    let b = next.cells();

    for (y, (row_a, row_b)) in a.chunks(w.max(1)).zip(b.chunks(w.max(1))).enumerate() {
        let mut x = 0;
        while x < w {
            if row_a[x] == row_b[x] {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && row_a[x] != row_b[x] {
                x += 1;
            }
            f(start as u16, y as u16, (x - start) as u16)?;
        }
    }

    Ok(())
}
