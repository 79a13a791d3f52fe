//! Line rasterization.
//!
//! Integer Bresenham: the axis with the larger delta drives, advancing one
//! cell per step, and the other axis moves by one whenever the error term
//! crosses zero. Iteration always starts from the endpoint with the smaller
//! driving coordinate, so swapping the endpoints yields the same cells.

use tui_console_types::Attribute;

use crate::fb::FrameBuffer;

/// Iterator over the cells of a line segment, endpoints included.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    end: i64,
    err: i64,
    dx: i64,
    dy: i64,
    // Minor-axis direction.
    step: i64,
    x_major: bool,
    started: bool,
}

impl LinePoints {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
        let dx = x2 - x1;
        let dy = y2 - y1;
        let adx = dx.abs();
        let ady = dy.abs();
        let step = if (dx < 0 && dy < 0) || (dx > 0 && dy > 0) {
            1
        } else {
            -1
        };

        if ady <= adx {
            let (x, y, end) = if dx >= 0 { (x1, y1, x2) } else { (x2, y2, x1) };
            Self {
                x,
                y,
                end,
                err: 2 * ady - adx,
                dx: adx,
                dy: ady,
                step,
                x_major: true,
                started: false,
            }
        } else {
            let (x, y, end) = if dy >= 0 { (x1, y1, y2) } else { (x2, y2, y1) };
            Self {
                x,
                y,
                end,
                err: 2 * adx - ady,
                dx: adx,
                dy: ady,
                step,
                x_major: false,
                started: false,
            }
        }
    }

    fn remaining(&self) -> usize {
        let driving = if self.x_major { self.x } else { self.y };
        let left = (self.end - driving).max(0) as usize;
        if self.started {
            left
        } else {
            left + 1
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some((self.x as i32, self.y as i32));
        }

        if self.x_major {
            if self.x >= self.end {
                return None;
            }
            self.x += 1;
            if self.err < 0 {
                self.err += 2 * self.dy;
            } else {
                self.y += self.step;
                self.err += 2 * (self.dy - self.dx);
            }
        } else {
            if self.y >= self.end {
                return None;
            }
            self.y += 1;
            if self.err <= 0 {
                self.err += 2 * self.dx;
            } else {
                self.x += self.step;
                self.err += 2 * (self.dx - self.dy);
            }
        }

        Some((self.x as i32, self.y as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

impl FrameBuffer {
    /// Rasterize a line between two endpoints (inclusive).
    ///
    /// Cells falling outside the buffer are dropped individually.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, glyph: char, attr: Attribute) {
        for (x, y) in LinePoints::new(x1, y1, x2, y2) {
            self.set(x, y, glyph, attr);
        }
    }
}
