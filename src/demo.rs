//! Demo application: a rotating line pair, a movable block and a key read-out.

use tui_console::core::{Cell, FrameBuffer};
use tui_console::engine::{Application, Frame};
use tui_console::types::{vk, Attribute, Color, PIXEL_HALF, PIXEL_SOLID};

/// Cells per second for the arrow-key block.
const BLOCK_SPEED: f64 = 20.0;

/// Radians per second for the spinning line.
const SPIN_SPEED: f64 = 1.5;

pub struct Demo {
    angle: f64,
    block_x: f64,
    block_y: f64,
    paused: bool,
    presses: u32,
}

impl Demo {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            block_x: 2.0,
            block_y: 2.0,
            paused: false,
            presses: 0,
        }
    }
}

impl Application for Demo {
    fn on_create(&mut self, screen: &mut FrameBuffer) -> bool {
        screen.clear(Cell::BLANK);
        self.block_x = screen.width() as f64 / 4.0;
        self.block_y = screen.height() as f64 / 2.0;
        true
    }

    fn on_update(&mut self, frame: &mut Frame<'_>, elapsed_secs: f64) -> bool {
        if frame.key(vk::ESCAPE).pressed || frame.key(b'Q').pressed {
            return false;
        }
        if frame.key(vk::SPACE).pressed {
            self.paused = !self.paused;
            self.presses += 1;
        }

        if !self.paused {
            self.angle += SPIN_SPEED * elapsed_secs;
        }

        let step = BLOCK_SPEED * elapsed_secs;
        if frame.key(vk::LEFT).held {
            self.block_x -= step;
        }
        if frame.key(vk::RIGHT).held {
            self.block_x += step;
        }
        if frame.key(vk::UP).held {
            self.block_y -= step;
        }
        if frame.key(vk::DOWN).held {
            self.block_y += step;
        }

        let (w, h) = (frame.width(), frame.height());
        self.block_x = self.block_x.clamp(0.0, (w - 3).max(0) as f64);
        self.block_y = self.block_y.clamp(1.0, (h - 2).max(1) as f64);

        let screen = &mut *frame.screen;
        screen.clear(Cell::BLANK);

        // Border.
        let border = Attribute::fg(Color::DarkGrey);
        screen.draw_line(0, 0, w - 1, 0, PIXEL_HALF, border);
        screen.draw_line(0, h - 1, w - 1, h - 1, PIXEL_HALF, border);
        screen.draw_line(0, 0, 0, h - 1, PIXEL_HALF, border);
        screen.draw_line(w - 1, 0, w - 1, h - 1, PIXEL_HALF, border);

        // Spinning line through the centre, long enough to clip at the edges.
        let (cx, cy) = (w as f64 / 2.0, h as f64 / 2.0);
        let r = w.max(h) as f64;
        let (dx, dy) = (self.angle.cos() * r, self.angle.sin() * r * 0.5);
        screen.draw_line(
            (cx - dx).round() as i32,
            (cy - dy).round() as i32,
            (cx + dx).round() as i32,
            (cy + dy).round() as i32,
            PIXEL_SOLID,
            Attribute::fg(Color::Cyan),
        );

        let bx = self.block_x.round() as i32;
        let by = self.block_y.round() as i32;
        screen.fill(bx, by, bx + 3, by + 2, PIXEL_SOLID, Attribute::fg(Color::Yellow));

        screen.draw_text(2, 1, "arrows: move  space: pause  esc/q: quit", Attribute::default());
        let state = if self.paused { "paused" } else { "running" };
        screen.draw_text(2, 2, state, Attribute::fg(Color::Green));
        screen.draw_text(
            10,
            2,
            &format!("({} toggles)", self.presses),
            Attribute::fg(Color::DarkGreen),
        );
        screen.draw_text(
            2,
            h - 2,
            if frame.keys.key(vk::SPACE).held { "SPACE" } else { "     " },
            Attribute::new(Color::Black, Color::Grey),
        );

        true
    }
}
