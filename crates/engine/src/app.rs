//! The application contract.

use crate::core::FrameBuffer;
use crate::input::{InputTracker, KeyState};
use crate::types::KeyCode;

/// Loop-owned state lent to [`Application::on_update`] for one tick.
pub struct Frame<'a> {
    pub screen: &'a mut FrameBuffer,
    pub keys: &'a InputTracker,
}

impl Frame<'_> {
    pub fn key(&self, code: KeyCode) -> KeyState {
        self.keys.key(code)
    }

    pub fn width(&self) -> i32 {
        self.screen.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.screen.height() as i32
    }
}

/// The two callbacks a host program supplies to the game loop.
///
/// Both run on the loop context. Returning `false` ends the run: from
/// `on_create` before any tick, from `on_update` after the current tick has
/// been presented.
pub trait Application {
    /// Called once before the first tick.
    fn on_create(&mut self, screen: &mut FrameBuffer) -> bool;

    /// Called once per tick with the wall-clock seconds since the previous
    /// tick. Scale any simulation by `elapsed_secs`; there is no fixed step.
    fn on_update(&mut self, frame: &mut Frame<'_>, elapsed_secs: f64) -> bool;
}

impl<A: Application + ?Sized> Application for Box<A> {
    fn on_create(&mut self, screen: &mut FrameBuffer) -> bool {
        (**self).on_create(screen)
    }

    fn on_update(&mut self, frame: &mut Frame<'_>, elapsed_secs: f64) -> bool {
        (**self).on_update(frame, elapsed_secs)
    }
}
