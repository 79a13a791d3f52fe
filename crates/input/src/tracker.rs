//! Per-key edge detection.
//!
//! Each tick the tracker compares a fresh [`RawKeySnapshot`] with the previous
//! one and derives one-shot `pressed`/`released` flags plus a level `held`
//! flag for every key code.

use tui_console_types::{KeyCode, KEY_COUNT};

/// Raw "is this key physically down" readings for every key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeySnapshot {
    down: [bool; KEY_COUNT],
}

impl Default for RawKeySnapshot {
    fn default() -> Self {
        Self {
            down: [false; KEY_COUNT],
        }
    }
}

impl RawKeySnapshot {
    /// All keys up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly `codes` down.
    pub fn with_down(codes: &[KeyCode]) -> Self {
        let mut snap = Self::new();
        for &code in codes {
            snap.set(code, true);
        }
        snap
    }

    pub fn set(&mut self, code: KeyCode, down: bool) {
        self.down[code as usize] = down;
    }

    pub fn is_down(&self, code: KeyCode) -> bool {
        self.down[code as usize]
    }
}

/// Edge state of one key for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    /// True only on the tick the key went down.
    pub pressed: bool,
    /// True while the key is down, including the press tick.
    pub held: bool,
    /// True only on the tick the key came up.
    pub released: bool,
}

#[derive(Debug, Clone)]
pub struct InputTracker {
    keys: [KeyState; KEY_COUNT],
    previous: RawKeySnapshot,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            keys: [KeyState::default(); KEY_COUNT],
            previous: RawKeySnapshot::new(),
        }
    }

    /// Recompute every key's state from `raw`. Call exactly once per tick.
    pub fn refresh(&mut self, raw: &RawKeySnapshot) {
        for (i, key) in self.keys.iter_mut().enumerate() {
            let now = raw.down[i];
            key.pressed = false;
            key.released = false;

            if now != self.previous.down[i] {
                if now {
                    key.pressed = !key.held;
                    key.held = true;
                } else {
                    key.released = true;
                    key.held = false;
                }
            }
        }
        self.previous = *raw;
    }

    pub fn key(&self, code: KeyCode) -> KeyState {
        self.keys[code as usize]
    }

    pub fn keys(&self) -> &[KeyState; KEY_COUNT] {
        &self.keys
    }

    pub fn reset(&mut self) {
        self.keys = [KeyState::default(); KEY_COUNT];
        self.previous = RawKeySnapshot::new();
    }
}
