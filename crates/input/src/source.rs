//! Raw key state sources.

use std::collections::VecDeque;

use tui_console_types::KeyCode;

use crate::tracker::RawKeySnapshot;

/// Anything that can report which keys are physically down right now.
///
/// Polled once per tick; implementations must not block.
pub trait InputSource {
    fn poll_raw_state(&mut self) -> RawKeySnapshot;
}

impl<I: InputSource + ?Sized> InputSource for Box<I> {
    fn poll_raw_state(&mut self) -> RawKeySnapshot {
        (**self).poll_raw_state()
    }
}

/// Replays a fixed sequence of snapshots, then reports every key up.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<RawKeySnapshot>,
    polls: usize,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = RawKeySnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            polls: 0,
        }
    }

    /// One snapshot per entry of `downs`, with only `code` varying.
    pub fn key_sequence(code: KeyCode, downs: &[bool]) -> Self {
        Self::new(downs.iter().map(|&down| {
            let mut snap = RawKeySnapshot::new();
            snap.set(code, down);
            snap
        }))
    }

    /// Number of times the source has been polled.
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl InputSource for ScriptedInput {
    fn poll_raw_state(&mut self) -> RawKeySnapshot {
        self.polls += 1;
        self.frames.pop_front().unwrap_or_default()
    }
}
