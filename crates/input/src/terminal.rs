//! Raw key state reconstructed from terminal key events.
//!
//! Terminals report key events, not key levels. `TerminalInput` keeps a
//! per-key "down since" table fed by those events and turns it into a
//! [`RawKeySnapshot`] on every poll.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use crate::map::{is_interrupt, virtual_key};
use crate::source::InputSource;
use crate::tracker::RawKeySnapshot;
use crate::types::{vk, StopHandle, KEY_COUNT};

// Without release events a key is held as long as press/repeat events keep
// arriving. Typical auto-repeat intervals are 30-50ms after a ~500ms initial
// delay, so a tap followed by a hold shows one short gap.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug)]
pub struct TerminalInput {
    down_since: [Option<Instant>; KEY_COUNT],
    key_release_timeout: Duration,
    release_events: bool,
    want_release_events: bool,
    stop: Option<StopHandle>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            down_since: [None; KEY_COUNT],
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS as u64),
            release_events: false,
            want_release_events: false,
            stop: None,
        }
    }

    /// Ctrl+C requests a stop through `stop`.
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms as u64);
        self
    }

    /// Try [`enable_release_events`](Self::enable_release_events) on the first
    /// poll, i.e. once the surface owns the screen.
    pub fn with_release_events(mut self) -> Self {
        self.want_release_events = true;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout.as_millis() as u32
    }

    /// Whether the terminal delivers real key release events.
    pub fn has_release_events(&self) -> bool {
        self.release_events
    }

    /// Ask the terminal to report press/repeat/release separately.
    ///
    /// Returns `false` (and keeps the timeout fallback) when the terminal does
    /// not support the keyboard enhancement protocol.
    pub fn enable_release_events(&mut self) -> Result<bool> {
        if !terminal::supports_keyboard_enhancement()? {
            tracing::debug!("keyboard enhancement unsupported; using key release timeout");
            return Ok(false);
        }
        execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
        self.release_events = true;
        tracing::debug!("keyboard enhancement enabled");
        Ok(true)
    }

    /// Undo [`enable_release_events`](Self::enable_release_events).
    pub fn restore(&mut self) -> Result<()> {
        if self.release_events {
            execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
            self.release_events = false;
        }
        Ok(())
    }

    /// Fold one terminal event into the key table.
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::FocusLost => self.down_since = [None; KEY_COUNT],
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Press && is_interrupt(*key) {
            if let Some(stop) = &self.stop {
                stop.request_stop();
            }
        }

        let down = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => Some(now),
            KeyEventKind::Release => None,
        };

        if let Some(code) = virtual_key(key.code) {
            self.down_since[code as usize] = down;
        }

        // Legacy terminals only report modifiers alongside another key.
        if !self.release_events && down.is_some() {
            for (flag, code) in [
                (KeyModifiers::SHIFT, vk::SHIFT),
                (KeyModifiers::CONTROL, vk::CONTROL),
                (KeyModifiers::ALT, vk::MENU),
            ] {
                if key.modifiers.contains(flag) {
                    self.down_since[code as usize] = down;
                }
            }
        }
    }

    /// Auto-release keys whose last press/repeat is older than the timeout.
    pub fn expire(&mut self, now: Instant) {
        if self.release_events {
            return;
        }
        for slot in self.down_since.iter_mut() {
            if let Some(since) = *slot {
                if now.saturating_duration_since(since) > self.key_release_timeout {
                    *slot = None;
                }
            }
        }
    }

    pub fn snapshot(&self) -> RawKeySnapshot {
        let mut snap = RawKeySnapshot::new();
        for (code, slot) in self.down_since.iter().enumerate() {
            if slot.is_some() {
                snap.set(code as u8, true);
            }
        }
        snap
    }

    fn drain_events(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle_event(&ev, Instant::now());
        }
        Ok(())
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll_raw_state(&mut self) -> RawKeySnapshot {
        if self.want_release_events {
            self.want_release_events = false;
            if let Err(err) = self.enable_release_events() {
                tracing::warn!(error = %err, "failed to enable key release events");
            }
        }
        if let Err(err) = self.drain_events() {
            tracing::warn!(error = %err, "failed to read terminal events");
        }
        self.expire(Instant::now());
        self.snapshot()
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
