//! The game loop state machine.
//!
//! `Created -> Running -> Stopping -> Finished`, or straight from `Created`
//! to `Finished` when the application refuses to start. Each tick:
//!
//! 1. measure wall-clock time since the previous tick (the first tick is
//!    measured against loop entry)
//! 2. poll the input source and refresh key edge states
//! 3. call [`Application::on_update`]
//! 4. update the status line and present the screen
//!
//! The loop owns the screen, the key table and the input tracker outright;
//! nothing else can touch them while it runs. A stop requested through the
//! [`StopHandle`] is honoured at the next tick boundary, never mid-tick.

use std::time::Duration;

use tokio::sync::oneshot;

use crate::app::{Application, Frame};
use crate::clock::{Clock, SystemClock};
use crate::core::{FrameBuffer, PresentationSurface};
use crate::input::{InputSource, InputTracker};
use crate::status::{fps, format_status_line, StatusLine};
use crate::types::{StopHandle, DEFAULT_APP_NAME};

/// Ticks between debug heartbeats.
const HEARTBEAT_TICKS: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Created,
    Running,
    Stopping,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `on_create` returned false; no tick ran.
    CreateFailed,
    /// `on_update` returned false.
    UpdateReturnedFalse,
    /// The stop handle was set.
    StopRequested,
    /// The surface failed to show a frame.
    PresentFailed,
}

/// Completion report raised once when the loop reaches `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOutcome {
    /// Ticks run, equal to the number of frames presented.
    pub ticks: u64,
    pub reason: StopReason,
}

pub struct GameLoop<A, S, I, C = SystemClock> {
    app: A,
    surface: S,
    input: I,
    clock: C,
    screen: FrameBuffer,
    keys: InputTracker,
    app_name: String,
    status: StatusLine,
    stop: StopHandle,
    state: LoopState,
    ticks: u64,
    last: Duration,
    outcome: Option<LoopOutcome>,
}

impl<A, S, I> GameLoop<A, S, I, SystemClock>
where
    A: Application,
    S: PresentationSurface,
    I: InputSource,
{
    pub fn new(app: A, surface: S, input: I, screen: FrameBuffer) -> Self {
        Self::with_clock(app, surface, input, screen, SystemClock::new())
    }
}

impl<A, S, I, C> GameLoop<A, S, I, C>
where
    A: Application,
    S: PresentationSurface,
    I: InputSource,
    C: Clock,
{
    pub fn with_clock(app: A, surface: S, input: I, screen: FrameBuffer, clock: C) -> Self {
        Self {
            app,
            surface,
            input,
            clock,
            screen,
            keys: InputTracker::new(),
            app_name: DEFAULT_APP_NAME.to_string(),
            status: StatusLine::new(),
            stop: StopHandle::new(),
            state: LoopState::Created,
            ticks: 0,
            last: Duration::ZERO,
            outcome: None,
        }
    }

    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Share an existing stop flag, e.g. one an input source also holds.
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn outcome(&self) -> Option<LoopOutcome> {
        self.outcome
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn screen(&self) -> &FrameBuffer {
        &self.screen
    }

    pub fn keys(&self) -> &InputTracker {
        &self.keys
    }

    /// Run until the application or the stop handle ends the loop.
    ///
    /// A finished loop is never re-entered; calling this again returns the
    /// original outcome.
    pub fn run(&mut self) -> LoopOutcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        if !self.app.on_create(&mut self.screen) {
            tracing::warn!(app = %self.app_name, "on_create returned false; loop not started");
            return self.finish(StopReason::CreateFailed);
        }

        self.state = LoopState::Running;
        self.last = self.clock.now();
        tracing::info!(app = %self.app_name, "game loop running");

        let reason = loop {
            if self.stop.is_stop_requested() {
                break StopReason::StopRequested;
            }
            match self.tick() {
                Ok(true) => {}
                Ok(false) => break StopReason::UpdateReturnedFalse,
                Err(err) => {
                    tracing::error!(error = %err, tick = self.ticks + 1, "failed to present frame");
                    break StopReason::PresentFailed;
                }
            }
        };

        self.state = LoopState::Stopping;
        self.finish(reason)
    }

    /// Run to `Finished`, then raise the completion signal.
    ///
    /// Consuming the sender means the signal fires exactly once.
    pub fn run_to_completion(mut self, done: oneshot::Sender<LoopOutcome>) -> Self {
        let outcome = self.run();
        // The controller may have stopped waiting; the loop is done either way.
        let _ = done.send(outcome);
        self
    }

    pub fn into_parts(self) -> (A, S, I) {
        (self.app, self.surface, self.input)
    }

    fn tick(&mut self) -> anyhow::Result<bool> {
        let now = self.clock.now();
        let elapsed = now.saturating_sub(self.last).as_secs_f64();
        self.last = now;

        let raw = self.input.poll_raw_state();
        self.keys.refresh(&raw);

        let keep_running = {
            let mut frame = Frame {
                screen: &mut self.screen,
                keys: &self.keys,
            };
            self.app.on_update(&mut frame, elapsed)
        };

        format_status_line(&mut self.status, &self.app_name, elapsed);
        self.surface.set_status_line(&self.status)?;
        self.surface.present(&self.screen)?;
        self.ticks += 1;

        if self.ticks % HEARTBEAT_TICKS == 0 {
            tracing::debug!(ticks = self.ticks, fps = fps(elapsed), "game loop heartbeat");
        }

        Ok(keep_running)
    }

    fn finish(&mut self, reason: StopReason) -> LoopOutcome {
        self.state = LoopState::Finished;
        let outcome = LoopOutcome {
            ticks: self.ticks,
            reason,
        };
        self.outcome = Some(outcome);
        tracing::info!(app = %self.app_name, ticks = self.ticks, ?reason, "game loop finished");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SteppedClock;
    use crate::core::{CellSize, ConfigError};
    use crate::input::ScriptedInput;
    use crate::types::{Attribute, PIXEL_SOLID};

    #[derive(Default)]
    struct RecordingSurface {
        presents: usize,
        statuses: Vec<String>,
        fail_on_present: Option<usize>,
    }

    impl PresentationSurface for RecordingSurface {
        fn max_size(&self) -> (u16, u16) {
            (200, 100)
        }

        fn initialize(&mut self, _: u16, _: u16, _: CellSize) -> Result<(), ConfigError> {
            Ok(())
        }

        fn present(&mut self, _: &FrameBuffer) -> anyhow::Result<()> {
            self.presents += 1;
            if self.fail_on_present == Some(self.presents) {
                anyhow::bail!("surface gone");
            }
            Ok(())
        }

        fn set_status_line(&mut self, text: &str) -> anyhow::Result<()> {
            self.statuses.push(text.to_string());
            Ok(())
        }
    }

    /// Stops on update number `stop_at` (1-indexed); records what it saw.
    struct ScriptedApp {
        create_ok: bool,
        stop_at: Option<u64>,
        created: usize,
        updates: u64,
        elapsed: Vec<f64>,
        pressed: Vec<bool>,
    }

    impl ScriptedApp {
        fn stopping_at(n: u64) -> Self {
            Self {
                create_ok: true,
                stop_at: Some(n),
                created: 0,
                updates: 0,
                elapsed: Vec::new(),
                pressed: Vec::new(),
            }
        }
    }

    impl Application for ScriptedApp {
        fn on_create(&mut self, _: &mut FrameBuffer) -> bool {
            self.created += 1;
            self.create_ok
        }

        fn on_update(&mut self, frame: &mut Frame<'_>, elapsed_secs: f64) -> bool {
            self.updates += 1;
            self.elapsed.push(elapsed_secs);
            self.pressed.push(frame.key(b'A').pressed);
            frame
                .screen
                .set(self.updates as i32 - 1, 0, PIXEL_SOLID, Attribute::default());
            self.stop_at != Some(self.updates)
        }
    }

    fn game(
        app: ScriptedApp,
        input: ScriptedInput,
    ) -> GameLoop<ScriptedApp, RecordingSurface, ScriptedInput, SteppedClock> {
        GameLoop::with_clock(
            app,
            RecordingSurface::default(),
            input,
            FrameBuffer::new(16, 4),
            SteppedClock::new(Duration::from_millis(20)),
        )
        .with_app_name("Test")
    }

    #[test]
    fn update_false_on_tick_n_presents_exactly_n_frames() {
        for n in 1..=5 {
            let mut g = game(ScriptedApp::stopping_at(n), ScriptedInput::default());
            let outcome = g.run();
            assert_eq!(
                outcome,
                LoopOutcome {
                    ticks: n,
                    reason: StopReason::UpdateReturnedFalse
                }
            );
            assert_eq!(g.surface().presents as u64, n);
            assert_eq!(g.app().updates, n);
            assert_eq!(g.state(), LoopState::Finished);
        }
    }

    #[test]
    fn create_failure_runs_no_ticks() {
        let mut app = ScriptedApp::stopping_at(1);
        app.create_ok = false;
        let mut g = game(app, ScriptedInput::default());

        let outcome = g.run();
        assert_eq!(outcome.reason, StopReason::CreateFailed);
        assert_eq!(outcome.ticks, 0);
        assert_eq!(g.app().updates, 0);
        assert_eq!(g.surface().presents, 0);
        assert_eq!(g.input().polls(), 0);
        assert_eq!(g.state(), LoopState::Finished);
    }

    #[test]
    fn finished_loop_is_not_reentered() {
        let mut g = game(ScriptedApp::stopping_at(2), ScriptedInput::default());
        let first = g.run();
        let second = g.run();
        assert_eq!(first, second);
        assert_eq!(g.app().created, 1);
        assert_eq!(g.app().updates, 2);
    }

    #[test]
    fn elapsed_time_is_measured_between_ticks() {
        let mut g = game(ScriptedApp::stopping_at(3), ScriptedInput::default());
        g.run();
        // Entry reading at 0ms, then 20ms per tick.
        for secs in &g.app().elapsed {
            assert!((secs - 0.02).abs() < 1e-9, "{secs}");
        }
        assert_eq!(g.surface().statuses, vec!["Test - FPS: 50.00"; 3]);
    }

    #[test]
    fn input_is_refreshed_before_each_update() {
        let input = ScriptedInput::key_sequence(b'A', &[false, true, true, false, true]);
        let mut g = game(ScriptedApp::stopping_at(5), input);
        g.run();
        assert_eq!(g.app().pressed, vec![false, true, false, false, true]);
        assert_eq!(g.input().polls(), 5);
    }

    #[test]
    fn update_draws_into_loop_owned_screen() {
        let mut g = game(ScriptedApp::stopping_at(3), ScriptedInput::default());
        g.run();
        for x in 0..3 {
            assert_eq!(g.screen().get(x, 0).unwrap().glyph, PIXEL_SOLID);
        }
    }

    #[test]
    fn stop_request_is_honoured_at_tick_boundary() {
        let mut g = game(ScriptedApp::stopping_at(u64::MAX), ScriptedInput::default());
        g.stop_handle().request_stop();
        let outcome = g.run();
        assert_eq!(
            outcome,
            LoopOutcome {
                ticks: 0,
                reason: StopReason::StopRequested
            }
        );
        // on_create still ran; the stop is only checked between ticks.
        assert_eq!(g.app().created, 1);
    }

    #[test]
    fn present_failure_stops_the_loop() {
        let mut g = game(ScriptedApp::stopping_at(u64::MAX), ScriptedInput::default());
        g.surface_mut().fail_on_present = Some(3);
        let outcome = g.run();
        assert_eq!(outcome.reason, StopReason::PresentFailed);
        assert_eq!(outcome.ticks, 2);
        assert_eq!(g.surface().presents, 3);
    }

    #[test]
    fn completion_signal_fires_once_with_outcome() {
        let (tx, mut rx) = oneshot::channel();
        let g = game(ScriptedApp::stopping_at(4), ScriptedInput::default());
        let g = g.run_to_completion(tx);

        assert_eq!(
            rx.try_recv().unwrap(),
            LoopOutcome {
                ticks: 4,
                reason: StopReason::UpdateReturnedFalse
            }
        );
        // The sender is gone: no second signal can ever arrive.
        assert!(rx.try_recv().is_err());
        assert_eq!(g.surface().presents, 4);
    }

    #[test]
    fn completion_signal_fires_when_create_fails() {
        let mut app = ScriptedApp::stopping_at(1);
        app.create_ok = false;
        let (tx, mut rx) = oneshot::channel();
        let _ = game(app, ScriptedInput::default()).run_to_completion(tx);
        assert_eq!(rx.try_recv().unwrap().reason, StopReason::CreateFailed);
        assert!(rx.try_recv().is_err());
    }
}
