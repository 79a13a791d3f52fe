use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tui_console::core::{CellSize, ConfigError, FrameBuffer, PresentationSurface};
use tui_console::engine::{Application, Engine, EngineConfig, EngineError, Frame, StopReason};
use tui_console::input::ScriptedInput;
use tui_console::types::{vk, Attribute, Color};

/// Counters shared with the test after the surface moves into the loop.
#[derive(Clone, Default)]
struct Probe {
    initialized: Arc<AtomicUsize>,
    presents: Arc<AtomicUsize>,
    shutdowns: Arc<AtomicUsize>,
    last_status: Arc<Mutex<String>>,
}

struct ProbeSurface {
    probe: Probe,
    max: (u16, u16),
}

impl ProbeSurface {
    fn new(probe: &Probe) -> Self {
        Self {
            probe: probe.clone(),
            max: (120, 50),
        }
    }
}

impl PresentationSurface for ProbeSurface {
    fn max_size(&self) -> (u16, u16) {
        self.max
    }

    fn initialize(&mut self, _: u16, _: u16, cell: CellSize) -> Result<(), ConfigError> {
        if cell.width == 0 || cell.height == 0 {
            return Err(ConfigError::UnsupportedCellSize {
                width: cell.width,
                height: cell.height,
            });
        }
        self.probe.initialized.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn present(&mut self, screen: &FrameBuffer) -> anyhow::Result<()> {
        assert_eq!((screen.width(), screen.height()), (40, 12));
        self.probe.presents.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn set_status_line(&mut self, text: &str) -> anyhow::Result<()> {
        *self.probe.last_status.lock().unwrap() = text.to_string();
        Ok(())
    }

    fn shutdown(&mut self) -> anyhow::Result<()> {
        self.probe.shutdowns.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Draws a moving dot and quits on Escape or after `limit` ticks.
struct Walker {
    create_ok: bool,
    limit: Option<u64>,
    ticks: u64,
}

impl Walker {
    fn ticks(limit: u64) -> Self {
        Self {
            create_ok: true,
            limit: Some(limit),
            ticks: 0,
        }
    }

    fn forever() -> Self {
        Self {
            create_ok: true,
            limit: None,
            ticks: 0,
        }
    }
}

impl Application for Walker {
    fn on_create(&mut self, screen: &mut FrameBuffer) -> bool {
        screen.fill(0, 0, 40, 1, '=', Attribute::fg(Color::Blue));
        self.create_ok
    }

    fn on_update(&mut self, frame: &mut Frame<'_>, elapsed_secs: f64) -> bool {
        assert!(elapsed_secs >= 0.0);
        self.ticks += 1;
        let x = (self.ticks % frame.width() as u64) as i32;
        frame.screen.draw(x, 5);
        if frame.key(vk::ESCAPE).pressed {
            return false;
        }
        self.limit.map_or(true, |n| self.ticks < n)
    }
}

fn config() -> EngineConfig {
    EngineConfig::new(40, 12).with_app_name("Walker")
}

#[test]
fn start_blocks_until_the_application_quits() {
    let probe = Probe::default();
    let engine = Engine::construct(
        &config(),
        Walker::ticks(10),
        ProbeSurface::new(&probe),
        ScriptedInput::default(),
    )
    .unwrap();

    let outcome = engine.start().unwrap();
    assert_eq!(outcome.ticks, 10);
    assert_eq!(outcome.reason, StopReason::UpdateReturnedFalse);
    assert_eq!(probe.initialized.load(Ordering::SeqCst), 1);
    assert_eq!(probe.presents.load(Ordering::SeqCst), 10);
    assert_eq!(probe.shutdowns.load(Ordering::SeqCst), 1);
    assert!(probe.last_status.lock().unwrap().starts_with("Walker - FPS: "));
}

#[test]
fn escape_key_ends_the_run() {
    let probe = Probe::default();
    let input = ScriptedInput::key_sequence(vk::ESCAPE, &[false, false, true]);
    let engine = Engine::construct(&config(), Walker::forever(), ProbeSurface::new(&probe), input)
        .unwrap();

    let outcome = engine.start().unwrap();
    assert_eq!(outcome.ticks, 3);
    assert_eq!(probe.presents.load(Ordering::SeqCst), 3);
}

#[test]
fn oversized_screen_is_rejected_before_start() {
    let probe = Probe::default();
    let result = Engine::construct(
        &EngineConfig::new(121, 12),
        Walker::ticks(1),
        ProbeSurface::new(&probe),
        ScriptedInput::default(),
    );

    assert!(matches!(
        result,
        Err(EngineError::Config(ConfigError::WidthTooLarge { requested: 121, max: 120 }))
    ));
    assert_eq!(probe.initialized.load(Ordering::SeqCst), 0);
}

#[test]
fn surface_refusal_is_a_config_error() {
    let probe = Probe::default();
    let result = Engine::construct(
        &config().with_cell_size(0, 8),
        Walker::ticks(1),
        ProbeSurface::new(&probe),
        ScriptedInput::default(),
    );
    assert!(matches!(
        result,
        Err(EngineError::Config(ConfigError::UnsupportedCellSize { .. }))
    ));
}

#[test]
fn stop_handle_ends_a_loop_that_never_quits() {
    let probe = Probe::default();
    let engine = Engine::construct(
        &config(),
        Walker::forever(),
        ProbeSurface::new(&probe),
        ScriptedInput::default(),
    )
    .unwrap();

    let stop = engine.stop_handle();
    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        stop.request_stop();
    });

    let outcome = engine.start().unwrap();
    stopper.join().unwrap();

    assert_eq!(outcome.reason, StopReason::StopRequested);
    assert_eq!(outcome.ticks as usize, probe.presents.load(Ordering::SeqCst));
    assert_eq!(probe.shutdowns.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn create_failure_signals_completion_without_ticks() {
    let probe = Probe::default();
    let app = Walker {
        create_ok: false,
        ..Walker::ticks(5)
    };
    let engine =
        Engine::construct(&config(), app, ProbeSurface::new(&probe), ScriptedInput::default())
            .unwrap();

    let outcome = engine.run().await.unwrap();
    assert_eq!(outcome.ticks, 0);
    assert_eq!(outcome.reason, StopReason::CreateFailed);
    assert_eq!(probe.presents.load(Ordering::SeqCst), 0);
    assert_eq!(probe.shutdowns.load(Ordering::SeqCst), 1);
}

#[test]
fn run_can_be_driven_by_an_existing_runtime() {
    let probe = Probe::default();
    let engine = Engine::construct(
        &config(),
        Walker::ticks(4),
        ProbeSurface::new(&probe),
        ScriptedInput::default(),
    )
    .unwrap();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .build()
        .unwrap();
    let outcome = tokio_test::block_on(async { rt.spawn(engine.run()).await.unwrap() }).unwrap();
    assert_eq!(outcome.ticks, 4);
}
