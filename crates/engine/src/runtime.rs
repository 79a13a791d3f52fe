//! Engine runtime integration.
//!
//! The controller context builds the engine, hands the loop to a blocking
//! task and then waits on a one-shot completion channel. The loop context owns
//! every piece of mutable state for the whole run, so nothing is shared and
//! nothing is locked.

use tokio::runtime::Builder;
use tokio::sync::oneshot;

use crate::app::Application;
use crate::config::EngineConfig;
use crate::core::{FrameBuffer, PresentationSurface};
use crate::error::{EngineError, Result};
use crate::game_loop::{GameLoop, LoopOutcome};
use crate::input::InputSource;
use crate::types::StopHandle;

/// A constructed, not yet started, engine.
pub struct Engine<A, S, I> {
    game: GameLoop<A, S, I>,
}

impl<A, S, I> Engine<A, S, I>
where
    A: Application + Send + 'static,
    S: PresentationSurface + Send + 'static,
    I: InputSource + Send + 'static,
{
    /// Create the screen and initialize the surface.
    ///
    /// Fails if the requested grid does not fit the surface or the surface
    /// refuses the configuration; the loop never starts in that case.
    pub fn construct(config: &EngineConfig, app: A, mut surface: S, input: I) -> Result<Self> {
        let screen = FrameBuffer::create(config.width, config.height, surface.max_size())?;
        surface.initialize(config.width, config.height, config.cell_size())?;

        tracing::info!(
            width = config.width,
            height = config.height,
            app = %config.app_name,
            "engine constructed"
        );

        let game = GameLoop::new(app, surface, input, screen).with_app_name(config.app_name.clone());
        Ok(Self { game })
    }

    /// Share an existing stop flag with the loop.
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.game = self.game.with_stop_handle(stop);
        self
    }

    /// Handle that asks the loop to stop at its next tick boundary.
    pub fn stop_handle(&self) -> StopHandle {
        self.game.stop_handle()
    }

    /// Run the loop to completion, blocking the calling thread.
    pub fn start(self) -> Result<LoopOutcome> {
        let rt = Builder::new_current_thread()
            .build()
            .map_err(EngineError::Runtime)?;
        rt.block_on(self.run())
    }

    /// Run the loop on a blocking task and wait for its completion signal.
    ///
    /// The surface is shut down once the loop has finished.
    pub async fn run(self) -> Result<LoopOutcome> {
        let (done_tx, done_rx) = oneshot::channel::<LoopOutcome>();
        let game = self.game;
        let handle = tokio::task::spawn_blocking(move || game.run_to_completion(done_tx));

        let outcome = match done_rx.await {
            Ok(outcome) => outcome,
            Err(_) => {
                // Sender dropped without a signal: the loop panicked.
                handle.await?;
                return Err(EngineError::CompletionDropped);
            }
        };

        let (_app, mut surface, input) = handle.await?.into_parts();
        // Input may hold terminal modes scoped to the surface's screen.
        drop(input);
        surface.shutdown().map_err(EngineError::Shutdown)?;
        Ok(outcome)
    }
}
