//! Engine errors.

use thiserror::Error;

use crate::core::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Screen or surface configuration rejected at startup
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The async runtime hosting the loop could not be built
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The loop task panicked
    #[error("game loop panicked: {0}")]
    LoopPanicked(#[from] tokio::task::JoinError),

    /// The loop ended without raising its completion signal
    #[error("game loop ended without signalling completion")]
    CompletionDropped,

    /// The surface failed to restore the display
    #[error("failed to shut down presentation surface: {0:#}")]
    Shutdown(anyhow::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
