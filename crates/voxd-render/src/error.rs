//! Error types for renderer invocation

use thiserror::Error;

/// Renderer invocation error types
#[derive(Error, Debug)]
pub enum RenderError {
    /// The rendering collaborator is not installed or not executable
    #[error("Renderer not available: {0}")]
    NotAvailable(String),

    /// The collaborator process could not be spawned
    #[error("Failed to spawn renderer: {0}")]
    Spawn(#[from] std::io::Error),

    /// The collaborator process exited non-zero
    #[error("Renderer exited with status {status}")]
    NonZeroExit { status: i32 },

    /// The collaborator process was killed by a signal (no exit code)
    #[error("Renderer terminated by signal")]
    Terminated,

    /// Invalid text input
    #[error("Invalid text input: {0}")]
    InvalidInput(String),
}

/// Result type for renderer operations
pub type RenderResult<T> = Result<T, RenderError>;
