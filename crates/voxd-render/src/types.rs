//! Core types for renderer invocation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for invoking the external rendering collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Path to the collaborator executable (or script)
    pub command: PathBuf,
    /// Flag appended after the positional args to force worker mode.
    ///
    /// Worker mode renders directly; client mode would send the request back
    /// over TCP to this daemon and loop forever.
    pub worker_flag: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            command: PathBuf::from("voice.sh"),
            worker_flag: "--worker".to_string(),
        }
    }
}

/// Result of one completed renderer invocation
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    /// Render ID assigned at invocation time
    pub render_id: u64,
    /// Wall-clock duration of the collaborator process
    pub duration: Duration,
}
