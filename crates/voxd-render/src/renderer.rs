//! Renderer trait: the seam between the arbiter and the collaborator

use crate::error::RenderResult;
use crate::types::{RenderOutcome, RendererConfig};
use async_trait::async_trait;

/// Core renderer interface
///
/// Implementations invoke a specific rendering collaborator (shell script,
/// native TTS binary, test double). One call converts and plays one utterance
/// as a single blocking step; the future resolves when playback is done.
///
/// `render` takes `&self` so the same instance can serve the sequential
/// worker and any number of concurrent urgent invocations.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Get renderer name/identifier
    fn name(&self) -> &str;

    /// Check if the collaborator is available on this system
    async fn is_available(&self) -> bool;

    /// Render and play one utterance, blocking until playback completes.
    ///
    /// Failure is surfaced to the caller for logging; no retry is performed
    /// here.
    async fn render(&self, text: &str, speaker: &str) -> RenderResult<RenderOutcome>;

    /// Get current configuration
    fn config(&self) -> &RendererConfig;
}
