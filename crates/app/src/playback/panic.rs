use super::types::PlaybackRequest;
use std::sync::Arc;
use tracing::{error, info, warn};
use voxd_render::Renderer;

/// Urgent bypass: render immediately on a detached task.
///
/// Does not consult the queue, the worker, or the active-playback slot, so an
/// urgent utterance can speak over whatever is already playing. Returns as
/// soon as the task is spawned; the outcome goes to the log only.
pub fn trigger_panic(renderer: Arc<dyn Renderer>, request: PlaybackRequest) {
    warn!("PANIC REQUEST: {}", request.speaker);

    tokio::spawn(async move {
        match renderer.render(&request.text, &request.speaker).await {
            Ok(outcome) => {
                info!(
                    "Panic finished [{}]: {} ({}ms)",
                    outcome.render_id,
                    request.speaker,
                    outcome.duration.as_millis()
                );
            }
            Err(e) => {
                error!("Panic render failed for {}: {}", request.speaker, e);
            }
        }
    });
}
