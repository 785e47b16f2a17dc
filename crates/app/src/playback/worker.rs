use super::active::ActivePlayback;
use super::types::PlaybackRequest;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};
use voxd_render::Renderer;

/// The single consumer of the ordered queue.
///
/// Runs forever: pull one request, render it to completion, pull the next.
/// This blocking wait is the serialization invariant: no two normal-priority
/// renders ever overlap. One failed render is logged and the loop moves on.
pub struct PlaybackWorker {
    rx: mpsc::UnboundedReceiver<PlaybackRequest>,
    renderer: Arc<dyn Renderer>,
    active: ActivePlayback,
}

impl PlaybackWorker {
    pub fn new(
        rx: mpsc::UnboundedReceiver<PlaybackRequest>,
        renderer: Arc<dyn Renderer>,
        active: ActivePlayback,
    ) -> Self {
        Self {
            rx,
            renderer,
            active,
        }
    }

    pub async fn run(mut self) {
        info!("Playback worker started");

        while let Some(request) = self.rx.recv().await {
            info!("Processing: {} - {}", request.speaker, request.preview());

            // The slot is advisory: set before the render, cleared after,
            // regardless of outcome.
            self.active.set(&request.speaker);

            match self.renderer.render(&request.text, &request.speaker).await {
                Ok(outcome) => {
                    info!(
                        "Finished [{}]: {} ({}ms)",
                        outcome.render_id,
                        request.speaker,
                        outcome.duration.as_millis()
                    );
                }
                Err(e) => {
                    error!("Render failed for {}: {}", request.speaker, e);
                }
            }

            self.active.clear();
        }

        info!("Playback worker stopped");
    }
}
