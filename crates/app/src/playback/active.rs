use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;

/// Snapshot of the utterance the sequential worker is currently rendering.
#[derive(Debug, Clone)]
pub struct ActiveRender {
    pub speaker: String,
    pub started_at: Instant,
}

/// The shared "currently playing" slot.
///
/// Written only by the sequential worker (set before invoking the renderer,
/// cleared after, on both outcomes). Reads are advisory; nothing synchronizes
/// on this slot, and the panic bypass ignores it entirely.
#[derive(Clone, Default)]
pub struct ActivePlayback {
    slot: Arc<Mutex<Option<ActiveRender>>>,
}

impl ActivePlayback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, speaker: &str) {
        *self.slot.lock() = Some(ActiveRender {
            speaker: speaker.to_string(),
            started_at: Instant::now(),
        });
    }

    pub fn clear(&self) {
        *self.slot.lock() = None;
    }

    pub fn snapshot(&self) -> Option<ActiveRender> {
        self.slot.lock().clone()
    }

    pub fn is_idle(&self) -> bool {
        self.slot.lock().is_none()
    }
}
