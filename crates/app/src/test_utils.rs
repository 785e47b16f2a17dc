//! Shared test doubles for the playback path.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;
use voxd_render::{next_render_id, RenderError, RenderOutcome, RenderResult, Renderer, RendererConfig};

/// One observed renderer invocation.
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub text: String,
    pub speaker: String,
    pub started: Instant,
    pub ended: Instant,
}

/// Renderer double that records every call with start/end instants, so tests
/// can assert ordering and overlap.
pub struct RecordingRenderer {
    config: RendererConfig,
    delay: Duration,
    fail_on: Option<String>,
    calls: Mutex<Vec<RenderCall>>,
    started_count: Mutex<usize>,
    notify: Notify,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            config: RendererConfig::default(),
            delay,
            fail_on: None,
            calls: Mutex::new(Vec::new()),
            started_count: Mutex::new(0),
            notify: Notify::new(),
        }
    }

    /// Fail any render whose text equals `text`; the call is still recorded.
    pub fn failing_on(text: &str) -> Self {
        Self {
            fail_on: Some(text.to_string()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    pub fn completed(&self) -> usize {
        self.calls.lock().len()
    }

    /// Wait until at least `n` renders have started.
    pub async fn wait_for_calls(self: &Arc<Self>, n: usize) {
        loop {
            // Register before checking so a notify between the check and the
            // await is not lost
            let notified = self.notify.notified();
            if *self.started_count.lock() >= n {
                return;
            }
            notified.await;
        }
    }

    /// Wait until at least `n` renders have finished.
    pub async fn wait_for_completed(self: &Arc<Self>, n: usize) {
        loop {
            let notified = self.notify.notified();
            if self.completed() >= n {
                return;
            }
            notified.await;
        }
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Renderer for RecordingRenderer {
    fn name(&self) -> &str {
        "recording"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn render(&self, text: &str, speaker: &str) -> RenderResult<RenderOutcome> {
        let started = Instant::now();
        {
            *self.started_count.lock() += 1;
        }
        self.notify.notify_waiters();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let ended = Instant::now();
        self.calls.lock().push(RenderCall {
            text: text.to_string(),
            speaker: speaker.to_string(),
            started,
            ended,
        });
        self.notify.notify_waiters();

        if self.fail_on.as_deref() == Some(text) {
            return Err(RenderError::NonZeroExit { status: 1 });
        }

        Ok(RenderOutcome {
            render_id: next_render_id(),
            duration: ended.duration_since(started),
        })
    }

    fn config(&self) -> &RendererConfig {
        &self.config
    }
}
