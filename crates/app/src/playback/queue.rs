use super::types::PlaybackRequest;
use tokio::sync::mpsc;

/// Producer side of the ordered queue.
///
/// Unbounded multi-producer/single-consumer channel: every intake task holds
/// a clone of this handle, and exactly one `PlaybackWorker` holds the
/// receiver. FIFO, never blocks, never rejects.
#[derive(Clone)]
pub struct PlaybackQueue {
    tx: mpsc::UnboundedSender<PlaybackRequest>,
}

impl PlaybackQueue {
    /// Create the queue, returning the producer handle and the worker's
    /// receiver.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PlaybackRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Append a request at the tail.
    ///
    /// Only fails once the worker has gone away, which happens during
    /// shutdown; the request is dropped in that case.
    pub fn enqueue(&self, request: PlaybackRequest) {
        if let Err(e) = self.tx.send(request) {
            tracing::warn!("Dropping request, worker has stopped: {}", e.0.preview());
        }
    }
}
