//! Wire protocol: one JSON object per connection, one short textual
//! acknowledgment back.

use crate::playback::PlaybackRequest;
use serde::Deserialize;

/// Largest payload accepted in the single bounded read. Oversized or
/// fragmented payloads are a known limitation of the protocol.
pub const MAX_PAYLOAD: usize = 4096;

pub const ACK_QUEUED: &[u8] = b"OK: Queued";
pub const ACK_PANIC: &[u8] = b"OK: Panic Triggered";
pub const ERR_INVALID_JSON: &[u8] = b"Error: Invalid JSON";

/// Decoded request as it appears on the wire.
#[derive(Debug, Deserialize)]
pub struct WireRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default, alias = "urgent")]
    pub panic: bool,
}

impl WireRequest {
    pub fn decode(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }

    /// Classify into a `PlaybackRequest`, or `None` when `text` is empty or
    /// missing (the silent-drop case).
    pub fn into_request(self, default_speaker: &str) -> Option<PlaybackRequest> {
        let text = self.text.filter(|t| !t.is_empty())?;
        Some(PlaybackRequest {
            text,
            speaker: self.speaker.unwrap_or_else(|| default_speaker.to_string()),
            urgent: self.panic,
        })
    }
}
