//! Playback arbitration: the ordered queue, the sequential worker, and the
//! panic bypass path.

pub mod active;
pub mod panic;
pub mod queue;
pub mod types;
pub mod worker;

pub use active::{ActivePlayback, ActiveRender};
pub use panic::trigger_panic;
pub use queue::PlaybackQueue;
pub use types::PlaybackRequest;
pub use worker::PlaybackWorker;
