//! voxd: single-node voice playback arbiter
//!
//! Accepts playback requests over local TCP, serializes normal-priority
//! playback through one worker task, and lets panic requests speak
//! immediately on detached tasks. Text-to-speech itself is delegated to an
//! external rendering collaborator.

pub mod config;
pub mod intake;
pub mod playback;

#[cfg(test)]
pub mod test_utils;
