//! Renderer abstraction layer for voxd
//!
//! This crate provides the foundational types and trait for invoking the
//! external rendering collaborator: the `Renderer` trait, failure taxonomy,
//! and invocation configuration.

use std::sync::atomic::{AtomicU64, Ordering};

pub mod error;
pub mod renderer;
pub mod types;

pub use error::{RenderError, RenderResult};
pub use renderer::Renderer;
pub use types::{RenderOutcome, RendererConfig};

/// Generates unique render IDs for log correlation
static RENDER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique render ID
pub fn next_render_id() -> u64 {
    RENDER_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}
