//! Shell-out renderer implementation for voxd
//!
//! Invokes the external rendering collaborator as a subprocess with
//! positional arguments `(text, speaker)` plus the worker-mode flag, and
//! waits for the process to exit. The collaborator generates the audio and
//! plays it; this crate only observes exit status and duration.

use async_trait::async_trait;
use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, error};
use voxd_render::{next_render_id, RenderError, RenderOutcome, RenderResult, Renderer, RendererConfig};


pub struct ShellRenderer {
    config: RendererConfig,
}

impl ShellRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Build the collaborator command line.
    ///
    /// The worker flag is essential: without it the collaborator runs in
    /// client mode and sends the request back to this daemon, looping
    /// forever.
    fn build_command(&self, text: &str, speaker: &str) -> Command {
        let mut cmd = Command::new(&self.config.command);
        cmd.arg(text).arg(speaker).arg(&self.config.worker_flag);
        cmd
    }
}

#[async_trait]
impl Renderer for ShellRenderer {
    fn name(&self) -> &str {
        "shell"
    }

    async fn is_available(&self) -> bool {
        // Probe by metadata rather than by running the command: invoking the
        // collaborator with no worker flag would enter client mode.
        match tokio::fs::metadata(&self.config.command).await {
            Ok(meta) => meta.is_file(),
            Err(_) => {
                // Bare command names resolve through PATH at spawn time
                self.config.command.components().count() == 1
            }
        }
    }

    async fn render(&self, text: &str, speaker: &str) -> RenderResult<RenderOutcome> {
        if text.trim().is_empty() {
            return Err(RenderError::InvalidInput("Empty text input".to_string()));
        }

        let render_id = next_render_id();
        let started = Instant::now();

        debug!(
            "Running renderer [{}]: {:?} speaker={}",
            render_id, self.config.command, speaker
        );

        // status() inherits stdio, so the collaborator's own output lands in
        // the daemon log stream
        let status = self.build_command(text, speaker).status().await?;

        if status.success() {
            Ok(RenderOutcome {
                render_id,
                duration: started.elapsed(),
            })
        } else {
            match status.code() {
                Some(code) => {
                    error!("Renderer [{}] exited with status {}", render_id, code);
                    Err(RenderError::NonZeroExit { status: code })
                }
                None => {
                    error!("Renderer [{}] terminated by signal", render_id);
                    Err(RenderError::Terminated)
                }
            }
        }
    }

    fn config(&self) -> &RendererConfig {
        &self.config
    }
}
