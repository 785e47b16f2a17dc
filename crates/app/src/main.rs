use anyhow::anyhow;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use voxd_app::config::DaemonConfig;
use voxd_app::intake::IntakeServer;
use voxd_app::playback::{ActivePlayback, PlaybackQueue, PlaybackWorker};
use voxd_foundation::{
    remove_pidfile, write_pidfile, AppError, AppState, ShutdownHandler, StateManager,
};
use voxd_render::Renderer;
use voxd_render_shell::ShellRenderer;

fn init_logging(log_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "voxd.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout.and(non_blocking_file))
        .with_env_filter(log_level)
        .init();
    std::mem::forget(_guard);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DaemonConfig::parse();
    init_logging(&config.log_dir).map_err(|e| anyhow!("Failed to set up logging: {}", e))?;
    tracing::info!("Starting voxd daemon");

    let state_manager = StateManager::new();
    let shutdown = ShutdownHandler::new().install().await;

    let renderer: Arc<dyn Renderer> = Arc::new(ShellRenderer::new(config.renderer_config()));
    if !renderer.is_available().await {
        tracing::warn!(
            "Renderer collaborator {:?} not found; renders will fail until it appears",
            config.renderer
        );
    }

    let (queue, queue_rx) = PlaybackQueue::new();
    let active = ActivePlayback::new();

    let server = match IntakeServer::bind(
        &config.listen_addr(),
        queue,
        Arc::clone(&renderer),
        config.default_speaker.clone(),
    )
    .await
    {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Server crash: {}", e);
            let _ = remove_pidfile(&config.pid_file);
            return Err(e.into());
        }
    };

    write_pidfile(&config.pid_file, std::process::id())
        .map_err(|e| AppError::IdentityRecord(e.to_string()))?;
    tracing::info!("voxd listening on {}", config.listen_addr());

    let worker = PlaybackWorker::new(queue_rx, Arc::clone(&renderer), active);
    let worker_handle = tokio::spawn(worker.run());

    state_manager.transition(AppState::Running)?;

    let mut server_handle = tokio::spawn(server.run());

    let result = tokio::select! {
        _ = shutdown.wait() => {
            tracing::info!("Shutdown signal received");
            Ok(())
        }
        joined = &mut server_handle => match joined {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                tracing::error!("Server crash: {}", e);
                Err(anyhow::Error::new(e))
            }
            Err(e) => {
                tracing::error!("Listener task failed: {}", e);
                Err(anyhow::Error::new(e))
            }
        },
    };

    tracing::info!("Beginning graceful shutdown");
    state_manager.transition(AppState::Stopping)?;

    server_handle.abort();
    worker_handle.abort();
    let _ = worker_handle.await;

    if let Err(e) = remove_pidfile(&config.pid_file) {
        tracing::warn!("Failed to remove identity record: {}", e);
    }

    state_manager.transition(AppState::Stopped)?;
    tracing::info!("Shutdown complete");

    result
}
