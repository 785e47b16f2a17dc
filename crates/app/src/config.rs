use clap::Parser;
use std::path::PathBuf;
use voxd_render::RendererConfig;

/// Voice playback arbiter daemon
#[derive(Debug, Clone, Parser)]
#[command(name = "voxd", about = "Voice playback arbiter daemon")]
pub struct DaemonConfig {
    /// Address to listen on (localhost only by design)
    #[arg(long, env = "VOXD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// TCP port for playback requests
    #[arg(long, env = "VOXD_PORT", default_value_t = 6969)]
    pub port: u16,

    /// Path of the daemon identity record (PID file)
    #[arg(long, env = "VOXD_PID_FILE", default_value = "/tmp/voxd.pid")]
    pub pid_file: PathBuf,

    /// Rendering collaborator executable
    #[arg(long, env = "VOXD_RENDERER", default_value = "voice.sh")]
    pub renderer: PathBuf,

    /// Directory for the daily-rolling log file
    #[arg(long, env = "VOXD_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Speaker identity applied when a request names none
    #[arg(long, env = "VOXD_DEFAULT_SPEAKER", default_value = "System")]
    pub default_speaker: String,
}

impl DaemonConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn renderer_config(&self) -> RendererConfig {
        RendererConfig {
            command: self.renderer.clone(),
            ..RendererConfig::default()
        }
    }
}
