use crate::intake::protocol::{self, WireRequest};
use crate::playback::{trigger_panic, PlaybackQueue};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tracing::{debug, error, info};
use voxd_foundation::AppError;
use voxd_render::Renderer;

const LISTEN_BACKLOG: u32 = 20;

/// The intake boundary: accepts connections forever and handles each one on
/// its own task, so one slow client never delays the next accept.
///
/// There is no bound on concurrent connection tasks. For a local, trusted,
/// low-traffic daemon that is a resource-exhaustion risk under load, not a
/// correctness hazard.
pub struct IntakeServer {
    listener: TcpListener,
    queue: PlaybackQueue,
    renderer: Arc<dyn Renderer>,
    default_speaker: String,
}

impl IntakeServer {
    /// Bind the listening endpoint with `SO_REUSEADDR`, so a fast restart
    /// never fails on a lingering address-in-use.
    pub async fn bind(
        addr: &str,
        queue: PlaybackQueue,
        renderer: Arc<dyn Renderer>,
        default_speaker: String,
    ) -> Result<Self, AppError> {
        let addr: SocketAddr = addr
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid listen address {:?}: {}", addr, e)))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        let listener = socket.listen(LISTEN_BACKLOG)?;

        Ok(Self {
            listener,
            queue,
            renderer,
            default_speaker,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept loop. Returns only on a fatal listener failure; per-connection
    /// failures are absorbed by the connection tasks.
    pub async fn run(self) -> Result<(), AppError> {
        loop {
            let (stream, peer) = self.listener.accept().await?;
            debug!("Accepted connection from {}", peer);

            let queue = self.queue.clone();
            let renderer = Arc::clone(&self.renderer);
            let default_speaker = self.default_speaker.clone();
            tokio::spawn(async move {
                handle_connection(stream, queue, renderer, default_speaker).await;
            });
        }
    }
}

/// One exchange per connection: single bounded read, decode, classify,
/// acknowledge, close. Any failure here is logged and isolated to this
/// connection.
async fn handle_connection(
    mut stream: TcpStream,
    queue: PlaybackQueue,
    renderer: Arc<dyn Renderer>,
    default_speaker: String,
) {
    let mut buf = vec![0u8; protocol::MAX_PAYLOAD];
    let n = match stream.read(&mut buf).await {
        Ok(0) => return,
        Ok(n) => n,
        Err(e) => {
            error!("Error reading request: {}", e);
            return;
        }
    };

    let ack: &[u8] = match WireRequest::decode(&buf[..n]) {
        Ok(wire) => match wire.into_request(&default_speaker) {
            Some(request) if request.urgent => {
                trigger_panic(renderer, request);
                protocol::ACK_PANIC
            }
            Some(request) => {
                info!("Queued: {} - {}", request.speaker, request.preview());
                queue.enqueue(request);
                protocol::ACK_QUEUED
            }
            // Empty or missing text: silent drop, connection just closes
            None => {
                debug!("Dropping request with empty text");
                return;
            }
        },
        Err(e) => {
            error!("Invalid JSON received: {}", e);
            protocol::ERR_INVALID_JSON
        }
    };

    if let Err(e) = stream.write_all(ack).await {
        debug!("Failed to send acknowledgment: {}", e);
    }
}
