//! End-to-end tests: real TCP intake, ordered queue, sequential worker, and
//! panic bypass wired together with a renderer double.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use voxd_app::intake::IntakeServer;
use voxd_app::playback::{ActivePlayback, PlaybackQueue, PlaybackWorker};
use voxd_render::{next_render_id, RenderOutcome, RenderResult, Renderer, RendererConfig};

#[derive(Debug, Clone)]
struct Call {
    text: String,
    started: Instant,
    ended: Instant,
}

struct SlowRenderer {
    config: RendererConfig,
    delay: Duration,
    calls: Mutex<Vec<Call>>,
}

impl SlowRenderer {
    fn new(delay: Duration) -> Self {
        Self {
            config: RendererConfig::default(),
            delay,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Renderer for SlowRenderer {
    fn name(&self) -> &str {
        "slow"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn render(&self, text: &str, _speaker: &str) -> RenderResult<RenderOutcome> {
        let started = Instant::now();
        tokio::time::sleep(self.delay).await;
        let ended = Instant::now();
        self.calls.lock().push(Call {
            text: text.to_string(),
            started,
            ended,
        });
        Ok(RenderOutcome {
            render_id: next_render_id(),
            duration: ended.duration_since(started),
        })
    }

    fn config(&self) -> &RendererConfig {
        &self.config
    }
}

async fn start_arbiter(renderer: Arc<SlowRenderer>) -> SocketAddr {
    let (queue, rx) = PlaybackQueue::new();
    let server = IntakeServer::bind("127.0.0.1:0", queue, renderer.clone(), "System".to_string())
        .await
        .expect("bind on an ephemeral port");
    let addr = server.local_addr().expect("local addr");

    let worker = PlaybackWorker::new(rx, renderer, ActivePlayback::new());
    tokio::spawn(worker.run());
    tokio::spawn(server.run());

    addr
}

/// One full protocol exchange: send the payload, read the acknowledgment
/// until the server closes. Empty string means a silent close.
async fn send(addr: SocketAddr, payload: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(payload.as_bytes()).await.expect("write");

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.expect("read");
    String::from_utf8(response).expect("utf-8 ack")
}

async fn wait_until(mut condition: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !condition() {
        assert!(Instant::now() < deadline, "condition not met in time");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn normal_request_is_acknowledged_and_rendered() {
    let renderer = Arc::new(SlowRenderer::new(Duration::ZERO));
    let addr = start_arbiter(renderer.clone()).await;

    let ack = send(addr, r#"{"text":"hello","speaker":"Bob","panic":false}"#).await;
    assert_eq!(ack, "OK: Queued");

    wait_until(|| renderer.calls().len() == 1).await;
    assert_eq!(renderer.calls()[0].text, "hello");
}

#[tokio::test]
async fn panic_does_not_wait_for_the_queue() {
    let renderer = Arc::new(SlowRenderer::new(Duration::from_millis(300)));
    let addr = start_arbiter(renderer.clone()).await;

    let ack = send(addr, r#"{"text":"hello","speaker":"Bob","panic":false}"#).await;
    assert_eq!(ack, "OK: Queued");

    // The panic ack must come back while "hello" is still rendering
    let before = Instant::now();
    let ack = send(addr, r#"{"text":"urgent!","speaker":"Alice","panic":true}"#).await;
    assert_eq!(ack, "OK: Panic Triggered");
    assert!(before.elapsed() < Duration::from_millis(250));

    // Both utterances render exactly once
    wait_until(|| renderer.calls().len() == 2).await;
    let calls = renderer.calls();
    assert!(calls.iter().filter(|c| c.text == "hello").count() == 1);
    assert!(calls.iter().filter(|c| c.text == "urgent!").count() == 1);

    // "urgent!" started before "hello" finished
    let hello = calls.iter().find(|c| c.text == "hello").unwrap();
    let urgent = calls.iter().find(|c| c.text == "urgent!").unwrap();
    assert!(urgent.started < hello.ended);
}

#[tokio::test]
async fn concurrent_normal_requests_are_serialized_in_order() {
    let renderer = Arc::new(SlowRenderer::new(Duration::from_millis(20)));
    let addr = start_arbiter(renderer.clone()).await;

    for i in 0..4 {
        let payload = format!(r#"{{"text":"item {}","speaker":"Bob"}}"#, i);
        assert_eq!(send(addr, &payload).await, "OK: Queued");
    }

    wait_until(|| renderer.calls().len() == 4).await;
    let calls = renderer.calls();
    for (i, call) in calls.iter().enumerate() {
        assert_eq!(call.text, format!("item {}", i));
    }
    for pair in calls.windows(2) {
        assert!(pair[0].ended <= pair[1].started, "normal renders overlapped");
    }
}

#[tokio::test]
async fn malformed_payload_gets_an_error_ack_and_no_render() {
    let renderer = Arc::new(SlowRenderer::new(Duration::ZERO));
    let addr = start_arbiter(renderer.clone()).await;

    let ack = send(addr, "this is not json").await;
    assert_eq!(ack, "Error: Invalid JSON");

    // A well-formed follow-up still works, and only it renders
    assert_eq!(send(addr, r#"{"text":"after"}"#).await, "OK: Queued");
    wait_until(|| renderer.calls().len() == 1).await;
    assert_eq!(renderer.calls()[0].text, "after");
}

#[tokio::test]
async fn missing_text_is_silently_dropped() {
    let renderer = Arc::new(SlowRenderer::new(Duration::ZERO));
    let addr = start_arbiter(renderer.clone()).await;

    let ack = send(addr, r#"{"panic":false}"#).await;
    assert_eq!(ack, "");

    // Queue stayed empty: the next item is the only one ever rendered
    assert_eq!(send(addr, r#"{"text":"only"}"#).await, "OK: Queued");
    wait_until(|| renderer.calls().len() == 1).await;
    assert_eq!(renderer.calls()[0].text, "only");
}
