/// One accepted playback request.
///
/// Built at the intake boundary from a decoded wire message, then moved into
/// either the ordered queue or the panic bypass. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRequest {
    pub text: String,
    pub speaker: String,
    /// Classification fact only; the worker never branches on it. Urgent
    /// requests are dispatched at intake and never enter the queue.
    pub urgent: bool,
}

impl PlaybackRequest {
    /// Short text preview for log lines.
    pub fn preview(&self) -> String {
        let mut p: String = self.text.chars().take(20).collect();
        if p.len() < self.text.len() {
            p.push_str("...");
        }
        p
    }
}
