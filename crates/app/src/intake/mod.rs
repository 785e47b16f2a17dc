//! Intake boundary: TCP listener, wire protocol, request classification.

pub mod protocol;
pub mod server;

pub use protocol::WireRequest;
pub use server::IntakeServer;
