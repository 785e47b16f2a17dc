use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Listener error: {0}")]
    Listener(#[from] std::io::Error),

    #[error("Identity record error: {0}")]
    IdentityRecord(String),

    #[error("Fatal error, cannot recover: {0}")]
    Fatal(String),
}
