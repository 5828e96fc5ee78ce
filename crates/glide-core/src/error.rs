use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid interpolation curve: {0}")]
    InvalidCurve(String),

    #[error("Invalid scroll offset: {0}")]
    InvalidOffset(String),

    #[error("Replay script error: {0}")]
    Script(String),
}

pub type Result<T> = std::result::Result<T, Error>;
