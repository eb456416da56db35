use thiserror::Error;

/// Errors produced while decoding spot payloads.
#[derive(Error, Debug)]
pub enum SpotError {
    #[error("invalid spot payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpotError>;
