use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid web port: {0}")]
    InvalidPort(u16),
    #[error("invalid track data: {0}")]
    Track(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
