use thiserror::Error;

/// Errors surfaced by the wallet core. None of them are fatal to the process.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("wallet count must be between 1 and 1000, got {0}")]
    InvalidCount(i64),

    #[error("decoding error: {0}")]
    Decoding(String),

    /// Only produced while parsing the history slot; `list()` recovers from it.
    #[error("stored history is corrupt: {0}")]
    StorageCorrupt(String),

    #[error("secure random source failed: {0}")]
    RandomSource(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("generation worker failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, WalletError>;
