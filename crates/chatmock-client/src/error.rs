use chatmock_shared::{ImportError, ValidationErrors};
use chatmock_store::StoreError;
use chatmock_timeline::ParseSkinError;
use thiserror::Error;

/// Everything a session command can fail with. None of these leave the
/// session unusable.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Skin(#[from] ParseSkinError),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
