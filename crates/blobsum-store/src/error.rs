use std::io;

use crate::BlobRef;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("blob not found: {0}")]
    NotFound(BlobRef),

    #[error("container not found: {0}")]
    ContainerNotFound(String),

    #[error("blob already exists: {0}")]
    AlreadyExists(BlobRef),

    #[error("invalid blob or container name: {0:?}")]
    InvalidName(String),

    #[error("blob is not valid UTF-8: {0}")]
    InvalidUtf8(BlobRef),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
