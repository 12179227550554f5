use std::io;
use std::time::Duration;

use blobsum_store::{BlobRef, StoreError};

/// Why a job stopped without producing its output.
///
/// Every variant is fatal to the job that raised it and to nothing else.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("blob not found: {0}")]
    NotFound(BlobRef),

    #[error("invalid archive {blob}: {reason}")]
    Format { blob: BlobRef, reason: String },

    #[error("storage error: {0}")]
    Store(StoreError),

    #[error("workspace error: {0}")]
    Workspace(#[from] blobsum_fs::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{op} timed out after {timeout:?}")]
    Timeout { op: &'static str, timeout: Duration },

    #[error("job cancelled")]
    Cancelled,

    #[error("job aborted: {0}")]
    Aborted(String),
}

impl From<StoreError> for JobError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(blob) => Self::NotFound(blob),
            StoreError::Io(e) => Self::Io(e),
            other => Self::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, JobError>;
