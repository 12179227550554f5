use std::path::PathBuf;
use std::time::Duration;

use blobsum_verify::DEFAULT_CHUNK_SIZE;
use serde::{Deserialize, Serialize};

/// What a verification does when the archive cannot be decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingFailure {
    /// Fail the job with a format error; no result is published.
    #[default]
    Abort,
    /// Report the listing as not matching and publish the result.
    Mismatch,
}

/// Tuning shared by all pipelines.
///
/// # Examples
///
/// ```
/// use blobsum_pipeline::{ListingFailure, PipelineOptions};
/// use std::time::Duration;
///
/// let options = PipelineOptions::default()
///     .chunk_size(1024 * 1024)
///     .storage_timeout(Duration::from_secs(30))
///     .listing_failure(ListingFailure::Mismatch);
/// ```
#[derive(Clone, Debug)]
pub struct PipelineOptions {
    /// Bytes hashed or uploaded per step.
    ///
    /// Default: 4 MiB
    pub chunk_size: usize,

    /// Upper bound on each storage call, including each chunk read of a
    /// download. `None` waits indefinitely.
    ///
    /// Default: None
    pub storage_timeout: Option<Duration>,

    /// Default: [`ListingFailure::Abort`]
    pub listing_failure: ListingFailure,

    /// Directory scratch workspaces are created in.
    ///
    /// Default: the system temp directory
    pub scratch_dir: Option<PathBuf>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            chunk_size:      DEFAULT_CHUNK_SIZE,
            storage_timeout: None,
            listing_failure: ListingFailure::default(),
            scratch_dir:     None,
        }
    }
}

impl PipelineOptions {
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = bytes;
        self
    }

    pub fn storage_timeout(mut self, timeout: Duration) -> Self {
        self.storage_timeout = Some(timeout);
        self
    }

    pub fn listing_failure(mut self, policy: ListingFailure) -> Self {
        self.listing_failure = policy;
        self
    }

    pub fn scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    pub(crate) fn workspace(&self) -> blobsum_fs::Result<blobsum_fs::Workspace> {
        match &self.scratch_dir {
            Some(dir) => blobsum_fs::Workspace::new_in(dir),
            None => blobsum_fs::Workspace::new(),
        }
    }
}
