use std::io;
use std::path::{Path, PathBuf};

use blobsum_fs::TransientFile;
use blobsum_store::BlobRef;

/// Parameters of one verification run.
///
/// Moved into the run that consumes it; a second run needs a new job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationJob {
    pub target:            BlobRef,
    pub expected_checksum: BlobRef,
    pub expected_listing:  Option<BlobRef>,
}

impl VerificationJob {
    pub fn new(target: BlobRef, expected_checksum: BlobRef) -> Self {
        Self {
            target,
            expected_checksum,
            expected_listing: None,
        }
    }

    /// Also compare the archive listing against `listing`.
    pub fn with_listing(mut self, listing: BlobRef) -> Self {
        self.expected_listing = Some(listing);
        self
    }

    /// Job whose blobs all live in `container`.
    ///
    /// An empty or absent listing name means no listing comparison.
    pub fn in_container(
        container: &str,
        file: &str,
        checksum_file: &str,
        listing_file: Option<&str>,
    ) -> Self {
        let job = Self::new(
            BlobRef::new(container, file),
            BlobRef::new(container, checksum_file),
        );
        match listing_file.filter(|name| !name.is_empty()) {
            Some(listing) => job.with_listing(BlobRef::new(container, listing)),
            None => job,
        }
    }

    /// Name the result is reported under.
    pub fn subject(&self) -> &str { self.target.name() }
}

/// Where the bytes of an upload come from.
#[derive(Debug)]
pub enum UploadSource {
    /// A staged copy owned by the job, deleted when the job ends.
    Transient(TransientFile),
    /// A caller-owned file, left in place.
    Path(PathBuf),
}

impl UploadSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::Transient(file) => file.path(),
            Self::Path(path) => path,
        }
    }

    pub(crate) async fn open(&self) -> io::Result<tokio::fs::File> {
        tokio::fs::File::open(self.path()).await
    }
}

/// Parameters of one upload run.
#[derive(Debug)]
pub struct UploadJob {
    pub source:      UploadSource,
    pub destination: BlobRef,
}

impl UploadJob {
    pub fn new(source: UploadSource, destination: BlobRef) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Upload a staged file; it is deleted once the job finishes.
    pub fn transient(file: TransientFile, container: &str, name: &str) -> Self {
        Self::new(
            UploadSource::Transient(file),
            BlobRef::new(container, name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_name_means_no_listing() {
        let job = VerificationJob::in_container("c", "a.tar.bz2", "a.tar.bz2.sha1", Some(""));
        assert_eq!(job.expected_listing, None);
        assert_eq!(job.subject(), "a.tar.bz2");

        let job = VerificationJob::in_container("c", "a.tar.bz2", "a.sha1", Some("a.lst"));
        assert_eq!(job.expected_listing, Some(BlobRef::new("c", "a.lst")));
        assert_eq!(job.expected_checksum, BlobRef::new("c", "a.sha1"));
    }
}
