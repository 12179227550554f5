use std::io;
use std::sync::Arc;

use blobsum_store::{BlobStore, ByteStream};
use bytes::Bytes;
use tokio_util::io::ReaderStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::guard::Guard;
use super::tee::HashingStream;
use crate::data::{PipelineOptions, UploadJob, UploadReport};
use crate::{JobError, Result, rules};

/// Stores a local file as a blob together with its `.sha1` sidecar.
pub struct UploadPipeline<S> {
    store:   Arc<S>,
    options: PipelineOptions,
}

impl<S: BlobStore> UploadPipeline<S> {
    pub fn new(store: Arc<S>, options: PipelineOptions) -> Self { Self { store, options } }

    /// Run one upload.
    ///
    /// The source is read once: it is hashed while it streams into the
    /// destination blob. The blob and its sidecar are two independent writes;
    /// a failure between them leaves the blob without a fresh sidecar. A
    /// transient source is deleted on every exit path.
    pub async fn upload(&self, job: UploadJob, cancel: &CancellationToken) -> Result<UploadReport> {
        let UploadJob {
            source,
            destination,
        } = job;
        let guard = Guard::new(cancel, self.options.storage_timeout);

        info!(destination = %destination, source = %source.path().display(), "uploading");
        guard
            .storage(
                "ensure container",
                self.store.ensure_container(destination.container()),
            )
            .await?;

        let file = guard.local(source.open()).await?;
        let reader: ByteStream = Box::pin(ReaderStream::with_capacity(file, self.options.chunk_size));
        let (body, hashed) = HashingStream::new(reader);
        let stored = guard
            .storage("put blob", self.store.put(&destination, Box::pin(body), true))
            .await?;

        let (digest, bytes) = hashed.await.map_err(|_| {
            JobError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "store finished before consuming the whole upload",
            ))
        })?;
        debug!(destination = %destination, stored, bytes, %digest, "stored blob");

        let checksum_blob = rules::checksum_blob(&destination);
        guard
            .storage(
                "put checksum",
                self.store
                    .put_bytes(&checksum_blob, Bytes::from(digest.to_hex()), true),
            )
            .await?;

        info!(destination = %destination, checksum_blob = %checksum_blob, %digest, "upload finished");
        drop(source);
        Ok(UploadReport {
            destination,
            checksum_blob,
            digest,
            bytes,
        })
    }
}
