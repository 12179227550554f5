use std::sync::Arc;

use blobsum_archive::{list_entries, listing_text};
use blobsum_fs::{TransientFile, Workspace};
use blobsum_store::{BlobRef, BlobStore};
use blobsum_verify::hash_async_reader;
use bytes::Bytes;
use futures_util::TryStreamExt;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::guard::Guard;
use crate::data::{ListingFailure, PipelineOptions, VerificationJob, VerificationReport, VerificationResult};
use crate::{JobError, Result, rules};

/// Downloads a blob, recomputes its checksum and optionally its archive
/// listing, and publishes how they compare against reference blobs.
pub struct ChecksumVerifier<S> {
    store:   Arc<S>,
    options: PipelineOptions,
}

impl<S: BlobStore> ChecksumVerifier<S> {
    pub fn new(store: Arc<S>, options: PipelineOptions) -> Self { Self { store, options } }

    /// Run one verification.
    ///
    /// The result blob is written once, after every comparison has been
    /// made. If any step fails nothing is published, so a corrupt archive
    /// under [`ListingFailure::Abort`] also discards the checksum verdict.
    /// Reference blobs that are not valid UTF-8 are decoded lossily and
    /// compare as a mismatch. The local copy of the
    /// target is removed on every exit path.
    pub async fn verify(
        &self,
        job: VerificationJob,
        cancel: &CancellationToken,
    ) -> Result<VerificationReport> {
        let guard = Guard::new(cancel, self.options.storage_timeout);
        let workspace = self.options.workspace()?;

        info!(target_blob = %job.target, "verifying blob");
        let local = self.download(&job.target, &workspace, &guard).await?;

        let file = guard.local(local.open()).await?;
        let digest = guard
            .local(hash_async_reader(file, self.options.chunk_size))
            .await?;
        debug!(target_blob = %job.target, %digest, "computed checksum");

        let expected = guard
            .storage("get checksum", self.store.get_text_lossy(&job.expected_checksum))
            .await?;
        let checksum_match = rules::checksum_matches(&digest, &expected);
        if !checksum_match {
            warn!(target_blob = %job.target, actual = %digest, expected = %expected.trim(), "checksum mismatch");
        }

        let listing_match = match &job.expected_listing {
            Some(listing) => Some(self.check_listing(&job.target, listing, &local, &guard).await?),
            None => None,
        };

        let result = VerificationResult {
            subject: job.subject().to_string(),
            checksum_match,
            listing_match,
        };
        let result_blob = rules::result_blob(&job.target, Uuid::new_v4());
        guard
            .storage(
                "put result",
                self.store
                    .put_bytes(&result_blob, Bytes::from(result.to_string()), false),
            )
            .await?;

        info!(
            target_blob = %job.target,
            result_blob = %result_blob,
            checksum_match,
            listing_match = ?listing_match,
            "verification finished"
        );
        Ok(VerificationReport {
            result,
            result_blob,
            digest,
        })
    }

    /// Materialize `blob` as a file in `workspace`.
    async fn download(
        &self,
        blob: &BlobRef,
        workspace: &Workspace,
        guard: &Guard<'_>,
    ) -> Result<TransientFile> {
        let mut body = guard.storage("get target", self.store.get(blob)).await?;
        let local = workspace.create_file("target").await?;
        let mut file = guard
            .local(tokio::fs::OpenOptions::new().write(true).open(local.path()))
            .await?;

        let mut bytes = 0u64;
        while let Some(chunk) = guard.storage("read target", body.try_next()).await? {
            guard.local(file.write_all(&chunk)).await?;
            bytes += chunk.len() as u64;
        }
        guard.local(file.flush()).await?;
        debug!(blob = %blob, bytes, path = %local.path().display(), "downloaded target");
        Ok(local)
    }

    /// Compare the archive listing of `local` with the `listing` blob.
    async fn check_listing(
        &self,
        target: &BlobRef,
        listing: &BlobRef,
        local: &TransientFile,
        guard: &Guard<'_>,
    ) -> Result<bool> {
        let file = local.open_sync()?;
        let listed = guard
            .local(async {
                tokio::task::spawn_blocking(move || list_entries(file).map(listing_text))
                    .await
                    .map_err(|e| JobError::Aborted(e.to_string()))
            })
            .await?;

        let actual = match listed {
            Ok(text) => Some(text),
            Err(blobsum_archive::Error::Format(reason)) => match self.options.listing_failure {
                ListingFailure::Abort => {
                    return Err(JobError::Format {
                        blob: target.clone(),
                        reason,
                    });
                }
                ListingFailure::Mismatch => {
                    warn!(target_blob = %target, %reason, "archive unreadable, treating listing as mismatch");
                    None
                }
            },
            Err(blobsum_archive::Error::Io(e)) => return Err(e.into()),
        };

        let expected = guard
            .storage("get listing", self.store.get_text_lossy(listing))
            .await?;
        let matched = actual.is_some_and(|actual| rules::listing_matches(&actual, &expected));
        if !matched {
            warn!(target_blob = %target, listing = %listing, "file listing mismatch");
        }
        Ok(matched)
    }
}
