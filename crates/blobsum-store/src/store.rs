use std::future::Future;
use std::io;
use std::pin::Pin;

use bytes::{Bytes, BytesMut};
use futures_util::{Stream, TryStreamExt, stream};

use crate::{BlobRef, Result, StoreError};

pub type ByteStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send + 'static>>;

/// Blob storage as seen by the pipelines.
pub trait BlobStore: Send + Sync {
    /// Stream the content of `blob`.
    fn get(&self, blob: &BlobRef) -> impl Future<Output = Result<ByteStream>> + Send;

    /// Write `body` to `blob`, returning the number of bytes stored.
    ///
    /// With `overwrite` unset an existing blob is an error. The body is
    /// consumed to the end before the blob becomes visible.
    fn put(
        &self,
        blob: &BlobRef,
        body: ByteStream,
        overwrite: bool,
    ) -> impl Future<Output = Result<u64>> + Send;

    /// Create `container` if it does not exist yet.
    fn ensure_container(&self, container: &str) -> impl Future<Output = Result<()>> + Send;

    /// Names of all blobs in `container`, sorted.
    fn list(&self, container: &str) -> impl Future<Output = Result<Vec<String>>> + Send;

    fn exists(&self, blob: &BlobRef) -> impl Future<Output = Result<bool>> + Send;

    /// Read `blob` fully as UTF-8 text.
    fn get_text(&self, blob: &BlobRef) -> impl Future<Output = Result<String>> + Send {
        async move {
            let body = collect_stream(self.get(blob).await?).await?;
            String::from_utf8(body.to_vec()).map_err(|_| StoreError::InvalidUtf8(blob.clone()))
        }
    }

    /// Read `blob` fully as text, replacing invalid UTF-8 sequences.
    fn get_text_lossy(&self, blob: &BlobRef) -> impl Future<Output = Result<String>> + Send {
        async move {
            let body = collect_stream(self.get(blob).await?).await?;
            Ok(String::from_utf8_lossy(&body).into_owned())
        }
    }

    fn put_bytes(
        &self,
        blob: &BlobRef,
        body: Bytes,
        overwrite: bool,
    ) -> impl Future<Output = Result<u64>> + Send {
        let body: ByteStream = Box::pin(stream::once(async move { Ok(body) }));
        self.put(blob, body, overwrite)
    }
}

/// Drain a byte stream into one buffer.
pub async fn collect_stream(body: ByteStream) -> io::Result<Bytes> {
    body.try_fold(BytesMut::new(), |mut buf, chunk| async move {
        buf.extend_from_slice(&chunk);
        Ok(buf)
    })
    .await
    .map(BytesMut::freeze)
}
