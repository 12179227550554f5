use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use blobsum_store::ByteStream;
use blobsum_verify::{Digest, Hasher, Sha1Hasher};
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tokio::sync::oneshot;

/// Byte stream that hashes chunks as the consumer pulls them.
///
/// When the inner stream ends cleanly the digest and byte count are sent on
/// the paired receiver. If the stream fails or is dropped early the sender is
/// dropped and the receiver sees an error.
pub(crate) struct HashingStream {
    inner:  ByteStream,
    hasher: Option<Sha1Hasher>,
    bytes:  u64,
    done:   Option<oneshot::Sender<(Digest, u64)>>,
}

impl HashingStream {
    pub(crate) fn new(inner: ByteStream) -> (Self, oneshot::Receiver<(Digest, u64)>) {
        let (tx, rx) = oneshot::channel();
        let stream = Self {
            inner,
            hasher: Some(Sha1Hasher::new()),
            bytes: 0,
            done: Some(tx),
        };
        (stream, rx)
    }
}

impl Stream for HashingStream {
    type Item = io::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;
        match ready!(this.inner.poll_next_unpin(cx)) {
            Some(Ok(chunk)) => {
                if let Some(hasher) = this.hasher.as_mut() {
                    hasher.update(&chunk);
                    this.bytes += chunk.len() as u64;
                }
                Poll::Ready(Some(Ok(chunk)))
            }
            Some(Err(e)) => {
                this.hasher = None;
                this.done = None;
                Poll::Ready(Some(Err(e)))
            }
            None => {
                if let (Some(hasher), Some(done)) = (this.hasher.take(), this.done.take()) {
                    let _ = done.send((hasher.finalize(), this.bytes));
                }
                Poll::Ready(None)
            }
        }
    }
}
