use std::io::{self, Read};

use crate::{Digest, Hasher, HashingReader, Sha1Hasher};

/// Chunk size used when none is configured: 4 MiB.
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024 * 1024;

fn check_chunk_size(chunk_size: usize) -> io::Result<()> {
    if chunk_size == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "chunk size must be non-zero",
        ));
    }
    Ok(())
}

/// Digest a reader to EOF, `chunk_size` bytes at a time.
///
/// Consumes the reader; the result equals [`Sha1Hasher::digest`] over the
/// whole content regardless of chunk size.
pub fn hash_reader<R: Read>(reader: R, chunk_size: usize) -> io::Result<Digest> {
    check_chunk_size(chunk_size)?;
    let mut reader = HashingReader::new(reader, Sha1Hasher::new());
    let mut buffer = vec![0u8; chunk_size];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(reader.finish())
}

/// Async counterpart of [`hash_reader`].
#[cfg(feature = "tokio")]
pub async fn hash_async_reader<R>(mut reader: R, chunk_size: usize) -> io::Result<Digest>
where
    R: tokio::io::AsyncRead + Unpin,
{
    use tokio::io::AsyncReadExt;

    check_chunk_size(chunk_size)?;
    let mut hasher = Sha1Hasher::new();
    let mut buffer = vec![0u8; chunk_size];
    loop {
        let n = match reader.read(&mut buffer).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
    }
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Yields at most `limit` bytes per read to force many small chunks.
    struct Trickle<R> {
        inner: R,
        limit: usize,
    }

    impl<R: Read> Read for Trickle<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let len = buf.len().min(self.limit);
            self.inner.read(&mut buf[..len])
        }
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = hash_reader(Cursor::new(b"abc"), 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn short_reads_do_not_change_digest() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let reader = Trickle {
            inner: Cursor::new(&data),
            limit: 7,
        };
        assert_eq!(
            hash_reader(reader, 4096).unwrap(),
            Sha1Hasher::digest(&data)
        );
    }

    #[test]
    fn read_errors_surface() {
        let err = hash_reader(Failing, 16).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn empty_input_hashes_to_empty_digest() {
        assert_eq!(
            hash_reader(io::empty(), DEFAULT_CHUNK_SIZE).unwrap(),
            Sha1Hasher::digest(b"")
        );
    }

    #[cfg(feature = "tokio")]
    #[tokio::test]
    async fn async_reader_matches_sync() {
        let data = b"the quick brown fox jumps over the lazy dog".repeat(100);
        let digest = hash_async_reader(&data[..], 13).await.unwrap();
        assert_eq!(digest, hash_reader(&data[..], 4096).unwrap());
    }
}
