use std::io::{self, Read};

use crate::{Digest, Hasher, Result, VerificationError};

/// Reader that hashes data as it passes through.
///
/// Lets a single read of a source feed both a consumer and a digest.
pub struct HashingReader<R, H> {
    reader: R,
    hasher: H,
    bytes:  u64,
}

impl<R, H> HashingReader<R, H> {
    pub fn new(reader: R, hasher: H) -> Self {
        Self {
            reader,
            hasher,
            bytes: 0,
        }
    }

    /// Bytes that have passed through so far.
    pub fn bytes_read(&self) -> u64 { self.bytes }
}

impl<R: Read, H: Hasher> HashingReader<R, H> {
    /// Digest of everything read so far.
    pub fn finish(self) -> Digest { self.hasher.finalize() }

    /// Finalize and compare against `expected`.
    pub fn verify(self, expected: &Digest) -> Result<Digest> {
        let actual = self.finish();
        if actual == *expected {
            Ok(actual)
        } else {
            Err(VerificationError::Mismatch {
                expected: *expected,
                actual,
            })
        }
    }
}

impl<R: Read, H: Hasher> Read for HashingReader<R, H> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            self.hasher.update(&buf[..n]);
            self.bytes += n as u64;
        }
        Ok(n)
    }
}
