//! Streaming digest primitives for blob integrity checks.
//!
//! Content is hashed incrementally in bounded chunks so that blobs of any
//! size can be digested without being held in memory. The digest is fixed to
//! SHA-1, the format used by the `.sha1` sidecar blobs.
//!
//! # Example
//!
//! ```
//! use blobsum_verify::{hash_reader, Sha1Hasher, DEFAULT_CHUNK_SIZE};
//!
//! let data = b"hello world";
//! let digest = hash_reader(&data[..], DEFAULT_CHUNK_SIZE).unwrap();
//!
//! assert_eq!(digest, Sha1Hasher::digest(data));
//! assert!(digest.matches_hex("2AAE6C35C94FCFB415DBE95F408B9CE91EE846ED"));
//! ```

pub use self::digest::Digest;
pub use self::error::{Result, VerificationError};
pub use self::hasher::{Hasher, Sha1Hasher};
pub use self::reader::HashingReader;
pub use self::stream::{DEFAULT_CHUNK_SIZE, hash_reader};

#[cfg(feature = "tokio")]
pub use self::stream::hash_async_reader;

mod digest;
mod error;
mod hasher;
mod reader;
mod stream;
