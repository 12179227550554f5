//! Container-addressed blob storage.
//!
//! [`BlobStore`] is the only view of storage the pipelines have: streamed
//! reads and writes of named blobs inside named containers, with
//! last-write-wins semantics and no transactions.
//!
//! - [`MemoryStore`] keeps blobs in process memory.
//! - [`FsStore`] maps containers to directories under a root.

mod blob;
mod error;
mod fs;
mod memory;
mod store;

pub use blob::BlobRef;
pub use error::{Result, StoreError};
pub use fs::FsStore;
pub use memory::MemoryStore;
pub use store::{BlobStore, ByteStream, collect_stream};
