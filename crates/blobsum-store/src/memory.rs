use std::collections::{BTreeMap, HashMap};

use bytes::Bytes;
use futures_util::stream;
use tokio::sync::RwLock;

use crate::{BlobRef, BlobStore, ByteStream, Result, StoreError, collect_stream};

/// Size of the chunks `get` hands out, so readers see a real stream.
const READ_CHUNK: usize = 64 * 1024;

/// In-process blob store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    containers: RwLock<HashMap<String, BTreeMap<String, Bytes>>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    /// Current content of `blob`, if present.
    pub async fn read(&self, blob: &BlobRef) -> Option<Bytes> {
        self.containers
            .read()
            .await
            .get(blob.container())
            .and_then(|c| c.get(blob.name()))
            .cloned()
    }
}

impl BlobStore for MemoryStore {
    async fn get(&self, blob: &BlobRef) -> Result<ByteStream> {
        let body = self
            .read(blob)
            .await
            .ok_or_else(|| StoreError::NotFound(blob.clone()))?;

        let chunks: Vec<_> = (0..body.len())
            .step_by(READ_CHUNK)
            .map(|start| Ok(body.slice(start..body.len().min(start + READ_CHUNK))))
            .collect();
        Ok(Box::pin(stream::iter(chunks)))
    }

    async fn put(&self, blob: &BlobRef, body: ByteStream, overwrite: bool) -> Result<u64> {
        let body = collect_stream(body).await?;
        let len = body.len() as u64;

        let mut containers = self.containers.write().await;
        let container = containers
            .get_mut(blob.container())
            .ok_or_else(|| StoreError::ContainerNotFound(blob.container().to_string()))?;
        if !overwrite && container.contains_key(blob.name()) {
            return Err(StoreError::AlreadyExists(blob.clone()));
        }
        container.insert(blob.name().to_string(), body);
        Ok(len)
    }

    async fn ensure_container(&self, container: &str) -> Result<()> {
        if container.is_empty() {
            return Err(StoreError::InvalidName(container.to_string()));
        }
        self.containers
            .write()
            .await
            .entry(container.to_string())
            .or_default();
        Ok(())
    }

    async fn list(&self, container: &str) -> Result<Vec<String>> {
        self.containers
            .read()
            .await
            .get(container)
            .map(|c| c.keys().cloned().collect())
            .ok_or_else(|| StoreError::ContainerNotFound(container.to_string()))
    }

    async fn exists(&self, blob: &BlobRef) -> Result<bool> { Ok(self.read(blob).await.is_some()) }
}
