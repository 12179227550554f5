use std::io;
use std::path::{Path, PathBuf};

use futures_util::TryStreamExt;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::{BlobRef, BlobStore, ByteStream, Result, StoreError};

const TEMP_PREFIX: &str = ".blobsum-put-";

/// Blob store backed by a local directory.
///
/// Each container is a directory under `root`; blob names may contain `/`
/// and map to nested paths. Writes land in a temp file first and are renamed
/// into place, so readers never observe a partial blob.
#[derive(Clone, Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    pub fn root(&self) -> &Path { &self.root }

    fn container_dir(&self, container: &str) -> Result<PathBuf> {
        let plain = !container.is_empty()
            && container != "."
            && container != ".."
            && !container.contains(['/', '\\'])
            && !container.starts_with(TEMP_PREFIX);
        if !plain {
            return Err(StoreError::InvalidName(container.to_string()));
        }
        Ok(self.root.join(container))
    }

    fn blob_path(&self, blob: &BlobRef) -> Result<PathBuf> {
        let mut path = self.container_dir(blob.container())?;
        let invalid = || StoreError::InvalidName(blob.name().to_string());
        if blob.name().is_empty() || blob.name().contains('\\') {
            return Err(invalid());
        }
        for part in blob.name().split('/') {
            if part.is_empty() || part == "." || part == ".." || part.starts_with(TEMP_PREFIX) {
                return Err(invalid());
            }
            path.push(part);
        }
        Ok(path)
    }

    async fn require_container(&self, container: &str) -> Result<PathBuf> {
        let dir = self.container_dir(container)?;
        match tokio::fs::metadata(&dir).await {
            Ok(meta) if meta.is_dir() => Ok(dir),
            Ok(_) => Err(StoreError::ContainerNotFound(container.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::ContainerNotFound(container.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl BlobStore for FsStore {
    async fn get(&self, blob: &BlobRef) -> Result<ByteStream> {
        let path = self.blob_path(blob)?;
        let file = match tokio::fs::File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(blob.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        if file.metadata().await?.is_dir() {
            return Err(StoreError::NotFound(blob.clone()));
        }
        Ok(Box::pin(ReaderStream::new(file)))
    }

    async fn put(&self, blob: &BlobRef, mut body: ByteStream, overwrite: bool) -> Result<u64> {
        let container = self.require_container(blob.container()).await?;
        let dest = self.blob_path(blob)?;

        let temp = tokio::task::spawn_blocking(move || {
            tempfile::Builder::new()
                .prefix(TEMP_PREFIX)
                .tempfile_in(&container)
        })
        .await
        .map_err(io::Error::other)??;
        let (file, temp_path) = temp.into_parts();
        let mut file = tokio::fs::File::from_std(file);

        let mut written = 0u64;
        while let Some(chunk) = body.try_next().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let persisted = tokio::task::spawn_blocking(move || {
            if overwrite {
                temp_path.persist(&dest)
            } else {
                temp_path.persist_noclobber(&dest)
            }
        })
        .await
        .map_err(io::Error::other)?;
        match persisted {
            Ok(()) => {}
            Err(e) if !overwrite && e.error.kind() == io::ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyExists(blob.clone()));
            }
            Err(e) => return Err(e.error.into()),
        }

        debug!(blob = %blob, bytes = written, "stored blob");
        Ok(written)
    }

    async fn ensure_container(&self, container: &str) -> Result<()> {
        let dir = self.container_dir(container)?;
        tokio::fs::create_dir_all(&dir).await?;
        Ok(())
    }

    async fn list(&self, container: &str) -> Result<Vec<String>> {
        let root = self.require_container(container).await?;
        let mut names = Vec::new();
        let mut pending = vec![(root, String::new())];

        while let Some((dir, prefix)) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let file_name = entry.file_name().to_string_lossy().into_owned();
                if file_name.starts_with(TEMP_PREFIX) {
                    continue;
                }
                let name = format!("{prefix}{file_name}");
                if entry.file_type().await?.is_dir() {
                    pending.push((entry.path(), format!("{name}/")));
                } else {
                    names.push(name);
                }
            }
        }
        names.sort();
        Ok(names)
    }

    async fn exists(&self, blob: &BlobRef) -> Result<bool> {
        let path = self.blob_path(blob)?;
        match tokio::fs::metadata(&path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
