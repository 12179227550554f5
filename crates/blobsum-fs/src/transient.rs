use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{Error, Result};

/// A local file deleted when this handle is dropped.
#[derive(Debug)]
pub struct TransientFile {
    path: PathBuf,
}

impl TransientFile {
    /// Take ownership of an existing file; it is deleted on drop.
    pub fn adopt(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    /// Copy `source` into a new transient file in the system temp directory.
    ///
    /// The copy is what gets deleted later; `source` is left alone.
    pub async fn stage(source: impl AsRef<Path>) -> Result<Self> {
        let temp = tempfile::Builder::new()
            .prefix("blobsum-upload-")
            .tempfile()
            .map_err(|source| Error::CreateFile {
                path: std::env::temp_dir(),
                source,
            })?;
        let (_, path) = temp.keep().map_err(|e| Error::CreateFile {
            path: e.file.path().to_path_buf(),
            source: e.error,
        })?;
        let staged = Self::adopt(path);

        tokio::fs::copy(source.as_ref(), staged.path())
            .await
            .map_err(|source| Error::Copy {
                path: staged.path().to_path_buf(),
                source,
            })?;
        Ok(staged)
    }

    pub fn path(&self) -> &Path { &self.path }

    pub async fn open(&self) -> io::Result<tokio::fs::File> { tokio::fs::File::open(&self.path).await }

    pub fn open_sync(&self) -> io::Result<std::fs::File> { std::fs::File::open(&self.path) }
}

impl Drop for TransientFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to remove transient file"),
        }
    }
}
