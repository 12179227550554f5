use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::{Error, Result, TransientFile};

/// A scratch directory removed with everything in it when dropped.
#[derive(Debug)]
pub struct Workspace(TempDir);

impl Workspace {
    /// Create a workspace under the system temp directory.
    pub fn new() -> Result<Self> { Self::new_in(std::env::temp_dir()) }

    /// Create a workspace under `root`, creating `root` if needed.
    pub fn new_in(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let create = |source| Error::Create {
            root: root.to_path_buf(),
            source,
        };
        std::fs::create_dir_all(root).map_err(create)?;
        let dir = tempfile::Builder::new()
            .prefix("blobsum-")
            .tempdir_in(root)
            .map_err(create)?;
        Ok(Self(dir))
    }

    pub fn path(&self) -> &Path { self.0.path() }

    /// Path for a file named `name` directly inside the workspace.
    pub fn file_path(&self, name: &str) -> Result<PathBuf> {
        let plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        if !plain {
            return Err(Error::InvalidName(name.to_string()));
        }
        Ok(self.0.path().join(name))
    }

    /// Create an empty transient file named `name`.
    pub async fn create_file(&self, name: &str) -> Result<TransientFile> {
        let path = self.file_path(name)?;
        tokio::fs::File::create(&path)
            .await
            .map_err(|source| Error::CreateFile {
                path: path.clone(),
                source,
            })?;
        Ok(TransientFile::adopt(path))
    }
}
