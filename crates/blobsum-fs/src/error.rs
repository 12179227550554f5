use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create workspace under '{root}': {source}")]
    Create { root: PathBuf, source: io::Error },

    #[error("failed to create '{path}': {source}")]
    CreateFile { path: PathBuf, source: io::Error },

    #[error("failed to copy into '{path}': {source}")]
    Copy { path: PathBuf, source: io::Error },

    #[error("invalid file name: {0:?}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, Error>;
