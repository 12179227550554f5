use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid archive: {0}")]
    Format(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Classify an error raised while decoding.
    ///
    /// The bzip2 and tar decoders report structural problems as `io::Error`
    /// with `InvalidData`/`InvalidInput`/`UnexpectedEof`, or as `Other` from
    /// the tar parser; those become [`Error::Format`]. Everything else is an
    /// I/O failure of the underlying source.
    pub(crate) fn decoding(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::InvalidData
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::UnexpectedEof
            | io::ErrorKind::Other => Self::Format(err.to_string()),
            _ => Self::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
