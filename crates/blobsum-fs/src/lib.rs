//! Transient local storage scoped to one job.
//!
//! A [`Workspace`] is a private scratch directory; a [`TransientFile`] is a
//! single file in it. Both are removed when dropped, so cleanup happens on
//! every exit path of the code holding them.

mod error;
mod transient;
mod workspace;

pub use error::{Error, Result};
pub use transient::TransientFile;
pub use workspace::Workspace;
