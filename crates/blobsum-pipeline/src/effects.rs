//! Storage and filesystem effects.

mod guard;
mod runner;
mod tee;
mod upload;
mod verify;

pub use runner::{Job, JobHandle, JobOutcome, JobRunner};
pub use upload::UploadPipeline;
pub use verify::ChecksumVerifier;
