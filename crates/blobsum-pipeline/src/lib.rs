//! Upload and checksum verification pipelines over a blob store.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Job parameters, options and results
//! - [`rules`] - Pure naming and comparison rules
//! - [`effects`] - Storage and filesystem I/O: the verifier, the upload
//!   pipeline and the job runner
//!
//! Every job owns its parameters from the moment it is spawned and runs to
//! completion on its own task. Local copies of blob content live in a scratch
//! workspace that is removed on every exit path, including cancellation.

pub mod data;
pub mod effects;
mod error;
pub mod rules;

pub use data::{
    ListingFailure, PipelineOptions, UploadJob, UploadReport, UploadSource, VerificationJob,
    VerificationReport, VerificationResult,
};
pub use effects::{ChecksumVerifier, Job, JobHandle, JobOutcome, JobRunner, UploadPipeline};
pub use error::{JobError, Result};

pub use blobsum_store::{BlobRef, BlobStore};
pub use tokio_util::sync::CancellationToken;
