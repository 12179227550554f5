//! Job parameters, options and results.

mod job;
mod options;
mod result;

pub use job::{UploadJob, UploadSource, VerificationJob};
pub use options::{ListingFailure, PipelineOptions};
pub use result::{UploadReport, VerificationReport, VerificationResult};
