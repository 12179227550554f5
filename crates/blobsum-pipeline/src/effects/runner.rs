use std::sync::Arc;

use blobsum_store::BlobStore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::{ChecksumVerifier, UploadPipeline};
use crate::data::{PipelineOptions, UploadJob, UploadReport, VerificationJob, VerificationReport};
use crate::{JobError, Result};

/// A fully specified unit of work.
#[derive(Debug)]
pub enum Job {
    Verify(VerificationJob),
    Upload(UploadJob),
}

impl Job {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Verify(_) => "verify",
            Self::Upload(_) => "upload",
        }
    }
}

impl From<VerificationJob> for Job {
    fn from(job: VerificationJob) -> Self { Self::Verify(job) }
}

impl From<UploadJob> for Job {
    fn from(job: UploadJob) -> Self { Self::Upload(job) }
}

#[derive(Debug)]
pub enum JobOutcome {
    Verified(VerificationReport),
    Uploaded(UploadReport),
}

/// Starts jobs on their own tasks.
///
/// Each job receives its parameters when it is spawned and shares nothing
/// with other jobs except the store.
pub struct JobRunner<S> {
    store:   Arc<S>,
    options: PipelineOptions,
}

impl<S> Clone for JobRunner<S> {
    fn clone(&self) -> Self {
        Self {
            store:   Arc::clone(&self.store),
            options: self.options.clone(),
        }
    }
}

impl<S: BlobStore + 'static> JobRunner<S> {
    pub fn new(store: Arc<S>, options: PipelineOptions) -> Self { Self { store, options } }

    pub fn store(&self) -> &Arc<S> { &self.store }

    /// Run `job` on the current task.
    pub async fn run(&self, job: Job, cancel: &CancellationToken) -> Result<JobOutcome> {
        let kind = job.kind();
        let outcome = match job {
            Job::Verify(job) => ChecksumVerifier::new(Arc::clone(&self.store), self.options.clone())
                .verify(job, cancel)
                .await
                .map(JobOutcome::Verified),
            Job::Upload(job) => UploadPipeline::new(Arc::clone(&self.store), self.options.clone())
                .upload(job, cancel)
                .await
                .map(JobOutcome::Uploaded),
        };
        match &outcome {
            Ok(_) => info!(kind, "job completed"),
            Err(e) => error!(kind, error = %e, "job failed"),
        }
        outcome
    }

    /// Run `job` on a new task.
    pub fn spawn(&self, job: Job) -> JobHandle {
        let id = Uuid::new_v4();
        let cancel = CancellationToken::new();
        let span = info_span!("job", %id, kind = job.kind());

        let runner = self.clone();
        let token = cancel.clone();
        let task = tokio::spawn(async move { runner.run(job, &token).await }.instrument(span));

        JobHandle { id, cancel, task }
    }
}

/// Handle to a spawned job.
#[derive(Debug)]
pub struct JobHandle {
    id:     Uuid,
    cancel: CancellationToken,
    task:   JoinHandle<Result<JobOutcome>>,
}

impl JobHandle {
    pub fn id(&self) -> Uuid { self.id }

    /// Ask the job to stop. Outstanding storage calls are abandoned and local
    /// copies are still removed.
    pub fn cancel(&self) { self.cancel.cancel(); }

    pub fn is_finished(&self) -> bool { self.task.is_finished() }

    /// Wait for the job to end.
    pub async fn join(self) -> Result<JobOutcome> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(JobError::Cancelled),
            Err(e) => Err(JobError::Aborted(e.to_string())),
        }
    }
}
