use blobsum_pipeline::{Job, JobOutcome, JobRunner, VerificationJob};
use blobsum_store::FsStore;
use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct VerifyArg {
    /// Container holding the blob and its reference blobs
    #[arg(long)]
    pub container: String,

    /// Blob to verify
    #[arg(long)]
    pub file: String,

    /// Blob holding the expected hex SHA-1
    #[arg(long)]
    pub checksum_file: String,

    /// Blob holding the expected archive listing
    #[arg(long)]
    pub listing_file: Option<String>,

    /// Exit with an error when any comparison fails
    #[arg(long)]
    pub fail_on_mismatch: bool,
}

impl VerifyArg {
    pub async fn run(self, runner: &JobRunner<FsStore>) -> anyhow::Result<()> {
        let job = VerificationJob::in_container(
            &self.container,
            &self.file,
            &self.checksum_file,
            self.listing_file.as_deref(),
        );

        let report = match runner.spawn(Job::Verify(job)).join().await? {
            JobOutcome::Verified(report) => report,
            other => anyhow::bail!("unexpected outcome for verification: {other:?}"),
        };

        println!("{}", report.result);
        println!("result: {}", report.result_blob);
        anyhow::ensure!(
            !self.fail_on_mismatch || report.result.is_valid(),
            "verification of {} failed",
            report.result.subject
        );
        Ok(())
    }
}
