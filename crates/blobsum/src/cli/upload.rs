use std::path::PathBuf;

use anyhow::Context;
use blobsum_fs::TransientFile;
use blobsum_pipeline::{Job, JobOutcome, JobRunner, UploadJob};
use blobsum_store::FsStore;
use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct UploadArg {
    /// Local file to upload
    pub file: PathBuf,

    /// Destination container, created if missing
    #[arg(long)]
    pub container: String,

    /// Blob name; defaults to the file name
    #[arg(long)]
    pub name: Option<String>,
}

impl UploadArg {
    pub async fn run(self, runner: &JobRunner<FsStore>) -> anyhow::Result<()> {
        let name = match self.name {
            Some(name) => name,
            None => self
                .file
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .with_context(|| format!("cannot derive a blob name from {}", self.file.display()))?,
        };

        let staged = TransientFile::stage(&self.file)
            .await
            .with_context(|| format!("failed to stage {}", self.file.display()))?;
        let job = UploadJob::transient(staged, &self.container, &name);

        match runner.spawn(Job::Upload(job)).join().await? {
            JobOutcome::Uploaded(report) => {
                println!("{} {}", report.digest, report.destination);
                Ok(())
            }
            other => anyhow::bail!("unexpected outcome for upload: {other:?}"),
        }
    }
}
