use blobsum_store::{BlobStore, FsStore};
use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct LsArg {
    #[arg(long)]
    pub container: String,
}

impl LsArg {
    pub async fn run(self, store: &FsStore) -> anyhow::Result<()> {
        for name in store.list(&self.container).await? {
            println!("{name}");
        }
        Ok(())
    }
}
