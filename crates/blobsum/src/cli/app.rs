use std::path::PathBuf;
use std::sync::Arc;

use blobsum_pipeline::JobRunner;
use blobsum_store::FsStore;
use clap::{Parser, Subcommand};

use super::inspect::{HashArg, ListArg};
use super::ls::LsArg;
use super::upload::UploadArg;
use super::verify::VerifyArg;
use crate::config::Config;

#[derive(Clone, Debug, Parser)]
#[command(name = "blobsum", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Config file; defaults to ./blobsum.toml when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage root, overriding `storage.root`
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "up", name = "upload", about = "Store a file and its .sha1 sidecar")]
    Upload(UploadArg),
    #[command(alias = "v", name = "verify", about = "Verify a stored blob against reference blobs")]
    Verify(VerifyArg),
    #[command(name = "hash", about = "Print the SHA-1 of a local file")]
    Hash(HashArg),
    #[command(name = "list", about = "Print the file listing of a local tar.bz2")]
    List(ListArg),
    #[command(name = "ls", about = "List blobs in a container")]
    Ls(LsArg),
}

impl App {
    pub async fn run(self, mut config: Config) -> anyhow::Result<()> {
        if let Some(root) = self.store {
            config.storage.root = root;
        }
        let store = Arc::new(FsStore::new(&config.storage.root));
        let runner = JobRunner::new(Arc::clone(&store), config.pipeline_options());

        match self.cmd {
            Commands::Upload(arg) => arg.run(&runner).await,
            Commands::Verify(arg) => arg.run(&runner).await,
            Commands::Hash(arg) => arg.run(config.pipeline.chunk_size),
            Commands::List(arg) => arg.run(),
            Commands::Ls(arg) => arg.run(&store).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() { App::command().debug_assert(); }

    #[test]
    fn verify_parses_optional_listing() {
        let app = App::parse_from([
            "blobsum",
            "verify",
            "--container",
            "archives",
            "--file",
            "a.tar.bz2",
            "--checksum-file",
            "a.tar.bz2.sha1",
        ]);
        match app.cmd {
            Commands::Verify(arg) => {
                assert_eq!(arg.container, "archives");
                assert_eq!(arg.listing_file, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let app = App::parse_from(["blobsum", "ls", "--container", "c", "--store", "/tmp/blobs"]);
        assert_eq!(app.store, Some(PathBuf::from("/tmp/blobs")));
    }
}
