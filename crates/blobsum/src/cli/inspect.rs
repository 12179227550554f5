use std::fs::File;
use std::io::{Read, Seek};
use std::path::PathBuf;

use anyhow::Context;
use blobsum_archive::{is_bzip2, list_entries};
use blobsum_verify::hash_reader;
use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct HashArg {
    pub file: PathBuf,
}

impl HashArg {
    pub fn run(self, chunk_size: usize) -> anyhow::Result<()> {
        let file = File::open(&self.file)
            .with_context(|| format!("failed to open {}", self.file.display()))?;
        let digest = hash_reader(file, chunk_size)
            .with_context(|| format!("failed to read {}", self.file.display()))?;
        println!("{digest}  {}", self.file.display());
        Ok(())
    }
}

#[derive(Clone, Debug, Args)]
pub struct ListArg {
    pub archive: PathBuf,
}

impl ListArg {
    pub fn run(self) -> anyhow::Result<()> {
        let mut file = File::open(&self.archive)
            .with_context(|| format!("failed to open {}", self.archive.display()))?;
        let mut magic = [0u8; 4];
        let read = file
            .read(&mut magic)
            .with_context(|| format!("failed to read {}", self.archive.display()))?;
        if !is_bzip2(&magic[..read]) {
            anyhow::bail!("{} is not a bzip2 archive", self.archive.display());
        }
        file.rewind()?;
        let names = list_entries(file)
            .with_context(|| format!("failed to list {}", self.archive.display()))?;
        for name in names {
            println!("{name}");
        }
        Ok(())
    }
}
