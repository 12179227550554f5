#![allow(dead_code)]

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use blobsum_pipeline::{BlobRef, BlobStore, PipelineOptions};
use blobsum_store::MemoryStore;
use bytes::Bytes;

pub const CONTAINER: &str = "archives";

pub fn tar_bz2(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (path, data) in files {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Regular);
        header.set_mode(0o644);
        header.set_size(data.len() as u64);
        builder.append_data(&mut header, path, *data).unwrap();
    }
    let tar = builder.into_inner().unwrap();

    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(&tar).unwrap();
    encoder.finish().unwrap()
}

pub async fn store_with(blobs: &[(&str, &[u8])]) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.ensure_container(CONTAINER).await.unwrap();
    for (name, data) in blobs {
        store
            .put_bytes(&blob(name), Bytes::copy_from_slice(data), true)
            .await
            .unwrap();
    }
    store
}

pub fn blob(name: &str) -> BlobRef { BlobRef::new(CONTAINER, name) }

pub fn scratch() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("blobsum-scratch-")
        .tempdir()
        .unwrap()
}

pub fn options(scratch: &Path) -> PipelineOptions {
    PipelineOptions::default()
        .chunk_size(4096)
        .scratch_dir(scratch)
}

pub fn is_empty_dir(dir: &Path) -> bool {
    std::fs::read_dir(dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or_else(|e| e.kind() == io::ErrorKind::NotFound)
}

pub async fn result_blobs(store: &MemoryStore) -> Vec<String> {
    store
        .list(CONTAINER)
        .await
        .unwrap()
        .into_iter()
        .filter(|name| name.ends_with("_result.txt"))
        .collect()
}
