use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use blobsum_pipeline::{ListingFailure, PipelineOptions};
use blobsum_verify::DEFAULT_CHUNK_SIZE;
use serde::Deserialize;

/// Read from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG: &str = "blobsum.toml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage:  StorageConfig,
    pub pipeline: PipelineConfig,
    pub log:      LogConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding one sub-directory per container.
    pub root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("blobs"),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub chunk_size:           usize,
    pub storage_timeout_secs: Option<u64>,
    pub listing_failure:      ListingFailure,
    pub scratch_dir:          Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size:           DEFAULT_CHUNK_SIZE,
            storage_timeout_secs: None,
            listing_failure:      ListingFailure::default(),
            scratch_dir:          None,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load `path`, or [`DEFAULT_CONFIG`] if present, or fall back to
    /// defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG).is_file() => Self::from_file(Path::new(DEFAULT_CONFIG)),
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        anyhow::ensure!(config.pipeline.chunk_size > 0, "pipeline.chunk_size must be non-zero");
        Ok(config)
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        let pipeline = &self.pipeline;
        let mut options = PipelineOptions::default()
            .chunk_size(pipeline.chunk_size)
            .listing_failure(pipeline.listing_failure);
        if let Some(secs) = pipeline.storage_timeout_secs {
            options = options.storage_timeout(Duration::from_secs(secs));
        }
        if let Some(dir) = &pipeline.scratch_dir {
            options = options.scratch_dir(dir);
        }
        options
    }
}
