use std::path::PathBuf;

use anyhow::Context as _;

use crate::foundation::error::CropResult;

/// A finished export: encoded PNG bytes plus the filename they should be saved under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub png: Vec<u8>,
}

/// Destination for finished artifacts.
///
/// Sinks only ever see fully encoded artifacts, so a cancelled export leaves nothing behind.
pub trait ArtifactSink: Send {
    /// Store one artifact, returning where it went.
    fn put(&mut self, artifact: ExportArtifact) -> CropResult<PathBuf>;
}

/// Writes artifacts as files under one directory, creating it on first use.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn put(&mut self, artifact: ExportArtifact) -> CropResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        let path = self.dir.join(&artifact.filename);
        std::fs::write(&path, &artifact.png)
            .with_context(|| format!("write artifact '{}'", path.display()))?;
        tracing::info!(path = %path.display(), bytes = artifact.png.len(), "artifact written");
        Ok(path)
    }
}

/// Keeps artifacts in memory, in arrival order.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub(crate) artifacts: Vec<ExportArtifact>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artifacts(&self) -> &[ExportArtifact] {
        &self.artifacts
    }
}

impl ArtifactSink for InMemorySink {
    fn put(&mut self, artifact: ExportArtifact) -> CropResult<PathBuf> {
        let path = PathBuf::from(&artifact.filename);
        self.artifacts.push(artifact);
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
