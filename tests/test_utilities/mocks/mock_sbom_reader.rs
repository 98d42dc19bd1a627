use sbom_merge::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock SbomReader serving in-memory documents keyed by path
///
/// Paths must still exist on disk: the use case checks them before reading.
#[derive(Default)]
pub struct MockSbomReader {
    contents: HashMap<PathBuf, String>,
}

impl MockSbomReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.contents.insert(path.into(), content.to_string());
        self
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<String> {
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no mock content for {}", path.display()))
    }
}
