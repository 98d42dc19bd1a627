use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// MergeRequest - Internal request DTO for the merge use case
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// First SBOM; wins attribute conflicts unless its value is NOASSERTION
    pub first: PathBuf,
    /// Second SBOM
    pub second: PathBuf,
}

impl MergeRequest {
    pub fn new(first: PathBuf, second: PathBuf) -> Self {
        Self { first, second }
    }

    /// Rejects requests the merge must not run on
    ///
    /// Both inputs naming the same document is an error, as is any input
    /// that does not exist. Every missing input is reported to `on_missing`
    /// before the error is returned.
    pub fn validate(&self, mut on_missing: impl FnMut(&Path)) -> Result<()> {
        if self.first == self.second {
            return Err(SbomError::IdenticalInputs {
                path: self.first.clone(),
            }
            .into());
        }

        let missing: Vec<&PathBuf> = [&self.first, &self.second]
            .into_iter()
            .filter(|path| !path.exists())
            .collect();
        for path in &missing {
            on_missing(path);
        }

        if let Some(path) = missing.first() {
            return Err(SbomError::InputNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        if same_document(&self.first, &self.second)? {
            return Err(SbomError::IdenticalInputs {
                path: self.first.clone(),
            }
            .into());
        }
        Ok(())
    }
}

/// True when both paths name one document, however they are spelled
/// (`./x`, absolute path, symbolic or hard link)
fn same_document(first: &Path, second: &Path) -> Result<bool> {
    if fs::canonicalize(first)? == fs::canonicalize(second)? {
        return Ok(true);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let (a, b) = (fs::metadata(first)?, fs::metadata(second)?);
        if a.dev() == b.dev() && a.ino() == b.ino() {
            return Ok(true);
        }
    }

    Ok(false)
}
