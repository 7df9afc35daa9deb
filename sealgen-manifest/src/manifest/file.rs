use std::path::{Path, PathBuf};

use super::{Manifest, parse_manifest};
use crate::{Error, Result};

/// A sealgen.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct SealgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl SealgenToml {
    /// Open and parse a sealgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let manifest = parse_manifest(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The `[output] directory`, resolved against the manifest's directory.
    pub fn output_dir(&self) -> PathBuf {
        let base = self.path.parent().unwrap_or_else(|| Path::new("."));
        base.join(&self.manifest.output.directory)
    }
}
