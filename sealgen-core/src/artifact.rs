use std::path::{Path, PathBuf};

use crate::GeneratedFile;

/// A named piece of generated source.
///
/// The hint name is unique within one batch and doubles as the file name
/// when a host persists the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub hint_name: String,
    pub text: String,
}

impl Artifact {
    pub fn new(hint_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            hint_name: hint_name.into(),
            text: text.into(),
        }
    }
}

impl GeneratedFile for Artifact {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.hint_name)
    }

    fn render(&self) -> String {
        self.text.clone()
    }
}
