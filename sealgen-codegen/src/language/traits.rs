//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::{Result, WrapErr};
use sealgen_core::{GeneratedFile, WriteResult};

use crate::generation::BatchOutput;

/// Trait for language-specific code generators.
///
/// Implementors only synthesize; previewing and writing are shared.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "csharp")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "cs")
    fn file_extension(&self) -> &'static str;

    /// Synthesize every artifact of the batch, in a deterministic order.
    fn artifacts(&self) -> BatchOutput;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile> {
        self.artifacts()
            .artifacts
            .into_iter()
            .map(|a| PreviewFile {
                path: a.hint_name,
                content: a.text,
            })
            .collect()
    }

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let batch = self.artifacts();
        let mut result = GenerateResult {
            cancelled: batch.cancelled,
            ..GenerateResult::default()
        };

        for artifact in &batch.artifacts {
            let written = artifact
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write {}", artifact.hint_name))?;
            match written {
                WriteResult::Written => result.written.push(artifact.hint_name.clone()),
                WriteResult::Unchanged => result.unchanged.push(artifact.hint_name.clone()),
            }
        }

        Ok(result)
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were created or updated
    pub written: Vec<String>,
    /// Files whose content was already up to date
    pub unchanged: Vec<String>,
    /// Whether generation stopped early on cancellation
    pub cancelled: bool,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

#[cfg(test)]
mod tests {
    use sealgen_core::Artifact;
    use tempfile::TempDir;

    use super::*;

    struct Fixed(Vec<Artifact>);

    impl LanguageCodegen for Fixed {
        fn language(&self) -> &'static str {
            "test"
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn artifacts(&self) -> BatchOutput {
            BatchOutput {
                artifacts: self.0.clone(),
                cancelled: false,
            }
        }
    }

    #[test]
    fn test_preview_maps_hint_names() {
        let generator = Fixed(vec![Artifact::new("A.g.cs", "a")]);
        let files = generator.preview();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "A.g.cs");
        assert_eq!(files[0].content, "a");
    }

    #[test]
    fn test_generate_reports_unchanged_on_second_run() {
        let temp = TempDir::new().unwrap();
        let generator = Fixed(vec![Artifact::new("A.g.cs", "a"), Artifact::new("B.g.cs", "b")]);

        let first = generator.generate(temp.path()).unwrap();
        let second = generator.generate(temp.path()).unwrap();

        assert_eq!(first.written, ["A.g.cs", "B.g.cs"]);
        assert!(first.unchanged.is_empty());
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged, ["A.g.cs", "B.g.cs"]);
    }
}
