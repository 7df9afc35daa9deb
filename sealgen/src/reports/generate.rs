//! Generate command report data structures.

use std::path::PathBuf;

use sealgen_codegen::PreviewFile;

use super::{
    DeclarationCounts, plural,
    output::{Output, Report},
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub counts: DeclarationCounts,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files that were created or updated.
    pub written: Vec<String>,
    /// Files that already had the generated content.
    pub unchanged: Vec<String>,
    /// Whether generation stopped before every file was produced.
    pub cancelled: bool,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if written.cancelled {
            out.warning("generation was cancelled; some files were not written");
        }

        out.key_value("Declarations", &self.counts.to_string());
        out.key_value("Generated", &written.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for file in &written.written {
                out.added_item(file);
            }
        }

        if !written.unchanged.is_empty() {
            out.newline();
            out.key_value("Unchanged", &plural(written.unchanged.len(), "file"));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} would be generated from {}",
            plural(files.len(), "file"),
            self.counts
        ));
    }
}
