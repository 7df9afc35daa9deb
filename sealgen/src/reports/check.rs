//! Check command report data structures.

use std::path::PathBuf;

use super::{
    DeclarationCounts, plural,
    output::{Output, Report},
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub counts: DeclarationCounts,
    /// Number of files generation would produce.
    pub file_count: usize,
    /// Where generation writes by default.
    pub output_dir: PathBuf,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value_indented("Declarations", &self.counts.to_string());
        out.key_value_indented("Files", &plural(self.file_count, "file"));
        out.key_value_indented("Output", &self.output_dir.display().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: PathBuf::from("sealgen.toml"),
            counts: DeclarationCounts {
                enums: 2,
                unions: 1,
                lambdas: 0,
            },
            file_count: 3,
            output_dir: PathBuf::from("Generated"),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.text(),
            "✓ sealgen.toml is valid\n\n  Declarations: 2 enums, 1 union, 0 lambdas\n  Files: 3 files\n  Output: Generated"
        );
    }
}
