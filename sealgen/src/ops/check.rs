//! Check operation - manifest validation summary.

use sealgen_codegen::LanguageCodegen;
use sealgen_codegen_csharp::Generator;
use sealgen_manifest::SealgenToml;

use crate::reports::{CheckReport, DeclarationCounts};

/// Execute the check operation.
///
/// Parsing already validated the manifest; this summarises what generation
/// would produce without writing anything.
pub fn check(file: &SealgenToml) -> CheckReport {
    let manifest = file.manifest();
    let generator = Generator::new(manifest.lower());

    CheckReport {
        config_path: file.path().to_path_buf(),
        counts: DeclarationCounts::of(manifest),
        file_count: generator.artifacts().artifacts.len(),
        output_dir: file.output_dir(),
    }
}
