//! Generate operation - synthesize and write the C# files.

use std::path::Path;

use eyre::{Context, Result};
use sealgen_codegen::LanguageCodegen;
use sealgen_codegen_csharp::Generator;
use sealgen_manifest::SealgenToml;
use tracing::info;

use crate::reports::{DeclarationCounts, GenerateReport, GenerationResult, WrittenResult};

/// Execute the generate operation.
///
/// `output` overrides the manifest's `[output] directory`. With `dry_run`
/// nothing is written and the report carries the rendered files instead.
pub fn generate(file: &SealgenToml, output: Option<&Path>, dry_run: bool) -> Result<GenerateReport> {
    let manifest = file.manifest();
    let counts = DeclarationCounts::of(manifest);
    let generator = Generator::new(manifest.lower());

    let result = if dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        let output_dir = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| file.output_dir());
        let generated = generator
            .generate(&output_dir)
            .wrap_err("Failed to generate code")?;
        info!(
            written = generated.written.len(),
            unchanged = generated.unchanged.len(),
            output = %output_dir.display(),
            "generation finished"
        );

        GenerationResult::Written(WrittenResult {
            output_dir,
            written: generated.written,
            unchanged: generated.unchanged,
            cancelled: generated.cancelled,
        })
    };

    Ok(GenerateReport { counts, result })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
[output]
directory = "Generated"

[[enum]]
namespace = "Acme"
name = "Color"
members = ["Red", "Green"]

[[union]]
namespace = "Acme"
name = "Shape"

[[union.variant]]
name = "Circle"
parameters = [{ name = "radius", type = "double" }]
"#;

    fn open(temp: &TempDir) -> SealgenToml {
        open_with(temp, MANIFEST)
    }

    fn open_with(temp: &TempDir, content: &str) -> SealgenToml {
        let path = temp.path().join("sealgen.toml");
        fs::write(&path, content).unwrap();
        SealgenToml::open(&path).unwrap()
    }

    #[test]
    fn test_writes_into_manifest_output_dir() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp);

        let report = generate(&file, None, false).unwrap();
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.written, ["Acme.Color.g.cs", "Shape_Union.g.cs"]);

        let color = fs::read_to_string(temp.path().join("Generated/Acme.Color.g.cs")).unwrap();
        assert!(color.contains("public static partial class ColorMatchExtension"));
    }

    #[test]
    fn test_second_run_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp);

        generate(&file, None, false).unwrap();
        let report = generate(&file, None, false).unwrap();
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert!(written.written.is_empty());
        assert_eq!(written.unchanged.len(), 2);
    }

    #[test]
    fn test_output_override() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp);
        let elsewhere = temp.path().join("elsewhere");

        generate(&file, Some(elsewhere.as_path()), false).unwrap();
        assert!(elsewhere.join("Shape_Union.g.cs").exists());
        assert!(!temp.path().join("Generated").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let file = open(&temp);

        let report = generate(&file, None, true).unwrap();
        let GenerationResult::Preview(files) = report.result else {
            panic!("expected preview");
        };
        assert_eq!(files.len(), 2);
        assert!(!temp.path().join("Generated").exists());
    }

    #[test]
    fn test_lambdas_in_one_type_share_a_file() {
        let temp = TempDir::new().unwrap();
        let file = open_with(
            &temp,
            r#"
[[lambda]]
namespace = "Acme"
scopes = [{ kind = "class", name = "Ops", static = true }]
target = "method"
name = "Add"
returns = "int"

[[lambda]]
namespace = "Acme"
scopes = [{ kind = "class", name = "Ops", static = true }]
target = "method"
name = "Sub"
returns = "int"

[[lambda]]
namespace = "Acme"
scopes = [{ kind = "class", name = "Ops", type_parameters = ["T"] }]
target = "method"
name = "Sub"
returns = "T"
"#,
        );

        let report = generate(&file, None, false).unwrap();
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.written, ["Acme.Ops_Lambdas.g.cs", "Acme.Ops`1_Lambdas.g.cs"]);

        let ops = fs::read_to_string(written.output_dir.join("Acme.Ops_Lambdas.g.cs")).unwrap();
        assert!(ops.contains("Addλ = () => Add();"));
        assert!(ops.contains("Subλ = () => Sub();"));
        let generic = fs::read_to_string(written.output_dir.join("Acme.Ops`1_Lambdas.g.cs")).unwrap();
        assert!(generic.contains("public static readonly Func<T> Subλ"));
    }
}
