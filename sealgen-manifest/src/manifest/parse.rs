//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Manifest;
use crate::{Error, Result, error::SourceContext, validate::ParseContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "sealgen.toml")
    }
}

impl Manifest {
    /// Parse a sealgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a sealgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse and validate a manifest, naming `filename` in diagnostics.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    manifest.validate(&ParseContext::new(content, filename))?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manifest() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest.declaration_count(), 0);
        assert_eq!(manifest.output.directory, Path::new("."));
    }

    #[test]
    fn test_parse_all_sections() {
        let manifest: Manifest = r#"
            [output]
            directory = "Generated"

            [[enum]]
            namespace = "Acme.Billing"
            name = "Status"
            containing_types = ["Invoice"]
            members = ["Pending", "Paid"]

            [[union]]
            namespace = "Acme"
            name = "Result"
            accessibility = "protected internal"
            type_parameters = ["T"]

            [[union.variant]]
            name = "Ok"
            parameters = [{ name = "value", type = "T" }]

            [[union.variant]]
            name = "Err"
            parameters = [{ name = "message", type = "string" }]

            [[lambda]]
            namespace = "Acme"
            scopes = [{ kind = "record_struct", name = "Point", static = false }]
            target = "constructor"
            name = "Point"
            parameters = [{ name = "x", type = "int" }]
            returns = "Acme.Point"
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.output.directory, Path::new("Generated"));
        assert_eq!(manifest.enums[0].members.len(), 2);
        assert_eq!(manifest.enums[0].containing_types, ["Invoice"]);

        let union = &manifest.unions[0];
        assert_eq!(union.accessibility, sealgen_ir::Accessibility::ProtectedInternal);
        assert_eq!(union.variants.len(), 2);
        assert_eq!(union.variants[1].parameters[0].ty, "string");

        let lambda = &manifest.lambdas[0];
        assert_eq!(lambda.scopes[0].kind, sealgen_ir::TypeKind::RecordStruct);
        assert_eq!(lambda.target, sealgen_ir::LambdaTarget::Constructor);
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = Manifest::from_str("[output]\ndir = \"x\"").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Manifest::from_file("/nonexistent/sealgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_filename_is_reported() {
        let err = Manifest::from_str_with_filename("[[enum]]\nname = \"E\"\nmembers = []", "app.toml")
            .unwrap_err();
        match *err {
            Error::EmptyEnum { ref src, .. } => assert_eq!(src.name(), "app.toml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
