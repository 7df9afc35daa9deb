//! Manifest types and parsing for sealgen.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::SealgenToml;
pub use parse::parse_manifest;
use sealgen_ir::{Accessibility, LambdaTarget, TypeKind};
use serde::Deserialize;
use toml::Spanned;

/// Root manifest for sealgen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,

    /// `[[enum]]` declarations
    #[serde(default, rename = "enum")]
    pub enums: Vec<EnumDecl>,

    /// `[[union]]` declarations
    #[serde(default, rename = "union")]
    pub unions: Vec<UnionDecl>,

    /// `[[lambda]]` declarations
    #[serde(default, rename = "lambda")]
    pub lambdas: Vec<LambdaDecl>,
}

impl Manifest {
    /// Number of declarations of every kind.
    pub fn declaration_count(&self) -> usize {
        self.enums.len() + self.unions.len() + self.lambdas.len()
    }
}

/// `[output]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory generated files are written to, relative to the manifest.
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

/// An existing enum to generate `Match` extensions for.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDecl {
    #[serde(default)]
    pub namespace: String,
    pub name: Spanned<String>,
    /// Types the enum is nested in, outer-to-inner.
    #[serde(default)]
    pub containing_types: Vec<String>,
    pub members: Vec<Spanned<String>>,
}

/// A closed union to generate.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnionDecl {
    #[serde(default)]
    pub namespace: String,
    pub name: Spanned<String>,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Extra `using` directives, after the ones every union needs.
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default, rename = "variant")]
    pub variants: Vec<VariantDecl>,
}

/// `[[union.variant]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantDecl {
    pub name: Spanned<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
}

/// A positional parameter: `{ name = "value", type = "T" }`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDecl {
    pub name: Spanned<String>,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A constructor or method to expose as a `Func` value.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LambdaDecl {
    #[serde(default)]
    pub namespace: String,
    /// Enclosing types, outer-to-inner. The innermost one holds the binding.
    pub scopes: Vec<ScopeDecl>,
    pub target: LambdaTarget,
    /// Constructor type name or method name.
    pub name: Spanned<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
    pub returns: String,
}

/// One enclosing type of a lambda: `{ kind = "class", name = "Shapes", static = true }`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeDecl {
    pub kind: TypeKind,
    pub name: Spanned<String>,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}
