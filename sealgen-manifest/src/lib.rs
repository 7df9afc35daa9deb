//! `sealgen.toml` front end.
//!
//! Parses the manifest, validates every declaration with source-span
//! diagnostics ([`miette`]), and lowers it into a
//! [`DescriptorSet`](sealgen_ir::DescriptorSet) for the generators.
//!
//! ```ignore
//! use sealgen_manifest::SealgenToml;
//!
//! let file = SealgenToml::open("sealgen.toml")?;
//! let descriptors = file.manifest().lower();
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;
mod manifest;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use lower::UNION_IMPORTS;
pub use manifest::{
    EnumDecl, LambdaDecl, Manifest, OutputConfig, ParameterDecl, ScopeDecl, SealgenToml,
    UnionDecl, VariantDecl, parse_manifest,
};
pub use validate::ParseContext;
