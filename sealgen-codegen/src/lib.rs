//! Shared code generation utilities for the sealgen generators.
//!
//! This crate provides the language-agnostic pieces used by the
//! language-specific generators (e.g., `sealgen-codegen-csharp`).
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text emission (CodeBuilder, Scope, Indent)
//! - [`generation`] - Batch driving with cooperative cancellation
//! - [`language`] - The LanguageCodegen trait implemented by generators

pub mod builder;
pub mod generation;
pub mod language;

pub use builder::{CodeBuilder, Indent, Scope};
pub use generation::{BatchOutput, Synthesizer, run_batch};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
