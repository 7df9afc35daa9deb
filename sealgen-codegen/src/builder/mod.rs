//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Mutable writer that tracks indentation depth
//! - [`Scope`] - Guard that closes every block it opened when dropped
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod scope;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use scope::Scope;
