//! Core types shared across the sealgen crates.
//!
//! This crate provides the output unit of every generator ([`Artifact`]),
//! the file writer hosts use to persist artifacts, and the
//! cooperative [`CancellationToken`] checked between descriptors.

mod artifact;
mod cancel;
mod file;

pub use artifact::Artifact;
pub use cancel::CancellationToken;
// File operations
pub use file::{File, GeneratedFile, WriteResult};
