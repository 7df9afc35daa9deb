//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

use std::fmt;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, WrittenResult};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
use sealgen_manifest::Manifest;

/// Number of declarations of each kind in a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationCounts {
    pub enums: usize,
    pub unions: usize,
    pub lambdas: usize,
}

impl DeclarationCounts {
    pub fn of(manifest: &Manifest) -> Self {
        Self {
            enums: manifest.enums.len(),
            unions: manifest.unions.len(),
            lambdas: manifest.lambdas.len(),
        }
    }
}

impl fmt::Display for DeclarationCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            plural(self.enums, "enum"),
            plural(self.unions, "union"),
            plural(self.lambdas, "lambda")
        )
    }
}

/// `1 file`, `2 files`
pub fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
