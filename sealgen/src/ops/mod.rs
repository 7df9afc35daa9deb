//! Core operations.
//!
//! This module contains the business logic for sealgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod inspect;

pub use check::check;
pub use generate::generate;
pub use inspect::inspect;
