//! Batch generation.
//!
//! - [`Synthesizer`] - One engine turning one descriptor into at most one artifact
//! - [`run_batch`] - Drives a synthesizer over a worklist, honouring cancellation
//! - [`BatchOutput`] - Artifacts produced by one or more batches

mod batch;

pub use batch::{BatchOutput, Synthesizer, run_batch};
