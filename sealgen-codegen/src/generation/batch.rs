use sealgen_core::{Artifact, CancellationToken};
use tracing::{debug, info};

/// A synthesis engine for one kind of descriptor.
///
/// Implementations are pure: the same descriptor always yields the same
/// artifact, and nothing is retained between calls.
pub trait Synthesizer {
    type Descriptor;

    /// Engine name used in logs.
    fn name(&self) -> &'static str;

    /// Synthesize one descriptor. `None` means there is nothing to generate.
    fn synthesize(&self, descriptor: &Self::Descriptor) -> Option<Artifact>;
}

/// Artifacts produced by a batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchOutput {
    pub artifacts: Vec<Artifact>,
    /// Whether cancellation cut the batch short.
    pub cancelled: bool,
}

impl BatchOutput {
    /// Append the results of another batch.
    pub fn merge(&mut self, other: BatchOutput) {
        self.artifacts.extend(other.artifacts);
        self.cancelled |= other.cancelled;
    }
}

/// Run `synthesizer` over `descriptors` in order.
///
/// The token is checked once before each descriptor. Once cancelled, the
/// remaining descriptors are skipped and the artifacts produced so far are
/// returned.
pub fn run_batch<S: Synthesizer>(
    synthesizer: &S,
    descriptors: &[S::Descriptor],
    cancel: &CancellationToken,
) -> BatchOutput {
    let mut output = BatchOutput::default();

    for (index, descriptor) in descriptors.iter().enumerate() {
        if cancel.is_cancelled() {
            info!(
                engine = synthesizer.name(),
                remaining = descriptors.len() - index,
                "generation cancelled"
            );
            output.cancelled = true;
            break;
        }

        match synthesizer.synthesize(descriptor) {
            Some(artifact) => {
                debug!(
                    engine = synthesizer.name(),
                    hint = %artifact.hint_name,
                    bytes = artifact.text.len(),
                    "generated artifact"
                );
                output.artifacts.push(artifact);
            }
            None => debug!(engine = synthesizer.name(), index, "nothing to generate"),
        }
    }

    output
}
