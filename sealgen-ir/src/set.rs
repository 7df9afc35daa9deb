use serde::{Deserialize, Serialize};

use crate::{CallableDescriptor, UnionDescriptor, VariantSetDescriptor};

/// One batch of descriptors handed to the generators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorSet {
    pub enum_matches: Vec<VariantSetDescriptor>,
    pub unions: Vec<UnionDescriptor>,
    pub lambdas: Vec<CallableDescriptor>,
}

impl DescriptorSet {
    /// Total number of descriptors in the batch.
    pub fn len(&self) -> usize {
        self.enum_matches.len() + self.unions.len() + self.lambdas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
