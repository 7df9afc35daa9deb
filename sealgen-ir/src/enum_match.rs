use serde::{Deserialize, Serialize};

/// A closed set of named variants to generate `Match` extensions for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSetDescriptor {
    /// Fully qualified display name, including enclosing types (`Acme.Invoice.Status`).
    pub full_type_name: String,
    /// Unique name used for the generated artifact.
    pub hint_name: String,
    /// The identifier as declared (`Status`).
    pub declared_identifier: String,
    /// Namespace containing the declaration. Empty for the global namespace.
    pub containing_scope: String,
    /// Variant names in declaration order.
    pub members: Vec<String>,
}

impl VariantSetDescriptor {
    /// Whether there is anything to generate.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
