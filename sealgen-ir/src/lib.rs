//! Descriptor types for the sealgen generators.
//!
//! Descriptors are the only input the synthesis engines accept. They are
//! produced once by a front end (the TOML manifest, or any other host that
//! can resolve declarations), never mutated afterwards, and consumed by
//! exactly one engine call.
//!
//! # Architecture
//!
//! ```text
//! sealgen.toml → sealgen-manifest (lowering) → sealgen-ir → sealgen-codegen-csharp → artifacts
//! ```
//!
//! The types here carry no generation logic beyond small naming helpers,
//! and the order of every sequence is part of the descriptor's contract.

mod callable;
mod enum_match;
mod parameter;
mod set;
mod union;

pub use callable::{CallableDescriptor, LambdaTarget, TypeKind, TypeScope};
pub use enum_match::VariantSetDescriptor;
pub use parameter::ParameterDescriptor;
pub use set::DescriptorSet;
pub use union::{Accessibility, UnionConstructor, UnionDescriptor};

/// Render a generic argument list (`<T, U>`), or nothing when empty.
pub fn generic_suffix(type_parameters: &[String]) -> String {
    if type_parameters.is_empty() {
        String::new()
    } else {
        format!("<{}>", type_parameters.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_suffix() {
        assert_eq!(generic_suffix(&[]), "");
        assert_eq!(generic_suffix(&["T".to_string()]), "<T>");
        assert_eq!(
            generic_suffix(&["TKey".to_string(), "TValue".to_string()]),
            "<TKey, TValue>"
        );
    }
}
