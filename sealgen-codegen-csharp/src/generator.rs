//! C# generator over a whole descriptor batch.

use sealgen_codegen::{BatchOutput, LanguageCodegen, run_batch};
use sealgen_core::CancellationToken;
use sealgen_ir::DescriptorSet;

use crate::{EnumMatchGenerator, LambdaGenerator, UnionGenerator, group_callables};

/// C# code generator that runs every engine over a [`DescriptorSet`].
///
/// Artifacts are produced in a fixed order: enum matches, then unions, then
/// lambda groups, each in descriptor order.
pub struct Generator {
    set: DescriptorSet,
    cancel: CancellationToken,
}

impl Generator {
    pub fn new(set: DescriptorSet) -> Self {
        Self {
            set,
            cancel: CancellationToken::new(),
        }
    }

    /// Stop between descriptors once `cancel` is triggered.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// The descriptors this generator was built from.
    pub fn descriptors(&self) -> &DescriptorSet {
        &self.set
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn artifacts(&self) -> BatchOutput {
        let mut output = run_batch(&EnumMatchGenerator, &self.set.enum_matches, &self.cancel);
        if output.cancelled {
            return output;
        }

        output.merge(run_batch(&UnionGenerator, &self.set.unions, &self.cancel));
        if output.cancelled {
            return output;
        }

        let groups = group_callables(&self.set.lambdas);
        output.merge(run_batch(&LambdaGenerator, &groups, &self.cancel));
        output
    }
}

#[cfg(test)]
mod tests {
    use sealgen_ir::VariantSetDescriptor;
    use tempfile::TempDir;

    use super::*;

    fn set() -> DescriptorSet {
        DescriptorSet {
            enum_matches: vec![VariantSetDescriptor {
                full_type_name: "Acme.Color".to_string(),
                hint_name: "Acme.Color".to_string(),
                declared_identifier: "Color".to_string(),
                containing_scope: "Acme".to_string(),
                members: vec!["Red".to_string()],
            }],
            ..DescriptorSet::default()
        }
    }

    #[test]
    fn test_language() {
        let generator = Generator::new(DescriptorSet::default());
        assert_eq!(generator.language(), "csharp");
        assert_eq!(generator.file_extension(), "cs");
    }

    #[test]
    fn test_empty_set_generates_nothing() {
        let output = Generator::new(DescriptorSet::default()).artifacts();
        assert!(output.artifacts.is_empty());
        assert!(!output.cancelled);
    }

    #[test]
    fn test_generate_writes_and_then_reports_unchanged() {
        let temp = TempDir::new().unwrap();
        let generator = Generator::new(set());

        let first = generator.generate(temp.path()).unwrap();
        assert_eq!(first.written, ["Acme.Color.g.cs"]);

        let second = generator.generate(temp.path()).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged, ["Acme.Color.g.cs"]);
    }

    #[test]
    fn test_cancelled_before_start() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let output = Generator::new(set()).with_cancellation(cancel).artifacts();
        assert!(output.cancelled);
        assert!(output.artifacts.is_empty());
    }
}
