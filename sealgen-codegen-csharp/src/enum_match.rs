//! `Match` extension methods for enums.

use sealgen_codegen::{CodeBuilder, Synthesizer};
use sealgen_core::Artifact;
use sealgen_ir::VariantSetDescriptor;

use crate::syntax::{fresh_name, write_parameter_lines, write_preamble};

/// How each variant's arm produces the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArmKind {
    /// `Func<TResult>` per variant, invoked when matched.
    Thunk,
    /// `TResult` per variant, returned when matched.
    Value,
}

/// Names the generated methods introduce, kept clear of the variant names.
struct MatchNames {
    result: String,
    source: String,
}

/// Generates a static extension class with two exhaustive `Match` methods
/// (thunk arms and value arms) for one enum.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnumMatchGenerator;

impl EnumMatchGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the extension class, or `None` for an enum without members.
    pub fn render(&self, descriptor: &VariantSetDescriptor) -> Option<String> {
        if descriptor.is_empty() {
            return None;
        }

        let taken: Vec<&str> = descriptor.members.iter().map(String::as_str).collect();
        let names = MatchNames {
            result: fresh_name("TMatchResult", &taken),
            source: fresh_name("source", &taken),
        };

        let mut builder = CodeBuilder::csharp();
        write_preamble(&mut builder, &["System"], &descriptor.containing_scope);
        builder.push_line(&format!(
            "public static partial class {}MatchExtension",
            descriptor.declared_identifier
        ));
        {
            let mut class = builder.block();
            write_match_method(&mut class, descriptor, &names, ArmKind::Thunk);
            class.push_blank();
            write_match_method(&mut class, descriptor, &names, ArmKind::Value);
        }

        Some(builder.build())
    }
}

impl Synthesizer for EnumMatchGenerator {
    type Descriptor = VariantSetDescriptor;

    fn name(&self) -> &'static str {
        "enum-match"
    }

    fn synthesize(&self, descriptor: &VariantSetDescriptor) -> Option<Artifact> {
        self.render(descriptor)
            .map(|text| Artifact::new(format!("{}.g.cs", descriptor.hint_name), text))
    }
}

fn write_match_method(
    builder: &mut CodeBuilder,
    descriptor: &VariantSetDescriptor,
    names: &MatchNames,
    kind: ArmKind,
) {
    let enum_type = &descriptor.full_type_name;
    let MatchNames { result, source } = names;

    builder.push_doc_summary("Perform an exhaustive match on the enum value.");
    builder.push_line("[System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverage]");

    let mut params = Vec::with_capacity(descriptor.members.len() + 1);
    params.push(format!("this {} {}", enum_type, source));
    params.extend(descriptor.members.iter().map(|member| match kind {
        ArmKind::Thunk => format!("Func<{}> {}", result, member),
        ArmKind::Value => format!("{} {}", result, member),
    }));
    write_parameter_lines(
        builder,
        &format!("public static {result} Match<{result}>"),
        &params,
        &format!(" => {} switch", source),
    );

    let mut arms = builder.block_with("{", "};");
    for member in &descriptor.members {
        match kind {
            ArmKind::Thunk => arms.push_line(&format!("{}.{} => {}(),", enum_type, member, member)),
            ArmKind::Value => arms.push_line(&format!("{}.{} => {},", enum_type, member, member)),
        };
    }
    arms.push_line(&format!(
        "_ => throw new ArgumentOutOfRangeException(nameof({}), {}, \"Not a declared member of {}.\")",
        source, source, enum_type
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(members: &[&str]) -> VariantSetDescriptor {
        VariantSetDescriptor {
            full_type_name: "Acme.Color".to_string(),
            hint_name: "Acme.Color".to_string(),
            declared_identifier: "Color".to_string(),
            containing_scope: "Acme".to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_members_is_noop() {
        assert!(EnumMatchGenerator.render(&color(&[])).is_none());
        assert!(EnumMatchGenerator.synthesize(&color(&[])).is_none());
    }

    #[test]
    fn test_hint_name() {
        let artifact = EnumMatchGenerator.synthesize(&color(&["Red"])).unwrap();
        assert_eq!(artifact.hint_name, "Acme.Color.g.cs");
    }

    #[test]
    fn test_both_forms_are_generated() {
        let code = EnumMatchGenerator.render(&color(&["Red", "Green"])).unwrap();
        assert!(code.contains("public static partial class ColorMatchExtension"));
        assert!(code.contains("        Func<TMatchResult> Red,\n        Func<TMatchResult> Green) => source switch"));
        assert!(code.contains("        TMatchResult Red,\n        TMatchResult Green) => source switch"));
        assert!(code.contains("        Acme.Color.Red => Red(),\n"));
        assert!(code.contains("        Acme.Color.Red => Red,\n"));
        assert_eq!(code.matches("_ => throw new ArgumentOutOfRangeException").count(), 2);
    }

    #[test]
    fn test_generated_names_avoid_members() {
        let code = EnumMatchGenerator
            .render(&color(&["source", "TMatchResult"]))
            .unwrap();
        assert!(code.contains("public static TMatchResult_ Match<TMatchResult_>("));
        assert!(code.contains("this Acme.Color source_,"));
        assert!(code.contains("Func<TMatchResult_> source,"));
        assert!(code.contains("=> source_ switch"));
    }

    #[test]
    fn test_global_namespace_has_no_namespace_declaration() {
        let mut descriptor = color(&["Red"]);
        descriptor.containing_scope = String::new();
        descriptor.full_type_name = "Color".to_string();

        let code = EnumMatchGenerator.render(&descriptor).unwrap();
        assert!(!code.contains("namespace"));
        assert!(code.contains("this Color source"));
    }
}
