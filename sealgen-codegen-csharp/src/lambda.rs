//! Constructors and methods exposed as static `Func` values.

use indexmap::IndexMap;
use sealgen_codegen::{CodeBuilder, Synthesizer};
use sealgen_core::Artifact;
use sealgen_ir::{CallableDescriptor, LambdaTarget, TypeScope};

use crate::{hierarchy::open_type_hierarchy, syntax::write_preamble};

/// Callables that are emitted into the same type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaGroup {
    pub namespace: String,
    pub hierarchy: Vec<TypeScope>,
    pub callables: Vec<CallableDescriptor>,
}

impl LambdaGroup {
    /// `Namespace.Outer.Inner`1_Lambdas.g.cs`
    pub fn hint_name(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.hierarchy.len() + 1);
        if !self.namespace.is_empty() {
            parts.push(self.namespace.clone());
        }
        parts.extend(self.hierarchy.iter().map(TypeScope::metadata_name));
        format!("{}_Lambdas.g.cs", parts.join("."))
    }
}

/// Group callables by namespace and type hierarchy.
///
/// Scopes are matched by name and arity, so every group has a distinct
/// [`hint_name`](LambdaGroup::hint_name). The first callable of a group
/// decides how its types are re-declared. Groups appear in the order their
/// first callable appears, and callables keep their relative order inside
/// a group.
pub fn group_callables(callables: &[CallableDescriptor]) -> Vec<LambdaGroup> {
    let mut groups: IndexMap<(&str, Vec<String>), LambdaGroup> = IndexMap::new();
    for callable in callables {
        groups
            .entry(callable.scope_key())
            .or_insert_with(|| LambdaGroup {
                namespace: callable.containing_namespace.clone(),
                hierarchy: callable.type_hierarchy.clone(),
                callables: Vec::new(),
            })
            .callables
            .push(callable.clone());
    }

    groups.into_values().collect()
}

/// Generates one file per [`LambdaGroup`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LambdaGenerator;

impl LambdaGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the bindings of a group inside its re-opened type hierarchy.
    ///
    /// Returns `None` when there is no enclosing type to hold the bindings.
    pub fn render(&self, group: &LambdaGroup) -> Option<String> {
        if group.hierarchy.is_empty() {
            return None;
        }

        let mut builder = CodeBuilder::csharp();
        write_preamble(&mut builder, &["System"], &group.namespace);
        {
            let mut scope = open_type_hierarchy(&mut builder, &group.hierarchy);
            for (index, callable) in group.callables.iter().enumerate() {
                if index > 0 {
                    scope.push_blank();
                }
                write_binding(&mut scope, callable);
            }
        }

        Some(builder.build())
    }
}

impl Synthesizer for LambdaGenerator {
    type Descriptor = LambdaGroup;

    fn name(&self) -> &'static str {
        "lambda"
    }

    fn synthesize(&self, group: &LambdaGroup) -> Option<Artifact> {
        self.render(group)
            .map(|text| Artifact::new(group.hint_name(), text))
    }
}

fn write_binding(builder: &mut CodeBuilder, callable: &CallableDescriptor) {
    let name = &callable.type_or_method_name;
    let summary = match callable.target {
        LambdaTarget::Constructor => format!("The {} constructor as a Func.", name),
        LambdaTarget::Method => format!("The {} method as a Func.", name),
    };
    builder.push_doc_summary(&summary);

    let mut func_args: Vec<&str> = callable
        .parameters
        .iter()
        .map(|p| p.fully_qualified_type_name.as_str())
        .collect();
    func_args.push(&callable.return_type);

    let arguments = callable
        .parameters
        .iter()
        .map(|p| p.parameter_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let invocation = match callable.target {
        LambdaTarget::Constructor => format!("new({})", arguments),
        LambdaTarget::Method => format!("{}({})", name, arguments),
    };

    builder.push_line(&format!(
        "public static readonly Func<{}> {} = ({}) => {};",
        func_args.join(", "),
        callable.target.binding_name(name),
        arguments,
        invocation
    ));
}
