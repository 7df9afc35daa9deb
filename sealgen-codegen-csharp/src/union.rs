//! Closed unions: sealed sub-records, smart constructors and `Match`.

use sealgen_codegen::{CodeBuilder, Synthesizer};
use sealgen_core::Artifact;
use sealgen_ir::{UnionConstructor, UnionDescriptor};

use crate::syntax::{fresh_name, write_parameter_lines, write_preamble};

/// Generates the full declaration of one union.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnionGenerator;

impl UnionGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the union source file.
    pub fn render(&self, union: &UnionDescriptor) -> String {
        let base = union.base_type();

        let mut builder = CodeBuilder::csharp();
        write_preamble(
            &mut builder,
            union.namespaces_to_import.as_slice(),
            &union.union_scope,
        );
        builder.push_line(&format!(
            "{} abstract partial record {}",
            union.accessibility, base
        ));
        {
            let mut record = builder.block();
            for constructor in &union.constructors {
                write_variant(&mut record, &base, constructor);
                record.push_blank();
            }
            write_match_method(&mut record, union, &base);
        }

        builder.build()
    }
}

impl Synthesizer for UnionGenerator {
    type Descriptor = UnionDescriptor;

    fn name(&self) -> &'static str {
        "union"
    }

    fn synthesize(&self, union: &UnionDescriptor) -> Option<Artifact> {
        Some(Artifact::new(
            format!("{}_Union.g.cs", union.union_name),
            self.render(union),
        ))
    }
}

/// The sub-record of one variant with its `Of` and `λ` members.
fn write_variant(builder: &mut CodeBuilder, base: &str, constructor: &UnionConstructor) {
    let name = &constructor.member_name;
    let params = constructor.parameter_list();

    if constructor.parameters.is_empty() {
        builder.push_line(&format!("public sealed partial record {} : {}", name, base));
    } else {
        builder.push_line(&format!(
            "public sealed partial record {}({}) : {}",
            name, params, base
        ));
    }

    let mut body = builder.block();
    body.push_doc_summary(&format!("Creates the {} variant as the union base type.", name));
    body.push_line(
        "[global::System.Runtime.CompilerServices.MethodImpl(global::System.Runtime.CompilerServices.MethodImplOptions.AggressiveInlining)]",
    );
    body.push_line("[global::System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverage]");
    body.push_line("[global::System.Diagnostics.DebuggerHidden]");
    body.push_line(&format!(
        "public static {} Of({}) => new {}({});",
        base,
        params,
        name,
        constructor.argument_list()
    ));
    body.push_blank();

    let mut func_args: Vec<&str> = constructor
        .parameters
        .iter()
        .map(|p| p.fully_qualified_type_name.as_str())
        .collect();
    func_args.push(base);

    body.push_doc_summary("<see cref=\"Of\"/> as a Func.");
    body.push_line(&format!(
        "public static readonly global::System.Func<{}> λ = Of;",
        func_args.join(", ")
    ));
}

fn write_match_method(builder: &mut CodeBuilder, union: &UnionDescriptor, base: &str) {
    let taken: Vec<&str> = union
        .constructors
        .iter()
        .map(|c| c.member_name.as_str())
        .chain(union.type_parameters.iter().map(String::as_str))
        .collect();
    let result = fresh_name("TResult", &taken);
    let binding = fresh_name("x", &taken);

    builder.push_doc_summary("Performs an exhaustive match on the union variants.");

    let params: Vec<String> = union
        .constructors
        .iter()
        .map(|c| {
            format!(
                "global::System.Func<{}, {}> {}",
                c.member_name, result, c.member_name
            )
        })
        .collect();
    write_parameter_lines(
        builder,
        &format!("public {result} Match<{result}>"),
        &params,
        " => this switch",
    );

    let mut arms = builder.block_with("{", "};");
    for constructor in &union.constructors {
        let name = &constructor.member_name;
        arms.push_line(&format!("{}.{} {} => {}({}),", base, name, binding, name, binding));
    }
    arms.push_line(&format!(
        "_ => throw new global::System.InvalidOperationException($\"The type '{{this.GetType()}}' is not a known variant of {}.\")",
        base
    ));
}
