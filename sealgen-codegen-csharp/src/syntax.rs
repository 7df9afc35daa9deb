//! Shared C# syntax fragments.

use sealgen_codegen::CodeBuilder;

/// Marks a file as generated so analyzers and formatters leave it alone.
pub const AUTO_GENERATED_HEADER: &str = "// <auto-generated />";

/// Generated code is written against nullable reference types.
pub const NULLABLE_ENABLE: &str = "#nullable enable";

/// Write the file header, `using` directives and file-scoped namespace.
///
/// An empty namespace means the global namespace and writes no declaration.
pub fn write_preamble<S: AsRef<str>>(builder: &mut CodeBuilder, usings: &[S], namespace: &str) {
    builder.push_line(AUTO_GENERATED_HEADER);
    builder.push_line(NULLABLE_ENABLE);
    for using in usings {
        builder.push_line(&format!("using {};", using.as_ref()));
    }
    builder.push_blank();

    if !namespace.is_empty() {
        builder.push_line(&format!("namespace {};", namespace));
        builder.push_blank();
    }
}

/// `base`, suffixed with underscores until it matches none of `taken`.
///
/// Generated parameter and type-parameter names share a scope with
/// user-declared names; this keeps them apart deterministically.
pub fn fresh_name(base: &str, taken: &[&str]) -> String {
    let mut name = base.to_string();
    while taken.contains(&name.as_str()) {
        name.push('_');
    }
    name
}

/// Write a parenthesised parameter list, one parameter per line.
///
/// `head` is written before the list on the current line and `tail`
/// right after the closing parenthesis. An empty list stays on one line.
pub fn write_parameter_lines(builder: &mut CodeBuilder, head: &str, params: &[String], tail: &str) {
    if params.is_empty() {
        builder.push_line(&format!("{}(){}", head, tail));
        return;
    }

    builder.push_line(&format!("{}(", head));
    builder.push_indent();
    let last = params.len() - 1;
    for (index, param) in params.iter().enumerate() {
        if index == last {
            builder.push_line(&format!("{}){}", param, tail));
        } else {
            builder.push_line(&format!("{},", param));
        }
    }
    builder.push_dedent();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_with_namespace() {
        let mut builder = CodeBuilder::csharp();
        write_preamble(&mut builder, &["System"], "Acme.Billing");
        assert_eq!(
            builder.build(),
            "// <auto-generated />\n#nullable enable\nusing System;\n\nnamespace Acme.Billing;\n\n"
        );
    }

    #[test]
    fn test_preamble_global_namespace() {
        let mut builder = CodeBuilder::csharp();
        write_preamble::<&str>(&mut builder, &[], "");
        assert_eq!(builder.build(), "// <auto-generated />\n#nullable enable\n\n");
    }

    #[test]
    fn test_fresh_name() {
        assert_eq!(fresh_name("source", &["A", "B"]), "source");
        assert_eq!(fresh_name("source", &["source"]), "source_");
        assert_eq!(fresh_name("x", &["x", "x_"]), "x__");
    }

    #[test]
    fn test_parameter_lines() {
        let mut builder = CodeBuilder::csharp();
        write_parameter_lines(
            &mut builder,
            "void M",
            &["int a".to_string(), "int b".to_string()],
            ";",
        );
        assert_eq!(builder.build(), "void M(\n    int a,\n    int b);\n");
    }

    #[test]
    fn test_parameter_lines_empty() {
        let mut builder = CodeBuilder::csharp();
        write_parameter_lines(&mut builder, "void M", &[], " => 1;");
        assert_eq!(builder.build(), "void M() => 1;\n");
    }
}
