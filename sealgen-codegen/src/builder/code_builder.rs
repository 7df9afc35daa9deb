//! Code builder utility for generating properly indented code.

use std::borrow::Cow;

use super::{Indent, Scope};

/// Mutable writer for building code with proper indentation.
///
/// Indentation is written lazily, the first time text lands on a new line,
/// so a line can be assembled from several [`push_raw`](Self::push_raw)
/// calls. Empty lines never carry indentation.
///
/// # Example
///
/// ```
/// use sealgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::csharp();
/// builder.push_line("class Foo");
/// {
///     let mut body = builder.block();
///     body.push_raw("int x = ");
///     body.push_line("1;");
/// }
/// assert_eq!(builder.build(), "class Foo\n{\n    int x = 1;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
    at_line_start: bool,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
            at_line_start: true,
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (C# default).
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Add a line of code with current indentation.
    ///
    /// Completes the current line if text was already written to it.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.push_raw(s);
        self.buffer.push('\n');
        self.at_line_start = true;
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.at_line_start = true;
        self
    }

    /// Add text without a trailing newline.
    ///
    /// Indentation is written first when the text starts a new line.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self;
        }
        if self.at_line_start {
            self.write_indent();
        }
        self.buffer.push_str(s);
        self.at_line_start = s.ends_with('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Write `{` and indent.
    pub fn open_block(&mut self) -> &mut Self {
        self.push_line("{").push_indent()
    }

    /// Dedent and write `}`.
    pub fn close_block(&mut self) -> &mut Self {
        self.push_dedent().push_line("}")
    }

    /// Open a `{ ... }` block that is closed when the returned guard drops.
    pub fn block(&mut self) -> Scope<'_> {
        self.block_with("{", "}")
    }

    /// Open a block with custom delimiters (e.g. `{` and `};`).
    pub fn block_with(&mut self, open: &str, close: impl Into<Cow<'static, str>>) -> Scope<'_> {
        let mut scope = Scope::new(self);
        scope.push(open, close);
        scope
    }

    /// Start an empty guard; blocks are added with [`Scope::enter`].
    pub fn scope(&mut self) -> Scope<'_> {
        Scope::new(self)
    }

    /// Write a multi-line literal re-indented to the current depth.
    ///
    /// Leading and trailing blank lines are dropped and the indentation the
    /// lines share is removed before the current one is applied.
    pub fn push_multiline(&mut self, text: &str) -> &mut Self {
        let lines: Vec<&str> = text.lines().collect();
        let start = lines.iter().position(|l| !l.trim().is_empty());
        let end = lines.iter().rposition(|l| !l.trim().is_empty());
        let (Some(start), Some(end)) = (start, end) else {
            return self;
        };
        let lines = &lines[start..=end];

        let common = lines
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.len() - l.trim_start().len())
            .min()
            .unwrap_or(0);

        for line in lines {
            if line.trim().is_empty() {
                self.push_blank();
            } else {
                self.push_line(&line[common..]);
            }
        }
        self
    }

    /// Add an XML documentation summary (`/// <summary>` block).
    pub fn push_doc_summary(&mut self, text: &str) -> &mut Self {
        self.push_line("/// <summary>");
        for line in text.lines() {
            self.push_line(&format!("///     {}", line));
        }
        self.push_line("/// </summary>")
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write_to(&mut self.buffer, self.indent_level);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}

impl std::fmt::Display for CodeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::csharp();
        builder.push_line("int x = 1;");
        assert_eq!(builder.build(), "int x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::csharp();
        builder
            .push_line("void Main()")
            .open_block()
            .push_line("Console.WriteLine();")
            .close_block();

        assert_eq!(
            builder.build(),
            "void Main()\n{\n    Console.WriteLine();\n}\n"
        );
    }

    #[test]
    fn test_raw_then_line_indents_once() {
        let mut builder = CodeBuilder::csharp();
        builder.push_indent();
        builder.push_raw("Func<int> A");
        builder.push_raw(",");
        builder.push_line("");
        builder.push_raw("Func<int> B");
        builder.push_line(")");

        assert_eq!(builder.build(), "    Func<int> A,\n    Func<int> B)\n");
    }

    #[test]
    fn test_empty_lines_have_no_indentation() {
        let mut builder = CodeBuilder::csharp();
        builder.push_indent().push_line("a").push_line("").push_blank();
        builder.push_line("b");
        assert_eq!(builder.build(), "    a\n\n\n    b\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::csharp();
        builder.push_dedent().push_dedent().push_line("x");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.as_str(), "x\n");
    }

    #[test]
    fn test_block_guard_closes_on_drop() {
        let mut builder = CodeBuilder::csharp();
        builder.push_line("class A");
        {
            let mut body = builder.block();
            body.push_line("int x;");
            assert_eq!(body.current_indent(), 1);
        }
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "class A\n{\n    int x;\n}\n");
    }

    #[test]
    fn test_nested_block_guards() {
        let mut builder = CodeBuilder::csharp();
        {
            let mut outer = builder.block();
            outer.push_line("x => this switch");
            {
                let mut inner = outer.block_with("{", "};");
                inner.push_line("_ => 0");
            }
            outer.push_line("// after");
        }
        assert_eq!(
            builder.build(),
            "{\n    x => this switch\n    {\n        _ => 0\n    };\n    // after\n}\n"
        );
    }

    #[test]
    fn test_block_guard_closes_during_unwind() {
        let mut builder = CodeBuilder::csharp();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut body = builder.block();
            body.push_line("before");
            panic!("early exit");
        }));

        assert!(result.is_err());
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "{\n    before\n}\n");
    }

    #[test]
    fn test_multiline_reindents_to_current_depth() {
        let mut builder = CodeBuilder::csharp();
        builder.push_indent();
        builder.push_multiline(
            r#"
            /// <summary>
            ///     Docs.
            /// </summary>
            [Attr]
            public void M(
                int x)
            "#,
        );

        assert_eq!(
            builder.build(),
            "    /// <summary>\n    ///     Docs.\n    /// </summary>\n    [Attr]\n    public void M(\n        int x)\n"
        );
    }

    #[test]
    fn test_multiline_keeps_inner_blank_lines() {
        let mut builder = CodeBuilder::csharp();
        builder.push_multiline("a\n\n  b");
        assert_eq!(builder.build(), "a\n\n  b\n");
    }

    #[test]
    fn test_multiline_blank_input_is_noop() {
        let mut builder = CodeBuilder::csharp();
        builder.push_multiline("   \n  \n");
        assert_eq!(builder.build(), "");
    }

    #[test]
    fn test_doc_summary() {
        let mut builder = CodeBuilder::csharp();
        builder.push_indent().push_doc_summary("The Point constructor as a Func.");
        assert_eq!(
            builder.build(),
            "    /// <summary>\n    ///     The Point constructor as a Func.\n    /// </summary>\n"
        );
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.push_indent().push_line("x");
        assert_eq!(builder.to_string(), "\tx\n");
    }
}
