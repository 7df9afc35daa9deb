//! Scoped block emission.

use std::{
    borrow::Cow,
    ops::{Deref, DerefMut},
};

use super::CodeBuilder;

/// Guard over a [`CodeBuilder`] holding a stack of pending closing delimiters.
///
/// Every block opened through the guard is closed exactly once, innermost
/// first, when the guard is dropped. This also happens while unwinding, so
/// an early return in the caller cannot leave a block unbalanced.
///
/// The guard dereferences to the builder, so content is written through it
/// directly and further guards can be nested inside it.
///
/// # Example
///
/// ```
/// use sealgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::csharp();
/// {
///     let mut scope = builder.scope();
///     scope.enter("partial class Outer");
///     scope.enter("partial class Inner");
///     scope.push_line("int x;");
/// }
/// assert_eq!(
///     builder.build(),
///     "partial class Outer\n{\n    partial class Inner\n    {\n        int x;\n    }\n}\n"
/// );
/// ```
#[derive(Debug)]
pub struct Scope<'a> {
    builder: &'a mut CodeBuilder,
    closers: Vec<Cow<'static, str>>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(builder: &'a mut CodeBuilder) -> Self {
        Self {
            builder,
            closers: Vec::new(),
        }
    }

    /// Write `open`, indent, and remember `close` for when the guard drops.
    pub fn push(&mut self, open: &str, close: impl Into<Cow<'static, str>>) -> &mut Self {
        self.builder.push_line(open).push_indent();
        self.closers.push(close.into());
        self
    }

    /// Write a declaration header followed by a `{ ... }` block.
    pub fn enter(&mut self, header: &str) -> &mut Self {
        self.builder.push_line(header);
        self.push("{", "}")
    }

    /// Number of blocks this guard will close.
    pub fn depth(&self) -> usize {
        self.closers.len()
    }
}

impl Deref for Scope<'_> {
    type Target = CodeBuilder;

    fn deref(&self) -> &Self::Target {
        self.builder
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.builder
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        while let Some(close) = self.closers.pop() {
            self.builder.push_dedent().push_line(&close);
        }
    }
}
