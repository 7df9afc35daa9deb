//! Validation context and C# identifier rules.

use std::sync::Arc;

use miette::SourceSpan;
use toml::Spanned;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest, making it easier to pass validation context into
/// nested declarations.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "sealgen.toml");
/// ctx.validate_name("Status", "enum")?;
///
/// // For nested validation
/// let nested = ctx.push("Result");
/// nested.validate_name("Ok", "union variant")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Result", "Ok"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "parameter in 'Result.Ok'" or just "enum" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a quoted name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable C# identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        self.check_name(name, kind, || self.find_span(name))
    }

    /// Like [`validate_name`](Self::validate_name), reporting the exact span.
    pub fn validate_spanned(&self, name: &Spanned<String>, kind: &str) -> Result<()> {
        self.check_name(name.get_ref(), kind, || Some(name.span().into()))
    }

    /// Validate a dot-separated namespace. Empty means the global namespace.
    pub fn validate_namespace(&self, namespace: &str) -> Result<()> {
        if namespace.is_empty() {
            return Ok(());
        }
        for segment in namespace.split('.') {
            if segment.is_empty() {
                return Err(self.source.invalid_identifier_error(
                    namespace,
                    self.context_for("namespace"),
                    "namespace segments cannot be empty",
                    self.find_span(namespace),
                ));
            }
            self.check_name(segment, "namespace segment", || self.find_span(namespace))?;
        }
        Ok(())
    }

    fn check_name(
        &self,
        name: &str,
        kind: &str,
        span: impl Fn() -> Option<SourceSpan>,
    ) -> Result<()> {
        if is_csharp_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span()));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span(),
            ));
        }

        Ok(())
    }
}

/// C# reserved keywords that cannot be used as plain identifiers.
/// Contextual keywords (`record`, `var`, `value`, ...) stay usable.
pub(crate) const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub(crate) fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Find the span of a quoted name in the TOML source.
///
/// Names appear as string values (`name = "Ok"`) or array items
/// (`members = ["Red", "Green"]`). The span covers the name without quotes.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Validate that a name is a valid C# identifier.
/// Returns None if valid, Some(reason) if invalid.
///
/// Only ASCII identifiers are accepted; generated files stay portable
/// across editors and source encodings.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if is_csharp_keyword(name) {
        return Some("name is a C# reserved keyword");
    }

    None
}
