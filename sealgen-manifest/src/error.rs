use std::{ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "sealgen.toml");
/// ctx.validation_error("missing required field");
/// ctx.reserved_keyword_error("class", "union variant", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate name error pointing at both declarations.
    pub fn duplicate_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateName {
            src: self.named_source(),
            first_span: first.into(),
            second_span: second.into(),
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an error for one enclosing type declared two different ways.
    pub fn conflicting_scope_error(
        &self,
        name: impl Into<String>,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::ConflictingScope {
            src: self.named_source(),
            first_span: first.into(),
            second_span: second.into(),
            name: name.into(),
        })
    }

    /// Create an error for an enum declared without members.
    pub fn empty_enum_error(&self, name: impl Into<String>, span: Range<usize>) -> Box<Error> {
        Box::new(Error::EmptyEnum {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a sealgen.toml or pass its location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sealgen.toml")]
    #[diagnostic(code(sealgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(sealgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a C# reserved keyword")]
    #[diagnostic(
        code(sealgen::reserved_keyword),
        help("rename the {context} '{name}', or prefix it with '@' in your own code")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(sealgen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate {context} '{name}'")]
    #[diagnostic(
        code(sealgen::duplicate_name),
        help("every {context} must have a distinct name")
    )]
    DuplicateName {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
        context: String,
    },

    #[error("scope '{name}' is declared differently by two lambdas")]
    #[diagnostic(
        code(sealgen::conflicting_scope),
        help("bindings in one type share a file; declare the type the same way in every lambda")
    )]
    ConflictingScope {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared differently here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("enum '{name}' has no members")]
    #[diagnostic(
        code(sealgen::empty_enum),
        help("list at least one member in `members`")
    )]
    EmptyEnum {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: SourceSpan,
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_error_message() {
        let ctx = SourceContext::new("name = \"A\"\nname = \"A\"", "sealgen.toml");
        let err = ctx.duplicate_error("A", "union variant", 8..9, 19..20);
        assert_eq!(err.to_string(), "duplicate union variant 'A'");
    }

    #[test]
    fn test_validation_error_carries_source() {
        let ctx = SourceContext::new("[output]", "custom.toml");
        let err = ctx.validation_error_at("bad", (1, 6));
        match *err {
            Error::Validation { ref src, span, .. } => {
                assert_eq!(src.name(), "custom.toml");
                assert_eq!(span, Some(SourceSpan::from((1, 6))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
