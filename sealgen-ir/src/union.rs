use serde::{Deserialize, Serialize};

use crate::{ParameterDescriptor, generic_suffix, parameter::join_declarations};

/// Declared accessibility of a generated union base type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accessibility {
    #[default]
    #[serde(rename = "public")]
    Public,
    #[serde(rename = "internal")]
    Internal,
    #[serde(rename = "protected")]
    Protected,
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "protected internal")]
    ProtectedInternal,
    #[serde(rename = "private protected")]
    PrivateProtected,
}

impl Accessibility {
    /// The modifier keyword(s) as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Internal => "internal",
            Accessibility::Protected => "protected",
            Accessibility::Private => "private",
            Accessibility::ProtectedInternal => "protected internal",
            Accessibility::PrivateProtected => "private protected",
        }
    }
}

impl std::fmt::Display for Accessibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One variant of a union together with its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionConstructor {
    /// Variant name; also the name of the generated sub-type and match parameter.
    pub member_name: String,
    /// Parameters in declaration order. Position is significant.
    pub parameters: Vec<ParameterDescriptor>,
}

impl UnionConstructor {
    pub fn new(member_name: impl Into<String>, parameters: Vec<ParameterDescriptor>) -> Self {
        Self {
            member_name: member_name.into(),
            parameters,
        }
    }

    /// `T value, string message`
    pub fn parameter_list(&self) -> String {
        join_declarations(&self.parameters)
    }

    /// `value, message`
    pub fn argument_list(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.parameter_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A closed union to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionDescriptor {
    /// Identifier of the union base type.
    pub union_name: String,
    /// Namespace of the union. Empty for the global namespace.
    pub union_scope: String,
    pub accessibility: Accessibility,
    /// Generic parameters of the base type, in order.
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// `using` directives, emitted in the given order.
    pub namespaces_to_import: Vec<String>,
    /// Variants in declaration order.
    pub constructors: Vec<UnionConstructor>,
}

impl UnionDescriptor {
    /// The base type as referenced from generated code (`Result<T>`).
    pub fn base_type(&self) -> String {
        format!("{}{}", self.union_name, generic_suffix(&self.type_parameters))
    }
}
