use serde::{Deserialize, Serialize};

/// A single positional parameter of a constructor or callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Type as it should appear in generated code (e.g. `global::System.String`, `T`).
    pub fully_qualified_type_name: String,
    /// Parameter identifier.
    pub parameter_name: String,
}

impl ParameterDescriptor {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            fully_qualified_type_name: type_name.into(),
            parameter_name: name.into(),
        }
    }

    /// `Type name`, as used in a parameter list.
    pub fn declaration(&self) -> String {
        format!("{} {}", self.fully_qualified_type_name, self.parameter_name)
    }
}

/// Join the declarations of a parameter list (`T value, string message`).
pub(crate) fn join_declarations(parameters: &[ParameterDescriptor]) -> String {
    parameters
        .iter()
        .map(ParameterDescriptor::declaration)
        .collect::<Vec<_>>()
        .join(", ")
}
