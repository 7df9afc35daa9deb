use serde::{Deserialize, Serialize};

use crate::{ParameterDescriptor, generic_suffix};

/// Kind of an enclosing type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Struct,
    Record,
    RecordStruct,
    Interface,
}

impl TypeKind {
    /// Declaration keyword(s).
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Record => "record",
            TypeKind::RecordStruct => "record struct",
            TypeKind::Interface => "interface",
        }
    }
}

/// One enclosing type around a generated binding, listed outer-to-inner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeScope {
    pub kind: TypeKind,
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub is_static: bool,
}

impl TypeScope {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_parameters: Vec::new(),
            is_static: false,
        }
    }

    /// Declaration line that reopens this type as a partial declaration.
    pub fn declaration(&self) -> String {
        let modifier = if self.is_static { "static " } else { "" };
        format!(
            "{}partial {} {}{}",
            modifier,
            self.kind.keyword(),
            self.name,
            generic_suffix(&self.type_parameters)
        )
    }

    /// Metadata-style name: generic arity is written as a backtick suffix.
    pub fn metadata_name(&self) -> String {
        if self.type_parameters.is_empty() {
            self.name.clone()
        } else {
            format!("{}`{}", self.name, self.type_parameters.len())
        }
    }
}

/// What a lambda binding forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LambdaTarget {
    /// `new(...)` of the innermost enclosing type.
    Constructor,
    /// A named method visible from the innermost enclosing type.
    Method,
}

impl LambdaTarget {
    /// Name of the generated field for a callable named `name`.
    ///
    /// A type holds at most one constructor binding, so constructors get the
    /// bare `λ`; methods are prefixed with their own name.
    pub fn binding_name(&self, name: &str) -> String {
        match self {
            LambdaTarget::Constructor => "λ".to_string(),
            LambdaTarget::Method => format!("{}λ", name),
        }
    }
}

/// A constructor or method to expose as a static `Func` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallableDescriptor {
    /// Namespace of the outermost type. Empty for the global namespace.
    pub containing_namespace: String,
    /// Enclosing types, outer-to-inner. Never empty for a valid descriptor.
    pub type_hierarchy: Vec<TypeScope>,
    pub target: LambdaTarget,
    pub type_or_method_name: String,
    pub parameters: Vec<ParameterDescriptor>,
    pub return_type: String,
}

impl CallableDescriptor {
    /// Key identifying the artifact this callable is emitted into.
    ///
    /// Scopes are compared by metadata name only, the same identity the
    /// artifact's hint name is built from.
    pub fn scope_key(&self) -> (&str, Vec<String>) {
        (
            &self.containing_namespace,
            self.type_hierarchy
                .iter()
                .map(TypeScope::metadata_name)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_kind_keyword() {
        assert_eq!(TypeKind::Class.keyword(), "class");
        assert_eq!(TypeKind::RecordStruct.keyword(), "record struct");
        assert_eq!(TypeKind::Interface.keyword(), "interface");
    }

    #[test]
    fn test_scope_declaration() {
        let scope = TypeScope::new(TypeKind::Record, "Point");
        assert_eq!(scope.declaration(), "partial record Point");

        let scope = TypeScope {
            kind: TypeKind::Class,
            name: "Cache".to_string(),
            type_parameters: vec!["TKey".to_string(), "TValue".to_string()],
            is_static: true,
        };
        assert_eq!(scope.declaration(), "static partial class Cache<TKey, TValue>");
    }

    #[test]
    fn test_scope_metadata_name() {
        let mut scope = TypeScope::new(TypeKind::Class, "Box");
        assert_eq!(scope.metadata_name(), "Box");
        scope.type_parameters = vec!["T".to_string()];
        assert_eq!(scope.metadata_name(), "Box`1");
    }

    #[test]
    fn test_scope_key_ignores_modifiers() {
        let callable = |scope: TypeScope| CallableDescriptor {
            containing_namespace: "Acme".to_string(),
            type_hierarchy: vec![scope],
            target: LambdaTarget::Method,
            type_or_method_name: "Add".to_string(),
            parameters: Vec::new(),
            return_type: "int".to_string(),
        };

        let plain = callable(TypeScope::new(TypeKind::Class, "Ops"));
        let mut modified = TypeScope::new(TypeKind::Struct, "Ops");
        modified.is_static = true;
        let modified = callable(modified);
        assert_eq!(plain.scope_key(), modified.scope_key());
        assert_eq!(plain.scope_key(), ("Acme", vec!["Ops".to_string()]));
    }

    #[test]
    fn test_binding_name() {
        assert_eq!(LambdaTarget::Constructor.binding_name("Point"), "λ");
        assert_eq!(LambdaTarget::Method.binding_name("Parse"), "Parseλ");
    }

    #[test]
    fn test_target_serde_names() {
        let target: LambdaTarget = serde_json::from_str("\"constructor\"").unwrap();
        assert_eq!(target, LambdaTarget::Constructor);
        let kind: TypeKind = serde_json::from_str("\"record_struct\"").unwrap();
        assert_eq!(kind, TypeKind::RecordStruct);
    }
}
