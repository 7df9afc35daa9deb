//! Lowering validated declarations into generator descriptors.

use indexmap::IndexSet;
use sealgen_ir::{
    CallableDescriptor, DescriptorSet, ParameterDescriptor, TypeScope, UnionConstructor,
    UnionDescriptor, VariantSetDescriptor,
};
use tracing::debug;

use crate::{EnumDecl, LambdaDecl, Manifest, ParameterDecl, ScopeDecl, UnionDecl};

/// Namespaces every generated union refers to.
pub const UNION_IMPORTS: &[&str] = &[
    "System",
    "System.Diagnostics",
    "System.Diagnostics.CodeAnalysis",
    "System.Runtime.CompilerServices",
];

impl Manifest {
    /// Lower every declaration, preserving declaration order.
    pub fn lower(&self) -> DescriptorSet {
        let set = DescriptorSet {
            enum_matches: self.enums.iter().map(EnumDecl::lower).collect(),
            unions: self.unions.iter().map(UnionDecl::lower).collect(),
            lambdas: self.lambdas.iter().map(LambdaDecl::lower).collect(),
        };
        debug!(
            enums = set.enum_matches.len(),
            unions = set.unions.len(),
            lambdas = set.lambdas.len(),
            "lowered manifest"
        );
        set
    }
}

impl EnumDecl {
    /// `Namespace.Outer.Inner.Name`
    pub fn full_type_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.containing_types.len() + 2);
        if !self.namespace.is_empty() {
            parts.push(&self.namespace);
        }
        parts.extend(self.containing_types.iter().map(String::as_str));
        parts.push(self.name.get_ref());
        parts.join(".")
    }

    /// `Namespace.Outer+Inner+Name`, the metadata-style name.
    pub fn hint_name(&self) -> String {
        let mut nested: Vec<&str> = self.containing_types.iter().map(String::as_str).collect();
        nested.push(self.name.get_ref());
        let nested = nested.join("+");

        if self.namespace.is_empty() {
            nested
        } else {
            format!("{}.{}", self.namespace, nested)
        }
    }

    pub fn lower(&self) -> VariantSetDescriptor {
        let descriptor = VariantSetDescriptor {
            full_type_name: self.full_type_name(),
            hint_name: self.hint_name(),
            declared_identifier: self.name.get_ref().clone(),
            containing_scope: self.namespace.clone(),
            members: self.members.iter().map(|m| m.get_ref().clone()).collect(),
        };
        debug!(hint = %descriptor.hint_name, members = descriptor.members.len(), "lowered enum");
        descriptor
    }
}

impl UnionDecl {
    /// Required imports followed by the declared ones, without repeats.
    pub fn imports(&self) -> Vec<String> {
        let imports: IndexSet<&str> = UNION_IMPORTS
            .iter()
            .copied()
            .chain(self.imports.iter().map(String::as_str))
            .collect();
        imports.into_iter().map(str::to_string).collect()
    }

    pub fn lower(&self) -> UnionDescriptor {
        let descriptor = UnionDescriptor {
            union_name: self.name.get_ref().clone(),
            union_scope: self.namespace.clone(),
            accessibility: self.accessibility,
            type_parameters: self.type_parameters.clone(),
            namespaces_to_import: self.imports(),
            constructors: self
                .variants
                .iter()
                .map(|variant| {
                    UnionConstructor::new(
                        variant.name.get_ref().as_str(),
                        variant.parameters.iter().map(ParameterDecl::lower).collect(),
                    )
                })
                .collect(),
        };
        debug!(
            union = %descriptor.union_name,
            variants = descriptor.constructors.len(),
            "lowered union"
        );
        descriptor
    }
}

impl ParameterDecl {
    pub fn lower(&self) -> ParameterDescriptor {
        ParameterDescriptor::new(self.ty.as_str(), self.name.get_ref().as_str())
    }
}

impl ScopeDecl {
    pub fn lower(&self) -> TypeScope {
        TypeScope {
            kind: self.kind,
            name: self.name.get_ref().clone(),
            type_parameters: self.type_parameters.clone(),
            is_static: self.is_static,
        }
    }
}

impl LambdaDecl {
    pub fn lower(&self) -> CallableDescriptor {
        let descriptor = CallableDescriptor {
            containing_namespace: self.namespace.clone(),
            type_hierarchy: self.scopes.iter().map(ScopeDecl::lower).collect(),
            target: self.target,
            type_or_method_name: self.name.get_ref().clone(),
            parameters: self.parameters.iter().map(ParameterDecl::lower).collect(),
            return_type: self.returns.clone(),
        };
        debug!(
            name = %descriptor.type_or_method_name,
            scopes = descriptor.type_hierarchy.len(),
            "lowered lambda"
        );
        descriptor
    }
}
