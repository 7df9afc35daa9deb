//! Declaration checks run after parsing.

use std::{collections::HashMap, ops::Range};

use toml::Spanned;

use sealgen_ir::TypeScope;

use super::{EnumDecl, LambdaDecl, Manifest, ParameterDecl, UnionDecl};
use crate::{Result, validate::ParseContext};

/// Member names the generated union type declares itself.
const UNION_RESERVED_MEMBERS: &[&str] = &["Of", "Match"];

impl Manifest {
    /// Validate every declaration using the given parse context.
    pub(crate) fn validate(&self, ctx: &ParseContext) -> Result<()> {
        for decl in &self.enums {
            decl.validate(ctx)?;
        }
        for decl in &self.unions {
            decl.validate(ctx)?;
        }
        for decl in &self.lambdas {
            decl.validate(ctx)?;
        }

        // Artifact hint names must be unique per batch.
        check_unique(
            ctx,
            "enum",
            self.enums.iter().map(|e| (e.hint_name(), e.name.span())),
        )?;
        check_unique(
            ctx,
            "union",
            self.unions
                .iter()
                .map(|u| (u.name.get_ref().clone(), u.name.span())),
        )?;

        check_consistent_scopes(ctx, &self.lambdas)?;

        // Bindings land in the same type when namespace and scopes match.
        check_unique(
            ctx,
            "lambda binding",
            self.lambdas.iter().map(|l| (l.binding_path(), l.name.span())),
        )
    }
}

/// Every lambda that reopens a type must declare it identically.
///
/// Types are identified by namespace and the metadata names of the scopes
/// up to and including them, the same identity the generated file name uses.
fn check_consistent_scopes(ctx: &ParseContext, lambdas: &[LambdaDecl]) -> Result<()> {
    let mut seen: HashMap<String, (TypeScope, Range<usize>)> = HashMap::new();
    for lambda in lambdas {
        let mut path = lambda.namespace.clone();
        for scope in &lambda.scopes {
            let lowered = scope.lower();
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(&lowered.metadata_name());

            match seen.get(&path) {
                Some((first, first_span)) if *first != lowered => {
                    return Err(ctx.source_context().conflicting_scope_error(
                        path.as_str(),
                        first_span.clone(),
                        scope.name.span(),
                    ));
                }
                Some(_) => {}
                None => {
                    seen.insert(path.clone(), (lowered, scope.name.span()));
                }
            }
        }
    }
    Ok(())
}

impl EnumDecl {
    fn validate(&self, ctx: &ParseContext) -> Result<()> {
        ctx.validate_namespace(&self.namespace)?;
        ctx.validate_spanned(&self.name, "enum")?;
        for containing in &self.containing_types {
            ctx.validate_name(containing, "containing type")?;
        }

        if self.members.is_empty() {
            return Err(ctx
                .source_context()
                .empty_enum_error(self.name.get_ref(), self.name.span()));
        }

        let nested = ctx.push(self.name.get_ref());
        for member in &self.members {
            nested.validate_spanned(member, "enum member")?;
        }
        check_unique_spanned(&nested, "enum member", &self.members)
    }
}

impl UnionDecl {
    fn validate(&self, ctx: &ParseContext) -> Result<()> {
        ctx.validate_namespace(&self.namespace)?;
        ctx.validate_spanned(&self.name, "union")?;
        for import in &self.imports {
            ctx.validate_namespace(import)?;
        }

        let nested = ctx.push(self.name.get_ref());
        for type_parameter in &self.type_parameters {
            nested.validate_name(type_parameter, "type parameter")?;
        }

        for variant in &self.variants {
            nested.validate_spanned(&variant.name, "union variant")?;

            let variant_name = variant.name.get_ref();
            let reserved = UNION_RESERVED_MEMBERS.contains(&variant_name.as_str())
                || variant_name == self.name.get_ref()
                || self.type_parameters.contains(variant_name);
            if reserved {
                return Err(ctx.source_context().validation_error_at(
                    format!(
                        "variant '{}' clashes with a member or type parameter of union '{}'",
                        variant_name,
                        self.name.get_ref()
                    ),
                    variant.name.span(),
                ));
            }

            validate_parameters(&nested.push(variant_name), &variant.parameters)?;
        }

        check_unique(
            &nested,
            "union variant",
            self.variants
                .iter()
                .map(|v| (v.name.get_ref().clone(), v.name.span())),
        )
    }
}

impl LambdaDecl {
    fn validate(&self, ctx: &ParseContext) -> Result<()> {
        ctx.validate_namespace(&self.namespace)?;
        ctx.validate_spanned(&self.name, "lambda")?;

        if self.scopes.is_empty() {
            return Err(ctx.source_context().validation_error_at(
                format!(
                    "lambda '{}' needs at least one enclosing scope",
                    self.name.get_ref()
                ),
                self.name.span(),
            ));
        }
        for scope in &self.scopes {
            ctx.validate_spanned(&scope.name, "scope")?;
            for type_parameter in &scope.type_parameters {
                ctx.push(scope.name.get_ref())
                    .validate_name(type_parameter, "type parameter")?;
            }
        }

        if self.returns.trim().is_empty() {
            return Err(ctx.source_context().validation_error_at(
                format!("lambda '{}' has an empty return type", self.name.get_ref()),
                self.name.span(),
            ));
        }

        validate_parameters(&ctx.push(self.name.get_ref()), &self.parameters)
    }

    /// `Namespace.Outer.Inner.binding`, unique per generated field.
    fn binding_path(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.scopes.len() + 2);
        if !self.namespace.is_empty() {
            parts.push(self.namespace.clone());
        }
        parts.extend(self.scopes.iter().map(|s| s.lower().metadata_name()));
        parts.push(self.target.binding_name(self.name.get_ref()));
        parts.join(".")
    }
}

fn validate_parameters(ctx: &ParseContext, parameters: &[ParameterDecl]) -> Result<()> {
    for parameter in parameters {
        ctx.validate_spanned(&parameter.name, "parameter")?;
        if parameter.ty.trim().is_empty() {
            return Err(ctx.source_context().validation_error_at(
                format!("parameter '{}' has an empty type", parameter.name.get_ref()),
                parameter.name.span(),
            ));
        }
    }
    check_unique(
        ctx,
        "parameter",
        parameters
            .iter()
            .map(|p| (p.name.get_ref().clone(), p.name.span())),
    )
}

fn check_unique_spanned(ctx: &ParseContext, kind: &str, names: &[Spanned<String>]) -> Result<()> {
    check_unique(
        ctx,
        kind,
        names.iter().map(|n| (n.get_ref().clone(), n.span())),
    )
}

/// Fail on the second occurrence of any name, pointing at both.
fn check_unique(
    ctx: &ParseContext,
    kind: &str,
    names: impl IntoIterator<Item = (String, Range<usize>)>,
) -> Result<()> {
    let mut seen: HashMap<String, Range<usize>> = HashMap::new();
    for (name, span) in names {
        if let Some(first) = seen.get(&name) {
            return Err(ctx.source_context().duplicate_error(
                name.as_str(),
                ctx.context_for(kind),
                first.clone(),
                span,
            ));
        }
        seen.insert(name, span);
    }
    Ok(())
}
