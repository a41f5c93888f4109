//! Member-of resolution for constructors.
//!
//! Given the signature of a constructor declared on `Foo<T>` and a concrete
//! instantiation such as `Foo<String>`, computes each parameter's type with
//! the class's type variables replaced positionally. Constructor-local type
//! variables are left as they are.

use crate::context::TypeContext;
use crate::decls::ConstructorSignature;
use crate::error::TypeResolveError;
use crate::instantiate::{TypeInstantiator, TypeSubstitution};
use crate::types::{ClassId, TypeData, TypeId};
use tracing::trace;

/// Substituted parameter types of `signature` as a member of `enclosing`.
///
/// The result has exactly one entry per signature parameter, in order.
pub fn resolve_parameter_types(
    ctx: &TypeContext,
    signature: &ConstructorSignature,
    enclosing: TypeId,
) -> Result<Vec<TypeId>, TypeResolveError> {
    let substitution = class_substitution(ctx, signature.declaring_class, enclosing)?;
    let mut instantiator = TypeInstantiator::new(&ctx.types, &substitution);
    let resolved: Vec<TypeId> = signature
        .params
        .iter()
        .map(|param| instantiator.instantiate(param.declared_type))
        .collect();

    trace!(
        constructor = signature.constructor.0,
        enclosing = enclosing.0,
        substituted = substitution.len(),
        "resolved constructor parameter types"
    );
    Ok(resolved)
}

/// The substitution mapping `class`'s type variables to `enclosing`'s arguments.
///
/// Fails if `enclosing` is not an instantiation of `class`, or if the number
/// of type arguments differs from the number of declared type parameters.
pub fn class_substitution(
    ctx: &TypeContext,
    class: ClassId,
    enclosing: TypeId,
) -> Result<TypeSubstitution, TypeResolveError> {
    let decl = ctx
        .decls
        .class(class)
        .ok_or(TypeResolveError::UnknownClass(class))?;

    let args = match ctx.types.lookup(enclosing) {
        Some(TypeData::Class { class: found, args }) if found == class => args,
        _ => {
            return Err(TypeResolveError::TypeMismatch {
                expected: ctx.class_name(class).to_string(),
                found: ctx.format_type(enclosing),
            });
        }
    };

    if args.len() != decl.type_params.len() {
        return Err(TypeResolveError::ArityMismatch {
            class: ctx.class_name(class).to_string(),
            expected: decl.type_params.len(),
            found: args.len(),
        });
    }

    Ok(TypeSubstitution::from_args(
        &ctx.types,
        &decl.type_params,
        &args,
    ))
}

#[cfg(test)]
#[path = "../tests/member_of_tests.rs"]
mod tests;
