//! Assisted-injection parameters of a generated factory.
//!
//! For an `@AssistedInject` constructor, the generated factory method takes
//! exactly the `@Assisted` parameters, in declaration order. Their types are
//! the constructor's parameter types as a member of the binding key's type
//! (so `Foo<T>(T data)` bound at `Foo<String>` yields `String data`), and
//! their names come from the shard's naming scope so they cannot collide with
//! anything else generated into the same class.

use crate::annotations::{AssistedAnnotation, CallerSupplied};
use crate::binding::{Binding, BindingKind};
use crate::error::CodegenError;
use crate::naming::NamingScope;
use crate::shard::Shard;
use crate::spec::ParameterSpec;
use tracing::{debug, trace};
use weld_types::{ConstructorSignature, TypeContext, TypeId};

/// The assisted parameters of `binding`, named in `shard`.
///
/// Parameters are classified by their `@Assisted` annotation.
pub fn assisted_parameter_specs(
    binding: &Binding,
    ctx: &TypeContext,
    shard: &mut Shard,
) -> Result<Vec<ParameterSpec>, CodegenError> {
    assisted_parameter_specs_with(binding, ctx, shard, &AssistedAnnotation::new(ctx))
}

/// Like [`assisted_parameter_specs`], with a caller-provided classification.
pub fn assisted_parameter_specs_with<P>(
    binding: &Binding,
    ctx: &TypeContext,
    shard: &mut Shard,
    is_caller_supplied: &P,
) -> Result<Vec<ParameterSpec>, CodegenError>
where
    P: CallerSupplied + ?Sized,
{
    if binding.kind != BindingKind::AssistedInjection {
        return Err(CodegenError::InvalidBindingKind {
            expected: BindingKind::AssistedInjection,
            found: binding.kind,
        });
    }
    let constructor = binding
        .constructor
        .ok_or_else(|| CodegenError::MissingBindingElement {
            kind: binding.kind,
            key: binding.key.format(ctx),
        })?;
    let signature = ctx.constructor_signature(constructor)?;

    let specs = resolve_assisted_parameters(
        ctx,
        &signature,
        binding.key.type_id,
        is_caller_supplied,
        shard.scope_mut(),
    )?;
    debug!(
        shard = shard.name(),
        constructor = constructor.0,
        assisted = specs.len(),
        "resolved assisted parameters"
    );
    Ok(specs)
}

/// Resolve the caller-supplied parameters of `signature` as a member of
/// `enclosing`, allocating their names in `scope`.
///
/// Only caller-supplied parameters touch `scope`; the rest are skipped
/// without consuming a name.
pub fn resolve_assisted_parameters<P>(
    ctx: &TypeContext,
    signature: &ConstructorSignature,
    enclosing: TypeId,
    is_caller_supplied: &P,
    scope: &mut NamingScope,
) -> Result<Vec<ParameterSpec>, CodegenError>
where
    P: CallerSupplied + ?Sized,
{
    let param_types = ctx.parameter_types_as_member_of(signature, enclosing)?;
    if param_types.len() != signature.len() {
        return Err(CodegenError::InconsistentSignature {
            params: signature.len(),
            types: param_types.len(),
        });
    }

    let mut specs = Vec::new();
    for (param, &type_id) in signature.params.iter().zip(&param_types) {
        if !is_caller_supplied.is_caller_supplied(param.id) {
            trace!(param = param.id.0, "not caller-supplied, skipping");
            continue;
        }
        let name = scope.allocate(param.id, ctx.param_name(param.id));
        specs.push(ParameterSpec::new(type_id, name));
    }
    Ok(specs)
}

#[cfg(test)]
#[path = "../tests/assisted_tests.rs"]
mod tests;
