use crate::binding::BindingKind;
use thiserror::Error;
use weld_types::TypeResolveError;

/// Compiler-internal failures while generating code for a binding.
///
/// None of these are recoverable here: they indicate a caller that skipped a
/// precondition or an upstream modelling bug, and are reported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("expected a binding of kind {expected}, found {found}")]
    InvalidBindingKind {
        expected: BindingKind,
        found: BindingKind,
    },

    #[error("{kind} binding for `{key}` has no constructor element")]
    MissingBindingElement { kind: BindingKind, key: String },

    #[error("constructor has {params} parameter(s) but {types} resolved type(s)")]
    InconsistentSignature { params: usize, types: usize },

    #[error(transparent)]
    Type(#[from] TypeResolveError),
}
