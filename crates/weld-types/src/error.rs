use crate::types::{ClassId, ConstructorId};
use thiserror::Error;

/// Failures of member-of resolution.
///
/// Every variant points at a bug in upstream type modelling; none of them is
/// caused by user input that this layer could recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeResolveError {
    #[error("constructor declared on `{expected}` cannot be resolved as a member of `{found}`")]
    TypeMismatch { expected: String, found: String },

    #[error("`{class}` declares {expected} type parameter(s) but is instantiated with {found}")]
    ArityMismatch {
        class: String,
        expected: usize,
        found: usize,
    },

    #[error("unknown constructor {0:?}")]
    UnknownConstructor(ConstructorId),

    #[error("unknown class {0:?}")]
    UnknownClass(ClassId),
}
