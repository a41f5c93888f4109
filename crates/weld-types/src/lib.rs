//! Type model for the weld compiler.
//!
//! This crate stands in for the host compiler's type mirrors:
//!
//! - **Interning**: `TypeData` is hash-consed into `TypeId`s
//! - **Declarations**: classes, constructors and parameters with stable ids
//! - **Substitution**: explicit type-variable → type maps, keyed by binder
//! - **Member-of**: a constructor's parameter types as seen from a concrete
//!   instantiation of its declaring class

pub mod context;
pub mod decls;
mod error;
pub mod format;
mod intern;
pub mod instantiate;
pub mod member_of;
pub mod types;

pub use context::TypeContext;
pub use decls::{
    ClassDecl, ConstructorDecl, ConstructorSignature, DeclarationStore, ParamDecl, SignatureParam,
};
pub use error::TypeResolveError;
pub use format::TypeFormatter;
pub use instantiate::{TypeInstantiator, TypeSubstitution, instantiate_type};
pub use intern::TypeInterner;
pub use types::{
    ClassId, ConstructorId, ParamId, PrimitiveKind, TypeArgs, TypeData, TypeId, TypeVarInfo,
    TypeVarKey, TypeVarOwner, WildcardBound,
};
