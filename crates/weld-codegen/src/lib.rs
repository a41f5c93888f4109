//! Code-generation support for assisted injection.
//!
//! - `naming`: the per-shard naming scope and its unique-name allocator
//! - `shard`: one generated unit (naming scope + generated fields)
//! - `binding`: the slice of the binding model this crate consumes
//! - `assisted`: resolving an assisted-injection constructor into the ordered
//!   `(type, name)` parameter list of a generated factory method

pub mod annotations;
pub mod assisted;
pub mod binding;
mod error;
pub mod naming;
pub mod shard;
pub mod spec;

pub use annotations::{AssistedAnnotation, CallerSupplied, is_assisted_parameter};
pub use assisted::{
    assisted_parameter_specs, assisted_parameter_specs_with, resolve_assisted_parameters,
};
pub use binding::{Binding, BindingKind, Key};
pub use error::CodegenError;
pub use naming::{JAVA_RESERVED_WORDS, NamingScope, UniqueNameSet};
pub use shard::Shard;
pub use spec::{FieldSpec, ParameterSpec, render_parameter_list};
