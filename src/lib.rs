//! weld: assisted-injection parameter resolution.
//!
//! The library side of the `weld` binary:
//! - `model`: the JSON declaration model
//! - `type_expr`: parsing type expressions such as `Map<String, List<T>>`
//! - `frontend`: lowering the model into a `TypeContext` plus bindings
//! - `driver`: resolving every binding of every shard and reporting the
//!   generated parameter lists

pub mod driver;
pub mod frontend;
pub mod model;
pub mod tracing_config;
pub mod type_expr;

pub use weld_codegen as codegen;
pub use weld_types as types;
