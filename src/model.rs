//! The JSON declaration model read by the `weld` binary.
//!
//! ```json
//! {
//!   "classes": [{
//!     "name": "Foo",
//!     "type_params": ["T"],
//!     "constructors": [{
//!       "params": [
//!         { "name": "data", "type": "T", "annotations": ["Assisted"] },
//!         { "name": "log", "type": "Logger" }
//!       ]
//!     }]
//!   }],
//!   "shards": [{
//!     "name": "AppComponentImpl",
//!     "bindings": [{
//!       "kind": "assisted_injection",
//!       "key": "Foo<String>",
//!       "constructor": { "class": "Foo" }
//!     }]
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use weld_codegen::BindingKind;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Model {
    #[serde(default)]
    pub classes: Vec<ClassModel>,
    #[serde(default)]
    pub shards: Vec<ShardModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassModel {
    pub name: String,
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub constructors: Vec<ConstructorModel>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorModel {
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub params: Vec<ParamModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamModel {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShardModel {
    pub name: String,
    /// Names already taken in the generated class (e.g. hand-written members).
    #[serde(default)]
    pub reserved: Vec<String>,
    /// Fields generated into the shard before its bindings are processed.
    #[serde(default)]
    pub fields: Vec<FieldModel>,
    #[serde(default)]
    pub bindings: Vec<BindingModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldModel {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingModel {
    pub kind: BindingKind,
    pub key: String,
    #[serde(default)]
    pub qualifier: Option<String>,
    #[serde(default)]
    pub constructor: Option<ConstructorRef>,
}

/// The `index`th constructor of `class`, in model order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorRef {
    pub class: String,
    #[serde(default)]
    pub index: usize,
}
