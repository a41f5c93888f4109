//! Parameter and field declarations handed to class emission.

use weld_types::{TypeContext, TypeId};

/// One parameter of a generated method: `Type name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterSpec {
    pub type_id: TypeId,
    pub name: String,
}

impl ParameterSpec {
    pub fn new(type_id: TypeId, name: impl Into<String>) -> Self {
        ParameterSpec {
            type_id,
            name: name.into(),
        }
    }

    pub fn render(&self, ctx: &TypeContext) -> String {
        format!("{} {}", ctx.format_type(self.type_id), self.name)
    }
}

/// A field generated into a shard.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub type_id: TypeId,
    pub name: String,
}

impl FieldSpec {
    pub fn render(&self, ctx: &TypeContext) -> String {
        format!("private final {} {};", ctx.format_type(self.type_id), self.name)
    }
}

/// `(A a, B b)`, in the order given.
pub fn render_parameter_list(ctx: &TypeContext, specs: &[ParameterSpec]) -> String {
    let params: Vec<String> = specs.iter().map(|spec| spec.render(ctx)).collect();
    format!("({})", params.join(", "))
}
