//! A shard: one generated class and its naming scope.

use crate::naming::NamingScope;
use crate::spec::FieldSpec;
use tracing::trace;
use weld_types::{ParamId, TypeContext, TypeId};

#[derive(Clone, Debug)]
pub struct Shard {
    name: String,
    scope: NamingScope,
    fields: Vec<FieldSpec>,
}

impl Shard {
    pub fn new(name: impl Into<String>) -> Self {
        Shard {
            name: name.into(),
            scope: NamingScope::new(),
            fields: Vec::new(),
        }
    }

    /// A shard whose scope never hands out any of `words`.
    pub fn with_reserved_words<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Shard {
            name: name.into(),
            scope: NamingScope::with_reserved_words(words),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &NamingScope {
        &self.scope
    }

    pub fn scope_mut(&mut self) -> &mut NamingScope {
        &mut self.scope
    }

    /// A field name not yet used in this shard.
    pub fn unique_field_name(&mut self, base: &str) -> String {
        self.scope.unique_name(base)
    }

    /// The name for assisted parameter `param`, stable across calls.
    pub fn unique_field_name_for_assisted_param(
        &mut self,
        ctx: &TypeContext,
        param: ParamId,
    ) -> String {
        self.scope.allocate(param, ctx.param_name(param))
    }

    pub fn assisted_param_name(&self, param: ParamId) -> Option<&str> {
        self.scope.allocated_name(param)
    }

    /// Declare a field of `type_id` named after `base`, disambiguated.
    pub fn add_field(&mut self, type_id: TypeId, base: &str) -> &FieldSpec {
        let name = self.unique_field_name(base);
        trace!(shard = %self.name, field = %name, "add_field");
        let index = self.fields.len();
        self.fields.push(FieldSpec { type_id, name });
        &self.fields[index]
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}
