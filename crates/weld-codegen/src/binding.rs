//! The binding model, reduced to what code generation for assisted
//! injection reads: the kind, the resolved key, and the binding element.

use serde::{Deserialize, Serialize};
use std::fmt;
use weld_common::interner::Atom;
use weld_types::{ConstructorId, TypeContext, TypeId};

/// How a binding is satisfied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    /// `@Inject` constructor.
    Injection,
    /// `@AssistedInject` constructor: some parameters come from the caller.
    AssistedInjection,
    /// `@AssistedFactory` interface creating an assisted-injection type.
    AssistedFactory,
    /// `@Provides` method.
    Provision,
    /// `@Binds` method.
    Delegate,
}

impl BindingKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            BindingKind::Injection => "injection",
            BindingKind::AssistedInjection => "assisted_injection",
            BindingKind::AssistedFactory => "assisted_factory",
            BindingKind::Provision => "provision",
            BindingKind::Delegate => "delegate",
        }
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved key a binding satisfies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    /// Fully instantiated type, e.g. `Foo<String>`.
    pub type_id: TypeId,
    pub qualifier: Option<Atom>,
}

impl Key {
    pub fn new(type_id: TypeId) -> Self {
        Key {
            type_id,
            qualifier: None,
        }
    }

    pub fn qualified(type_id: TypeId, qualifier: Atom) -> Self {
        Key {
            type_id,
            qualifier: Some(qualifier),
        }
    }

    /// `@Qualifier Type` or just `Type`.
    pub fn format(&self, ctx: &TypeContext) -> String {
        let ty = ctx.format_type(self.type_id);
        match self.qualifier {
            Some(q) => format!("@{} {ty}", ctx.interner.resolve(q)),
            None => ty,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub kind: BindingKind,
    pub key: Key,
    /// The constructor for `Injection`/`AssistedInjection` bindings.
    pub constructor: Option<ConstructorId>,
}

impl Binding {
    pub fn new(kind: BindingKind, key: Key, constructor: Option<ConstructorId>) -> Self {
        Binding {
            kind,
            key,
            constructor,
        }
    }

    pub fn assisted_injection(key: Key, constructor: ConstructorId) -> Self {
        Self::new(BindingKind::AssistedInjection, key, Some(constructor))
    }

    pub fn injection(key: Key, constructor: ConstructorId) -> Self {
        Self::new(BindingKind::Injection, key, Some(constructor))
    }
}
