//! The type-resolver context handed to code generation.
//!
//! Bundles the string interner, the type interner and the declaration store
//! so callers pass one reference around. Declarations are added through
//! `&mut self` while the front end runs; afterwards code generation only
//! needs `&TypeContext` (type interning is internally synchronized).

use crate::decls::{ConstructorSignature, DeclarationStore};
use crate::error::TypeResolveError;
use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::member_of;
use crate::types::{ClassId, ConstructorId, ParamId, TypeId};
use weld_common::interner::{Atom, Interner};

#[derive(Debug, Default)]
pub struct TypeContext {
    pub interner: Interner,
    pub types: TypeInterner,
    pub decls: DeclarationStore,
}

impl TypeContext {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Declaration building
    // =========================================================================

    pub fn declare_class(&mut self, name: &str, type_params: &[&str]) -> ClassId {
        self.declare_class_inner(name, type_params, false)
    }

    /// Declare a class that is only referenced, never defined (library types).
    pub fn declare_external_class(&mut self, name: &str, type_params: &[&str]) -> ClassId {
        self.declare_class_inner(name, type_params, true)
    }

    fn declare_class_inner(&mut self, name: &str, type_params: &[&str], external: bool) -> ClassId {
        let name = self.interner.intern(name);
        let type_params = self.intern_all(type_params);
        self.decls
            .declare_class(&self.types, name, &type_params, external)
    }

    pub fn declare_constructor(
        &mut self,
        class: ClassId,
        type_params: &[&str],
    ) -> Result<ConstructorId, TypeResolveError> {
        let type_params = self.intern_all(type_params);
        self.decls
            .declare_constructor(&self.types, class, &type_params)
            .ok_or(TypeResolveError::UnknownClass(class))
    }

    pub fn add_parameter(
        &mut self,
        constructor: ConstructorId,
        name: &str,
        declared_type: TypeId,
        annotations: &[&str],
    ) -> Result<ParamId, TypeResolveError> {
        let name = self.interner.intern(name);
        let annotations = self.intern_all(annotations);
        self.decls
            .add_parameter(constructor, name, declared_type, annotations)
            .ok_or(TypeResolveError::UnknownConstructor(constructor))
    }

    fn intern_all(&mut self, names: &[&str]) -> Vec<Atom> {
        names.iter().map(|name| self.interner.intern(name)).collect()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The type variable for the `index`th type parameter of `class`.
    pub fn class_type_param(&self, class: ClassId, index: usize) -> Option<TypeId> {
        self.decls.class(class)?.type_params.get(index).copied()
    }

    /// The type variable for the `index`th type parameter of `constructor`.
    pub fn constructor_type_param(&self, constructor: ConstructorId, index: usize) -> Option<TypeId> {
        self.decls
            .constructor(constructor)?
            .type_params
            .get(index)
            .copied()
    }

    /// `class<args...>`.
    pub fn class_type(&self, class: ClassId, args: &[TypeId]) -> TypeId {
        self.types.class(class, args.iter().copied())
    }

    pub fn constructor_signature(
        &self,
        constructor: ConstructorId,
    ) -> Result<ConstructorSignature, TypeResolveError> {
        self.decls
            .signature(constructor)
            .ok_or(TypeResolveError::UnknownConstructor(constructor))
    }

    /// Parameter types of `signature` as a member of `enclosing`.
    pub fn parameter_types_as_member_of(
        &self,
        signature: &ConstructorSignature,
        enclosing: TypeId,
    ) -> Result<Vec<TypeId>, TypeResolveError> {
        member_of::resolve_parameter_types(self, signature, enclosing)
    }

    /// Declared source name of `param`, or `""` if unknown.
    pub fn param_name(&self, param: ParamId) -> &str {
        self.decls
            .param(param)
            .map(|decl| self.interner.resolve(decl.name))
            .unwrap_or("")
    }

    pub fn class_name(&self, class: ClassId) -> &str {
        self.decls
            .class(class)
            .map(|decl| self.interner.resolve(decl.name))
            .unwrap_or("")
    }

    pub fn format_type(&self, type_id: TypeId) -> String {
        TypeFormatter::new(self).format(type_id)
    }
}
