//! Declaration storage.
//!
//! The front end registers classes, their constructors and the constructors'
//! parameters here. Ids are allocated sequentially and index straight into
//! the backing vectors, so a `ParamId` stays valid (and distinct) for the
//! lifetime of the store.

use crate::intern::TypeInterner;
use crate::types::{ClassId, ConstructorId, ParamId, TypeId, TypeVarInfo, TypeVarOwner};
use rustc_hash::FxHashMap;
use tracing::trace;
use weld_common::interner::Atom;

#[derive(Clone, Debug)]
pub struct ClassDecl {
    /// Name as written in generated source (simple or qualified).
    pub name: Atom,
    /// `TypeData::TypeVariable` ids owned by this class, in declaration order.
    pub type_params: Vec<TypeId>,
    pub constructors: Vec<ConstructorId>,
    /// Referenced from the model but never declared (library types).
    pub external: bool,
}

#[derive(Clone, Debug)]
pub struct ConstructorDecl {
    pub class: ClassId,
    /// Constructor-local type variables.
    pub type_params: Vec<TypeId>,
    pub params: Vec<ParamId>,
}

#[derive(Clone, Debug)]
pub struct ParamDecl {
    pub constructor: ConstructorId,
    /// Source name; the base for name allocation.
    pub name: Atom,
    pub declared_type: TypeId,
    /// Annotation names as written (`Assisted`, `dagger.assisted.Assisted`).
    pub annotations: Vec<Atom>,
}

/// One formal parameter of a [`ConstructorSignature`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SignatureParam {
    pub id: ParamId,
    pub declared_type: TypeId,
}

/// A constructor's formal parameters in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorSignature {
    pub constructor: ConstructorId,
    pub declaring_class: ClassId,
    pub params: Vec<SignatureParam>,
}

impl ConstructorSignature {
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct DeclarationStore {
    classes: Vec<ClassDecl>,
    constructors: Vec<ConstructorDecl>,
    params: Vec<ParamDecl>,
    class_by_name: FxHashMap<Atom, ClassId>,
}

impl DeclarationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class and create a type variable for each of its type parameters.
    ///
    /// Re-declaring a name shadows the earlier class in `class_named`; the
    /// earlier `ClassId` stays valid.
    pub fn declare_class(
        &mut self,
        types: &TypeInterner,
        name: Atom,
        type_param_names: &[Atom],
        external: bool,
    ) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        let type_params = type_param_names
            .iter()
            .enumerate()
            .map(|(index, &name)| {
                types.type_variable(TypeVarInfo {
                    owner: TypeVarOwner::Class(id),
                    index: index as u32,
                    name,
                })
            })
            .collect();
        trace!(class = id.0, params = type_param_names.len(), external, "declare_class");
        self.classes.push(ClassDecl {
            name,
            type_params,
            constructors: Vec::new(),
            external,
        });
        self.class_by_name.insert(name, id);
        id
    }

    /// Register a constructor on `class`. Returns `None` if `class` is unknown.
    pub fn declare_constructor(
        &mut self,
        types: &TypeInterner,
        class: ClassId,
        type_param_names: &[Atom],
    ) -> Option<ConstructorId> {
        let id = ConstructorId(self.constructors.len() as u32);
        let decl = self.classes.get_mut(class.0 as usize)?;
        decl.constructors.push(id);
        let type_params = type_param_names
            .iter()
            .enumerate()
            .map(|(index, &name)| {
                types.type_variable(TypeVarInfo {
                    owner: TypeVarOwner::Constructor(id),
                    index: index as u32,
                    name,
                })
            })
            .collect();
        trace!(class = class.0, constructor = id.0, "declare_constructor");
        self.constructors.push(ConstructorDecl {
            class,
            type_params,
            params: Vec::new(),
        });
        Some(id)
    }

    /// Append a parameter to `constructor`. Returns `None` if `constructor` is unknown.
    pub fn add_parameter(
        &mut self,
        constructor: ConstructorId,
        name: Atom,
        declared_type: TypeId,
        annotations: Vec<Atom>,
    ) -> Option<ParamId> {
        let id = ParamId(self.params.len() as u32);
        let decl = self.constructors.get_mut(constructor.0 as usize)?;
        decl.params.push(id);
        self.params.push(ParamDecl {
            constructor,
            name,
            declared_type,
            annotations,
        });
        Some(id)
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassDecl> {
        self.classes.get(id.0 as usize)
    }

    pub fn constructor(&self, id: ConstructorId) -> Option<&ConstructorDecl> {
        self.constructors.get(id.0 as usize)
    }

    pub fn param(&self, id: ParamId) -> Option<&ParamDecl> {
        self.params.get(id.0 as usize)
    }

    pub fn class_named(&self, name: Atom) -> Option<ClassId> {
        self.class_by_name.get(&name).copied()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// The signature of `constructor`, or `None` if it is unknown.
    pub fn signature(&self, constructor: ConstructorId) -> Option<ConstructorSignature> {
        let decl = self.constructor(constructor)?;
        let params = decl
            .params
            .iter()
            .map(|&id| {
                self.param(id).map(|param| SignatureParam {
                    id,
                    declared_type: param.declared_type,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(ConstructorSignature {
            constructor,
            declaring_class: decl.class,
            params,
        })
    }
}

#[cfg(test)]
#[path = "../tests/decls_tests.rs"]
mod tests;
