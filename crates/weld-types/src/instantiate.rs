//! Generic type instantiation and substitution.
//!
//! A [`TypeSubstitution`] maps type-variable identities (binder + index) to
//! concrete types. Variables that are not in the map are left untouched,
//! which is what keeps substitution capture-avoiding: a constructor-local
//! `T` has a different key from the class's `T`.

use crate::intern::TypeInterner;
use crate::types::{TypeArgs, TypeData, TypeId, TypeVarKey, WildcardBound};
use rustc_hash::FxHashMap;

#[derive(Clone, Debug, Default)]
pub struct TypeSubstitution {
    map: FxHashMap<TypeVarKey, TypeId>,
}

impl TypeSubstitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `type_params` (type-variable ids) with `type_args` positionally.
    ///
    /// Extra entries on either side are ignored; callers check arity first.
    /// Ids in `type_params` that are not type variables are skipped.
    pub fn from_args(types: &TypeInterner, type_params: &[TypeId], type_args: &[TypeId]) -> Self {
        let mut subst = Self::new();
        for (&param, &arg) in type_params.iter().zip(type_args) {
            if let Some(TypeData::TypeVariable(info)) = types.lookup(param) {
                subst.insert(info.key(), arg);
            }
        }
        subst
    }

    pub fn insert(&mut self, key: TypeVarKey, type_id: TypeId) {
        self.map.insert(key, type_id);
    }

    pub fn get(&self, key: TypeVarKey) -> Option<TypeId> {
        self.map.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Rebuilds types bottom-up, memoizing per `TypeId`.
///
/// Interned types only reference ids created before them, so the walk always
/// terminates.
pub struct TypeInstantiator<'a> {
    types: &'a TypeInterner,
    substitution: &'a TypeSubstitution,
    visited: FxHashMap<TypeId, TypeId>,
}

impl<'a> TypeInstantiator<'a> {
    pub fn new(types: &'a TypeInterner, substitution: &'a TypeSubstitution) -> Self {
        TypeInstantiator {
            types,
            substitution,
            visited: FxHashMap::default(),
        }
    }

    pub fn instantiate(&mut self, type_id: TypeId) -> TypeId {
        if type_id.is_intrinsic() {
            return type_id;
        }
        if let Some(&done) = self.visited.get(&type_id) {
            return done;
        }
        let Some(data) = self.types.lookup(type_id) else {
            return type_id;
        };

        let result = match data {
            TypeData::Error | TypeData::Primitive(_) => type_id,
            TypeData::TypeVariable(info) => self.substitution.get(info.key()).unwrap_or(type_id),
            TypeData::Class { class, args } => {
                let new_args: TypeArgs = args.iter().map(|&arg| self.instantiate(arg)).collect();
                if new_args == args {
                    type_id
                } else {
                    self.types.class(class, new_args)
                }
            }
            TypeData::Array(element) => {
                let new_element = self.instantiate(element);
                if new_element == element {
                    type_id
                } else {
                    self.types.array(new_element)
                }
            }
            TypeData::Wildcard(bound) => {
                let new_bound = match bound {
                    WildcardBound::Unbounded => bound,
                    WildcardBound::Extends(b) => WildcardBound::Extends(self.instantiate(b)),
                    WildcardBound::Super(b) => WildcardBound::Super(self.instantiate(b)),
                };
                if new_bound == bound {
                    type_id
                } else {
                    self.types.wildcard(new_bound)
                }
            }
        };

        self.visited.insert(type_id, result);
        result
    }
}

/// Apply `substitution` to `type_id`.
pub fn instantiate_type(
    types: &TypeInterner,
    type_id: TypeId,
    substitution: &TypeSubstitution,
) -> TypeId {
    if substitution.is_empty() || type_id.is_intrinsic() {
        return type_id;
    }
    TypeInstantiator::new(types, substitution).instantiate(type_id)
}

#[cfg(test)]
#[path = "../tests/instantiate_tests.rs"]
mod tests;
