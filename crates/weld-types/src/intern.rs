//! Type interning.
//!
//! Every `TypeData` is stored once; its position in the set is its `TypeId`.
//! The intrinsic types are interned first, in the order of the `TypeId`
//! constants, so `TypeId::INT` etc. are valid without a lookup.
//!
//! Interning goes through `&self` so that a `TypeContext` can be shared by
//! reference while substitution builds new instantiations.

use crate::types::{
    ClassId, PrimitiveKind, TypeArgs, TypeData, TypeId, TypeVarInfo, WildcardBound,
};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::sync::{PoisonError, RwLock};

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

#[derive(Debug)]
pub struct TypeInterner {
    types: RwLock<FxIndexSet<TypeData>>,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    pub fn new() -> Self {
        let mut types = FxIndexSet::default();
        types.insert(TypeData::Error);
        for kind in PrimitiveKind::ALL {
            types.insert(TypeData::Primitive(kind));
        }
        debug_assert_eq!(types.len(), TypeId::FIRST_USER as usize);
        TypeInterner {
            types: RwLock::new(types),
        }
    }

    /// Intern `data`, returning the existing id if it was seen before.
    pub fn intern(&self, data: TypeData) -> TypeId {
        {
            let types = self.types.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(index) = types.get_index_of(&data) {
                return TypeId(index as u32);
            }
        }
        let mut types = self.types.write().unwrap_or_else(PoisonError::into_inner);
        let (index, _) = types.insert_full(data);
        TypeId(index as u32)
    }

    /// Structural data for `id`, or `None` for an id this interner never issued.
    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        let types = self.types.read().unwrap_or_else(PoisonError::into_inner);
        types.get_index(id.0 as usize).cloned()
    }

    pub fn len(&self) -> usize {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Only the intrinsics are present.
    pub fn is_empty(&self) -> bool {
        self.len() <= TypeId::FIRST_USER as usize
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    #[inline]
    pub fn primitive(&self, kind: PrimitiveKind) -> TypeId {
        kind.type_id()
    }

    pub fn class(&self, class: ClassId, args: impl IntoIterator<Item = TypeId>) -> TypeId {
        let args: TypeArgs = args.into_iter().collect();
        self.intern(TypeData::Class { class, args })
    }

    pub fn array(&self, element: TypeId) -> TypeId {
        self.intern(TypeData::Array(element))
    }

    pub fn type_variable(&self, info: TypeVarInfo) -> TypeId {
        self.intern(TypeData::TypeVariable(info))
    }

    pub fn wildcard(&self, bound: WildcardBound) -> TypeId {
        self.intern(TypeData::Wildcard(bound))
    }
}
