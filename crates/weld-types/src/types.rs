//! Core type representation.
//!
//! Types are hash-consed into a [`TypeInterner`](crate::TypeInterner) and
//! addressed by [`TypeId`]. Two structurally identical types always share an
//! id, so "did substitution change anything" is an integer comparison.

use smallvec::SmallVec;
use weld_common::interner::Atom;

/// Handle to an interned type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Placeholder produced when a type could not be modelled.
    pub const ERROR: TypeId = TypeId(0);
    pub const VOID: TypeId = TypeId(1);
    pub const BOOLEAN: TypeId = TypeId(2);
    pub const BYTE: TypeId = TypeId(3);
    pub const SHORT: TypeId = TypeId(4);
    pub const CHAR: TypeId = TypeId(5);
    pub const INT: TypeId = TypeId(6);
    pub const LONG: TypeId = TypeId(7);
    pub const FLOAT: TypeId = TypeId(8);
    pub const DOUBLE: TypeId = TypeId(9);

    /// First id handed out for non-intrinsic types.
    pub const FIRST_USER: u32 = 10;

    /// Intrinsic types never contain type variables.
    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

/// Identifier of a class (or interface) declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub u32);

/// Identifier of a constructor declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstructorId(pub u32);

/// Stable identity of one declared constructor parameter.
///
/// Two parameters named `value` in different constructors have different ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Void,
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// All primitives, in intrinsic `TypeId` order.
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Void,
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Char,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Void => "void",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    pub fn from_keyword(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == text)
    }

    pub const fn type_id(self) -> TypeId {
        match self {
            PrimitiveKind::Void => TypeId::VOID,
            PrimitiveKind::Boolean => TypeId::BOOLEAN,
            PrimitiveKind::Byte => TypeId::BYTE,
            PrimitiveKind::Short => TypeId::SHORT,
            PrimitiveKind::Char => TypeId::CHAR,
            PrimitiveKind::Int => TypeId::INT,
            PrimitiveKind::Long => TypeId::LONG,
            PrimitiveKind::Float => TypeId::FLOAT,
            PrimitiveKind::Double => TypeId::DOUBLE,
        }
    }
}

/// The declaration that binds a type variable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeVarOwner {
    /// `class Foo<T>`: bound by the enclosing type.
    Class(ClassId),
    /// `<U> Foo(U u)`: bound by the constructor itself.
    Constructor(ConstructorId),
}

/// Identity of a type variable: its binder and position in the binder's list.
///
/// The name is deliberately not part of the key, so a constructor-local `T`
/// never aliases the class's `T`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeVarKey {
    pub owner: TypeVarOwner,
    pub index: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeVarInfo {
    pub owner: TypeVarOwner,
    pub index: u32,
    /// Display name only.
    pub name: Atom,
}

impl TypeVarInfo {
    #[inline]
    pub fn key(&self) -> TypeVarKey {
        TypeVarKey {
            owner: self.owner,
            index: self.index,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    /// `?`
    Unbounded,
    /// `? extends B`
    Extends(TypeId),
    /// `? super B`
    Super(TypeId),
}

/// Type arguments of a class type. Most generic types take one or two.
pub type TypeArgs = SmallVec<[TypeId; 2]>;

/// Structural data behind a [`TypeId`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Error,
    Primitive(PrimitiveKind),
    /// A class type; `args` is empty for non-generic classes.
    Class { class: ClassId, args: TypeArgs },
    Array(TypeId),
    TypeVariable(TypeVarInfo),
    Wildcard(WildcardBound),
}
