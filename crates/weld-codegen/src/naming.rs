//! Unique name generation for generated code.
//!
//! Every shard owns one [`NamingScope`]. Fields, factory parameters and any
//! other generated member draw their names from the same in-use set, so two
//! members of one generated unit never collide.
//!
//! Collisions are resolved the same way for every kind of member: the bare
//! name is tried first, then `name2`, `name3`, ... until a free one is found.

use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap};
use tracing::{debug, trace};
use weld_types::ParamId;

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Keywords and literals that cannot be used as identifiers in generated Java.
pub const JAVA_RESERVED_WORDS: &[&str] = &[
    "_",
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Used when a parameter has no source name.
const FALLBACK_BASE_NAME: &str = "arg";

/// The set of names already taken in a scope, in claim order.
#[derive(Clone, Debug, Default)]
pub struct UniqueNameSet {
    names: FxIndexSet<String>,
}

impl UniqueNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with `reserved` already claimed.
    pub fn with_reserved<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in reserved {
            set.claim(name.as_ref());
        }
        set
    }

    /// Mark `name` as taken. Returns `false` if it already was.
    pub fn claim(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Claim and return `base` if it is free, otherwise the first free
    /// `base{n}` for n = 2, 3, ...
    pub fn get_unique_name(&mut self, base: &str) -> String {
        if self.claim(base) {
            return base.to_string();
        }
        let mut suffix: u64 = 2;
        loop {
            let candidate = format!("{base}{suffix}");
            if self.claim(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Naming scope of one generated unit.
///
/// Parameter allocations are idempotent per [`ParamId`]; there is no way to
/// release a name once it has been handed out.
#[derive(Clone, Debug, Default)]
pub struct NamingScope {
    names: UniqueNameSet,
    param_names: FxHashMap<ParamId, String>,
}

impl NamingScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope in which `words` can never be allocated.
    pub fn with_reserved_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        NamingScope {
            names: UniqueNameSet::with_reserved(words),
            param_names: FxHashMap::default(),
        }
    }

    /// The name for `param`, allocating one derived from `source_name` on
    /// first use.
    pub fn allocate(&mut self, param: ParamId, source_name: &str) -> String {
        if let Some(existing) = self.param_names.get(&param) {
            return existing.clone();
        }

        let base = if source_name.is_empty() {
            FALLBACK_BASE_NAME
        } else {
            source_name
        };
        let name = self.names.get_unique_name(base);
        if name == base {
            trace!(param = param.0, name = %name, "allocated parameter name");
        } else {
            debug!(param = param.0, base, name = %name, "parameter name collided, disambiguated");
        }
        self.param_names.insert(param, name.clone());
        name
    }

    /// A fresh name for a member that is not a parameter (fields, methods).
    pub fn unique_name(&mut self, base: &str) -> String {
        self.names.get_unique_name(base)
    }

    /// Mark an externally chosen name as taken.
    pub fn claim(&mut self, name: &str) -> bool {
        self.names.claim(name)
    }

    pub fn is_in_use(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// The name previously allocated for `param`, without allocating.
    pub fn allocated_name(&self, param: ParamId) -> Option<&str> {
        self.param_names.get(&param).map(String::as_str)
    }

    pub fn allocated_param_count(&self) -> usize {
        self.param_names.len()
    }

    pub fn names(&self) -> &UniqueNameSet {
        &self.names
    }
}

#[cfg(test)]
#[path = "../tests/naming_tests.rs"]
mod tests;
