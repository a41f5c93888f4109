//! Rendering types as target source text.

use crate::context::TypeContext;
use crate::types::{TypeData, TypeId, WildcardBound};

/// Formats `TypeId`s the way they appear in generated source:
/// `java.util.List<java.lang.String>`, `int[]`, `? extends T`.
pub struct TypeFormatter<'a> {
    ctx: &'a TypeContext,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(ctx: &'a TypeContext) -> Self {
        TypeFormatter { ctx }
    }

    pub fn format(&self, type_id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, type_id);
        out
    }

    fn write_type(&self, out: &mut String, type_id: TypeId) {
        let Some(data) = self.ctx.types.lookup(type_id) else {
            out.push_str("<error>");
            return;
        };
        match data {
            TypeData::Error => out.push_str("<error>"),
            TypeData::Primitive(kind) => out.push_str(kind.keyword()),
            TypeData::Class { class, args } => {
                match self.ctx.decls.class(class) {
                    Some(decl) => out.push_str(self.ctx.interner.resolve(decl.name)),
                    None => out.push_str("<error>"),
                }
                if !args.is_empty() {
                    out.push('<');
                    for (i, &arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_type(out, arg);
                    }
                    out.push('>');
                }
            }
            TypeData::Array(element) => {
                self.write_type(out, element);
                out.push_str("[]");
            }
            TypeData::TypeVariable(info) => out.push_str(self.ctx.interner.resolve(info.name)),
            TypeData::Wildcard(bound) => {
                out.push('?');
                match bound {
                    WildcardBound::Unbounded => {}
                    WildcardBound::Extends(b) => {
                        out.push_str(" extends ");
                        self.write_type(out, b);
                    }
                    WildcardBound::Super(b) => {
                        out.push_str(" super ");
                        self.write_type(out, b);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
