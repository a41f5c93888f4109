//! Lowering the declaration model into a [`TypeContext`].
//!
//! Classes are declared in a first pass so constructors may reference any
//! class in the model regardless of order. Class names that are never
//! declared are registered as external classes on first use; their arity is
//! fixed by that use.

use crate::model::{BindingModel, ClassModel, Model, ShardModel};
use crate::type_expr::{BoundKind, ParseError, TypeExpr, is_identifier, parse_type_expr};
use thiserror::Error;
use tracing::{debug, trace};
use weld_codegen::{Binding, Key};
use weld_types::{
    ClassId, ConstructorId, PrimitiveKind, TypeContext, TypeId, TypeResolveError, WildcardBound,
};

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("invalid type for {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseError,
    },

    #[error("class `{0}` is declared more than once")]
    DuplicateClass(String),

    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(String),

    #[error("unknown class `{0}`")]
    UnknownClass(String),

    #[error("class `{class}` has no constructor #{index}")]
    UnknownConstructor { class: String, index: usize },

    #[error("`{class}` takes {expected} type argument(s) but {found} were given")]
    TypeArgumentCount {
        class: String,
        expected: usize,
        found: usize,
    },

    #[error("`{0}` cannot take type arguments")]
    NotGeneric(String),

    #[error(transparent)]
    Type(#[from] TypeResolveError),
}

/// A lowered shard: everything the driver needs, as ids.
#[derive(Clone, Debug)]
pub struct ShardProgram {
    pub name: String,
    pub reserved: Vec<String>,
    pub fields: Vec<(TypeId, String)>,
    pub bindings: Vec<Binding>,
}

#[derive(Debug)]
pub struct Program {
    pub ctx: TypeContext,
    pub shards: Vec<ShardProgram>,
}

/// Type variables visible while lowering a type expression.
#[derive(Default)]
struct TypeScope {
    /// Constructor-local variables shadow class variables.
    constructor: Vec<(String, TypeId)>,
    class: Vec<(String, TypeId)>,
}

impl TypeScope {
    fn lookup(&self, name: &str) -> Option<TypeId> {
        self.constructor
            .iter()
            .chain(&self.class)
            .find(|(n, _)| n == name)
            .map(|&(_, id)| id)
    }
}

pub fn lower_model(model: &Model) -> Result<Program, FrontendError> {
    let mut lowering = Lowering {
        ctx: TypeContext::new(),
    };

    let mut classes = Vec::with_capacity(model.classes.len());
    for class in &model.classes {
        classes.push(lowering.declare_class(class)?);
    }
    for (class_model, &class) in model.classes.iter().zip(&classes) {
        lowering.lower_constructors(class_model, class)?;
    }

    let shards = model
        .shards
        .iter()
        .map(|shard| lowering.lower_shard(shard))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        classes = lowering.ctx.decls.class_count(),
        shards = shards.len(),
        "lowered model"
    );
    Ok(Program {
        ctx: lowering.ctx,
        shards,
    })
}

struct Lowering {
    ctx: TypeContext,
}

impl Lowering {
    fn declare_class(&mut self, class: &ClassModel) -> Result<ClassId, FrontendError> {
        if self.lookup_class(&class.name).is_some() {
            return Err(FrontendError::DuplicateClass(class.name.clone()));
        }
        for name in &class.type_params {
            check_identifier(name)?;
        }
        let type_params: Vec<&str> = class.type_params.iter().map(String::as_str).collect();
        Ok(self.ctx.declare_class(&class.name, &type_params))
    }

    fn lower_constructors(
        &mut self,
        class_model: &ClassModel,
        class: ClassId,
    ) -> Result<(), FrontendError> {
        let class_scope: Vec<(String, TypeId)> = class_model
            .type_params
            .iter()
            .enumerate()
            .filter_map(|(i, name)| Some((name.clone(), self.ctx.class_type_param(class, i)?)))
            .collect();

        for ctor_model in &class_model.constructors {
            for name in &ctor_model.type_params {
                check_identifier(name)?;
            }
            let type_params: Vec<&str> =
                ctor_model.type_params.iter().map(String::as_str).collect();
            let ctor = self.ctx.declare_constructor(class, &type_params)?;
            let scope = TypeScope {
                constructor: ctor_model
                    .type_params
                    .iter()
                    .enumerate()
                    .filter_map(|(i, name)| {
                        Some((name.clone(), self.ctx.constructor_type_param(ctor, i)?))
                    })
                    .collect(),
                class: class_scope.clone(),
            };

            for param in &ctor_model.params {
                check_identifier(&param.name)?;
                let context = format!("parameter `{}` of `{}`", param.name, class_model.name);
                let declared_type = self.lower_type_text(&param.ty, &scope, context)?;
                let annotations: Vec<&str> = param.annotations.iter().map(String::as_str).collect();
                self.ctx
                    .add_parameter(ctor, &param.name, declared_type, &annotations)?;
            }
            trace!(class = %class_model.name, params = ctor_model.params.len(), "lowered constructor");
        }
        Ok(())
    }

    fn lower_shard(&mut self, shard: &ShardModel) -> Result<ShardProgram, FrontendError> {
        let empty = TypeScope::default();
        let mut fields = Vec::with_capacity(shard.fields.len());
        for field in &shard.fields {
            check_identifier(&field.name)?;
            let context = format!("field `{}` of shard `{}`", field.name, shard.name);
            fields.push((self.lower_type_text(&field.ty, &empty, context)?, field.name.clone()));
        }

        let bindings = shard
            .bindings
            .iter()
            .map(|binding| self.lower_binding(binding))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ShardProgram {
            name: shard.name.clone(),
            reserved: shard.reserved.clone(),
            fields,
            bindings,
        })
    }

    fn lower_binding(&mut self, binding: &BindingModel) -> Result<Binding, FrontendError> {
        let context = format!("binding key `{}`", binding.key);
        let key_type = self.lower_type_text(&binding.key, &TypeScope::default(), context)?;
        let key = match &binding.qualifier {
            Some(qualifier) => Key::qualified(key_type, self.ctx.interner.intern(qualifier)),
            None => Key::new(key_type),
        };

        let constructor = match &binding.constructor {
            Some(reference) => Some(self.constructor_ref(&reference.class, reference.index)?),
            None => None,
        };
        Ok(Binding::new(binding.kind, key, constructor))
    }

    fn constructor_ref(&self, class: &str, index: usize) -> Result<ConstructorId, FrontendError> {
        let id = self
            .lookup_class(class)
            .ok_or_else(|| FrontendError::UnknownClass(class.to_string()))?;
        self.ctx
            .decls
            .class(id)
            .and_then(|decl| decl.constructors.get(index).copied())
            .ok_or_else(|| FrontendError::UnknownConstructor {
                class: class.to_string(),
                index,
            })
    }

    fn lookup_class(&self, name: &str) -> Option<ClassId> {
        let atom = self.ctx.interner.get(name)?;
        self.ctx.decls.class_named(atom)
    }

    fn lower_type_text(
        &mut self,
        text: &str,
        scope: &TypeScope,
        context: String,
    ) -> Result<TypeId, FrontendError> {
        let expr = parse_type_expr(text).map_err(|source| FrontendError::Parse { context, source })?;
        self.lower_type(&expr, scope)
    }

    fn lower_type(&mut self, expr: &TypeExpr, scope: &TypeScope) -> Result<TypeId, FrontendError> {
        match expr {
            TypeExpr::Named { name, args } => {
                if let Some(kind) = PrimitiveKind::from_keyword(name) {
                    if !args.is_empty() {
                        return Err(FrontendError::NotGeneric(name.clone()));
                    }
                    return Ok(kind.type_id());
                }
                if let Some(var) = scope.lookup(name) {
                    if !args.is_empty() {
                        return Err(FrontendError::NotGeneric(name.clone()));
                    }
                    return Ok(var);
                }

                let class = match self.lookup_class(name) {
                    Some(class) => class,
                    None => self.declare_external(name, args.len()),
                };
                let expected = self
                    .ctx
                    .decls
                    .class(class)
                    .map(|decl| decl.type_params.len())
                    .unwrap_or(0);
                // Zero arguments is a raw use of a generic class.
                if !args.is_empty() && args.len() != expected {
                    return Err(FrontendError::TypeArgumentCount {
                        class: name.clone(),
                        expected,
                        found: args.len(),
                    });
                }

                let args = args
                    .iter()
                    .map(|arg| self.lower_type(arg, scope))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(self.ctx.class_type(class, &args))
            }
            TypeExpr::Array(element) => {
                let element = self.lower_type(element, scope)?;
                Ok(self.ctx.types.array(element))
            }
            TypeExpr::Wildcard(bound) => {
                let bound = match bound {
                    None => WildcardBound::Unbounded,
                    Some((BoundKind::Extends, b)) => WildcardBound::Extends(self.lower_type(b, scope)?),
                    Some((BoundKind::Super, b)) => WildcardBound::Super(self.lower_type(b, scope)?),
                };
                Ok(self.ctx.types.wildcard(bound))
            }
        }
    }

    fn declare_external(&mut self, name: &str, arity: usize) -> ClassId {
        let names: Vec<String> = (1..=arity).map(|i| format!("T{i}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        trace!(class = name, arity, "declaring external class");
        self.ctx.declare_external_class(name, &names)
    }
}

fn check_identifier(name: &str) -> Result<(), FrontendError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(FrontendError::InvalidIdentifier(name.to_string()))
    }
}
