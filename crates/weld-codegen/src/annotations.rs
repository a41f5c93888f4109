//! Classification of caller-supplied constructor parameters.

use weld_types::{ParamId, TypeContext};

/// Simple name of the annotation marking a caller-supplied parameter.
pub const ASSISTED_ANNOTATION: &str = "Assisted";

/// Decides whether a constructor parameter is supplied by the caller of the
/// generated factory rather than injected from the graph.
pub trait CallerSupplied {
    fn is_caller_supplied(&self, param: ParamId) -> bool;
}

impl<F> CallerSupplied for F
where
    F: Fn(ParamId) -> bool,
{
    fn is_caller_supplied(&self, param: ParamId) -> bool {
        self(param)
    }
}

/// The default classification: the parameter is annotated `@Assisted`.
pub struct AssistedAnnotation<'a> {
    ctx: &'a TypeContext,
}

impl<'a> AssistedAnnotation<'a> {
    pub fn new(ctx: &'a TypeContext) -> Self {
        AssistedAnnotation { ctx }
    }
}

impl CallerSupplied for AssistedAnnotation<'_> {
    fn is_caller_supplied(&self, param: ParamId) -> bool {
        is_assisted_parameter(self.ctx, param)
    }
}

/// True if `param` carries an annotation whose simple name is `Assisted`,
/// however it is qualified.
pub fn is_assisted_parameter(ctx: &TypeContext, param: ParamId) -> bool {
    let Some(decl) = ctx.decls.param(param) else {
        return false;
    };
    decl.annotations.iter().any(|&annotation| {
        let name = ctx.interner.resolve(annotation);
        let name = name.strip_prefix('@').unwrap_or(name);
        simple_name(name) == ASSISTED_ANNOTATION
    })
}

fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
