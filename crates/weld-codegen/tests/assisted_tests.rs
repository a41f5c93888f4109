use super::*;
use weld_types::{ClassId, ParamId};

/// `class Foo<T> { Foo(T data, Logger log) }` with no annotations; the
/// tests classify parameters with closures.
struct Fixture {
    ctx: TypeContext,
    foo: ClassId,
    signature: ConstructorSignature,
    data: ParamId,
    log: ParamId,
    string_ty: TypeId,
}

fn fixture() -> Fixture {
    let mut ctx = TypeContext::new();
    let foo = ctx.declare_class("Foo", &["T"]);
    let logger = ctx.declare_external_class("Logger", &[]);
    let string = ctx.declare_external_class("String", &[]);
    let logger_ty = ctx.class_type(logger, &[]);
    let string_ty = ctx.class_type(string, &[]);
    let t = ctx.class_type_param(foo, 0).expect("T");
    let ctor = ctx.declare_constructor(foo, &[]).expect("constructor");
    let data = ctx.add_parameter(ctor, "data", t, &[]).expect("data");
    let log = ctx.add_parameter(ctor, "log", logger_ty, &[]).expect("log");
    let signature = ctx.constructor_signature(ctor).expect("signature");
    Fixture {
        ctx,
        foo,
        signature,
        data,
        log,
        string_ty,
    }
}

#[test]
fn test_only_caller_supplied_parameters_are_named() {
    let f = fixture();
    let enclosing = f.ctx.class_type(f.foo, &[f.string_ty]);
    let data = f.data;
    let mut scope = NamingScope::new();

    let specs = resolve_assisted_parameters(
        &f.ctx,
        &f.signature,
        enclosing,
        &|param: ParamId| param == data,
        &mut scope,
    )
    .expect("specs");

    assert_eq!(specs, vec![ParameterSpec::new(f.string_ty, "data")]);
    assert_eq!(scope.allocated_name(f.log), None);
    assert!(!scope.is_in_use("log"));
}

#[test]
fn test_no_caller_supplied_parameters_leaves_scope_untouched() {
    let f = fixture();
    let enclosing = f.ctx.class_type(f.foo, &[TypeId::INT]);
    let mut scope = NamingScope::new();

    let specs = resolve_assisted_parameters(
        &f.ctx,
        &f.signature,
        enclosing,
        &|_: ParamId| false,
        &mut scope,
    )
    .expect("specs");

    assert!(specs.is_empty());
    assert_eq!(scope.allocated_param_count(), 0);
    assert!(scope.names().is_empty());
}

#[test]
fn test_all_parameters_in_declaration_order() {
    let f = fixture();
    let enclosing = f.ctx.class_type(f.foo, &[TypeId::INT]);
    let mut scope = NamingScope::new();

    let specs = resolve_assisted_parameters(
        &f.ctx,
        &f.signature,
        enclosing,
        &|_: ParamId| true,
        &mut scope,
    )
    .expect("specs");

    let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["data", "log"]);
    assert_eq!(specs[0].type_id, TypeId::INT);
}

#[test]
fn test_type_errors_propagate_before_any_allocation() {
    let f = fixture();
    let raw = f.ctx.class_type(f.foo, &[]);
    let mut scope = NamingScope::new();

    let err = resolve_assisted_parameters(
        &f.ctx,
        &f.signature,
        raw,
        &|_: ParamId| true,
        &mut scope,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CodegenError::Type(weld_types::TypeResolveError::ArityMismatch { .. })
    ));
    assert_eq!(scope.allocated_param_count(), 0);
}

#[test]
fn test_repeated_resolution_reuses_names() {
    let f = fixture();
    let enclosing = f.ctx.class_type(f.foo, &[f.string_ty]);
    let mut scope = NamingScope::new();
    let supplied = |_: ParamId| true;

    let first = resolve_assisted_parameters(&f.ctx, &f.signature, enclosing, &supplied, &mut scope)
        .expect("first");
    let second = resolve_assisted_parameters(&f.ctx, &f.signature, enclosing, &supplied, &mut scope)
        .expect("second");

    assert_eq!(first, second);
    assert_eq!(scope.names().len(), 2);
}
