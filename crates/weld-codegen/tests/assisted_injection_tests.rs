use weld_codegen::{
    Binding, BindingKind, CodegenError, JAVA_RESERVED_WORDS, Key, ParameterSpec, Shard,
    assisted_parameter_specs, assisted_parameter_specs_with, is_assisted_parameter,
    render_parameter_list,
};
use weld_types::{ClassId, ConstructorId, ParamId, TypeContext, TypeId, TypeResolveError};

struct Foo {
    ctx: TypeContext,
    class: ClassId,
    ctor: ConstructorId,
    data: ParamId,
    log: ParamId,
    string_ty: TypeId,
}

/// `class Foo<T> { @AssistedInject Foo(@Assisted T data, Logger log) }`
fn foo() -> Foo {
    let mut ctx = TypeContext::new();
    let class = ctx.declare_class("Foo", &["T"]);
    let logger = ctx.declare_external_class("Logger", &[]);
    let string = ctx.declare_external_class("String", &[]);
    let logger_ty = ctx.class_type(logger, &[]);
    let string_ty = ctx.class_type(string, &[]);
    let t = ctx.class_type_param(class, 0).expect("T");
    let ctor = ctx.declare_constructor(class, &[]).expect("constructor");
    let data = ctx.add_parameter(ctor, "data", t, &["Assisted"]).expect("data");
    let log = ctx.add_parameter(ctor, "log", logger_ty, &[]).expect("log");
    Foo {
        ctx,
        class,
        ctor,
        data,
        log,
        string_ty,
    }
}

fn foo_of_string(f: &Foo) -> Binding {
    let key = Key::new(f.ctx.class_type(f.class, &[f.string_ty]));
    Binding::assisted_injection(key, f.ctor)
}

#[test]
fn test_generic_assisted_parameter_is_substituted_and_named() {
    let f = foo();
    let mut shard = Shard::new("AppComponentImpl");

    let specs = assisted_parameter_specs(&foo_of_string(&f), &f.ctx, &mut shard).expect("specs");

    assert_eq!(specs, vec![ParameterSpec::new(f.string_ty, "data")]);
    assert_eq!(render_parameter_list(&f.ctx, &specs), "(String data)");
    assert_eq!(shard.assisted_param_name(f.data), Some("data"));
    assert_eq!(shard.assisted_param_name(f.log), None);
    assert!(!shard.scope().is_in_use("log"));
}

#[test]
fn test_name_taken_by_another_parameter_gets_suffix() {
    let mut f = foo();
    let other = f.ctx.declare_class("Other", &[]);
    let other_ctor = f.ctx.declare_constructor(other, &[]).expect("Other()");
    let other_data = f
        .ctx
        .add_parameter(other_ctor, "data", TypeId::INT, &["Assisted"])
        .expect("Other.data");
    let mut shard = Shard::new("AppComponentImpl");
    assert_eq!(shard.unique_field_name_for_assisted_param(&f.ctx, other_data), "data");

    let specs = assisted_parameter_specs(&foo_of_string(&f), &f.ctx, &mut shard).expect("specs");

    assert_eq!(specs, vec![ParameterSpec::new(f.string_ty, "data2")]);
    assert_eq!(shard.assisted_param_name(other_data), Some("data"));
}

#[test]
fn test_same_named_parameters_in_two_constructors() {
    let mut ctx = TypeContext::new();
    let a = ctx.declare_class("A", &[]);
    let b = ctx.declare_class("B", &[]);
    let a_ctor = ctx.declare_constructor(a, &[]).expect("A()");
    let b_ctor = ctx.declare_constructor(b, &[]).expect("B()");
    ctx.add_parameter(a_ctor, "value", TypeId::INT, &["Assisted"]).expect("A.value");
    ctx.add_parameter(b_ctor, "value", TypeId::LONG, &["Assisted"]).expect("B.value");
    let a_binding = Binding::assisted_injection(Key::new(ctx.class_type(a, &[])), a_ctor);
    let b_binding = Binding::assisted_injection(Key::new(ctx.class_type(b, &[])), b_ctor);
    let mut shard = Shard::new("AppComponentImpl");

    let a_specs = assisted_parameter_specs(&a_binding, &ctx, &mut shard).expect("A specs");
    let b_specs = assisted_parameter_specs(&b_binding, &ctx, &mut shard).expect("B specs");

    assert_eq!(a_specs, vec![ParameterSpec::new(TypeId::INT, "value")]);
    assert_eq!(b_specs, vec![ParameterSpec::new(TypeId::LONG, "value2")]);
}

#[test]
fn test_repeated_calls_return_the_same_names() {
    let f = foo();
    let binding = foo_of_string(&f);
    let mut shard = Shard::new("AppComponentImpl");

    let first = assisted_parameter_specs(&binding, &f.ctx, &mut shard).expect("first");
    let second = assisted_parameter_specs(&binding, &f.ctx, &mut shard).expect("second");

    assert_eq!(first, second);
    assert_eq!(shard.scope().allocated_param_count(), 1);
}

#[test]
fn test_fields_and_parameters_share_the_scope() {
    let f = foo();
    let mut shard = Shard::new("AppComponentImpl");
    let field_name = shard.add_field(f.string_ty, "data").name.clone();
    assert_eq!(field_name, "data");

    let specs = assisted_parameter_specs(&foo_of_string(&f), &f.ctx, &mut shard).expect("specs");
    assert_eq!(specs[0].name, "data2");

    let field = shard.add_field(f.string_ty, "data");
    assert_eq!(field.name, "data3");
    assert_eq!(field.render(&f.ctx), "private final String data3;");
    assert_eq!(shard.fields().len(), 2);
}

#[test]
fn test_order_follows_declaration_not_name() {
    let mut ctx = TypeContext::new();
    let widget = ctx.declare_class("Widget", &["A", "B"]);
    let a = ctx.class_type_param(widget, 0).expect("A");
    let b = ctx.class_type_param(widget, 1).expect("B");
    let ctor = ctx.declare_constructor(widget, &[]).expect("Widget()");
    ctx.add_parameter(ctor, "zeta", b, &["Assisted"]).expect("zeta");
    ctx.add_parameter(ctor, "injected", TypeId::INT, &[]).expect("injected");
    ctx.add_parameter(ctor, "alpha", a, &["dagger.assisted.Assisted"]).expect("alpha");
    ctx.add_parameter(ctor, "mid", TypeId::BOOLEAN, &["@weld.Assisted"]).expect("mid");
    let key = Key::new(ctx.class_type(widget, &[TypeId::LONG, TypeId::DOUBLE]));
    let binding = Binding::assisted_injection(key, ctor);
    let mut shard = Shard::new("AppComponentImpl");

    let specs = assisted_parameter_specs(&binding, &ctx, &mut shard).expect("specs");

    assert_eq!(
        render_parameter_list(&ctx, &specs),
        "(double zeta, long alpha, boolean mid)"
    );
}

#[test]
fn test_custom_predicate() {
    let f = foo();
    let log = f.log;
    let mut shard = Shard::new("AppComponentImpl");

    let specs = assisted_parameter_specs_with(
        &foo_of_string(&f),
        &f.ctx,
        &mut shard,
        &|param: ParamId| param == log,
    )
    .expect("specs");

    assert_eq!(render_parameter_list(&f.ctx, &specs), "(Logger log)");
    assert_eq!(shard.assisted_param_name(f.data), None);
}

#[test]
fn test_annotation_predicate() {
    let f = foo();
    assert!(is_assisted_parameter(&f.ctx, f.data));
    assert!(!is_assisted_parameter(&f.ctx, f.log));
    assert!(!is_assisted_parameter(&f.ctx, ParamId(1_000)));
}

#[test]
fn test_reserved_words_in_shard() {
    let mut ctx = TypeContext::new();
    let holder = ctx.declare_class("Holder", &[]);
    let ctor = ctx.declare_constructor(holder, &[]).expect("Holder()");
    ctx.add_parameter(ctor, "new", TypeId::INT, &["Assisted"]).expect("new");
    let binding = Binding::assisted_injection(Key::new(ctx.class_type(holder, &[])), ctor);
    let mut shard = Shard::with_reserved_words("AppComponentImpl", JAVA_RESERVED_WORDS);

    let specs = assisted_parameter_specs(&binding, &ctx, &mut shard).expect("specs");
    assert_eq!(specs[0].name, "new2");
}

#[test]
fn test_rejects_non_assisted_binding() {
    let f = foo();
    let key = Key::new(f.ctx.class_type(f.class, &[f.string_ty]));
    let binding = Binding::injection(key, f.ctor);
    let mut shard = Shard::new("AppComponentImpl");

    let err = assisted_parameter_specs(&binding, &f.ctx, &mut shard).unwrap_err();

    assert_eq!(
        err,
        CodegenError::InvalidBindingKind {
            expected: BindingKind::AssistedInjection,
            found: BindingKind::Injection,
        }
    );
    assert_eq!(shard.scope().allocated_param_count(), 0);
}

#[test]
fn test_missing_constructor_element() {
    let f = foo();
    let key = Key::new(f.ctx.class_type(f.class, &[f.string_ty]));
    let binding = Binding::new(BindingKind::AssistedInjection, key, None);
    let mut shard = Shard::new("AppComponentImpl");

    let err = assisted_parameter_specs(&binding, &f.ctx, &mut shard).unwrap_err();
    assert_eq!(
        err,
        CodegenError::MissingBindingElement {
            kind: BindingKind::AssistedInjection,
            key: "Foo<String>".to_string(),
        }
    );
}

#[test]
fn test_key_of_wrong_class_is_a_type_mismatch() {
    let f = foo();
    let binding = Binding::assisted_injection(Key::new(f.string_ty), f.ctor);
    let mut shard = Shard::new("AppComponentImpl");

    let err = assisted_parameter_specs(&binding, &f.ctx, &mut shard).unwrap_err();
    assert!(matches!(
        err,
        CodegenError::Type(TypeResolveError::TypeMismatch { .. })
    ));
    assert_eq!(
        err.to_string(),
        "constructor declared on `Foo` cannot be resolved as a member of `String`"
    );
}

#[test]
fn test_qualified_key_formatting() {
    let mut f = foo();
    let named = f.ctx.interner.intern("Named");
    let key = Key::qualified(f.ctx.class_type(f.class, &[TypeId::INT]), named);
    assert_eq!(key.format(&f.ctx), "@Named Foo<int>");
}
