use super::*;
use serde_json::json;

fn model(value: serde_json::Value) -> Model {
    serde_json::from_value(value).expect("valid model")
}

/// `class Foo<T> { @AssistedInject Foo(@Assisted T data, Logger log) }`
fn foo_class() -> serde_json::Value {
    json!({
        "name": "Foo",
        "type_params": ["T"],
        "constructors": [{
            "params": [
                { "name": "data", "type": "T", "annotations": ["Assisted"] },
                { "name": "log", "type": "Logger" }
            ]
        }]
    })
}

fn foo_binding() -> serde_json::Value {
    json!({
        "kind": "assisted_injection",
        "key": "Foo<String>",
        "constructor": { "class": "Foo" }
    })
}

#[test]
fn test_assisted_binding_reports_substituted_parameters() {
    let model = model(json!({
        "classes": [foo_class()],
        "shards": [{ "name": "AppComponentImpl", "bindings": [foo_binding()] }]
    }));

    let reports = run(&model, &DriverOptions::default()).expect("run");

    assert_eq!(reports.len(), 1);
    let binding = &reports[0].bindings[0];
    assert_eq!(binding.kind, BindingKind::AssistedInjection);
    assert_eq!(binding.key, "Foo<String>");
    assert_eq!(
        binding.parameters,
        vec![ParameterReport {
            ty: "String".to_string(),
            name: "data".to_string(),
        }]
    );
    assert_eq!(binding.signature, "(String data)");
}

#[test]
fn test_shard_fields_and_parameters_share_names() {
    let model = model(json!({
        "classes": [foo_class()],
        "shards": [{
            "name": "AppComponentImpl",
            "fields": [{ "name": "data", "type": "Logger" }],
            "bindings": [foo_binding()]
        }]
    }));

    let reports = run(&model, &DriverOptions::default()).expect("run");

    assert_eq!(reports[0].fields, vec!["private final Logger data;"]);
    assert_eq!(reports[0].bindings[0].signature, "(String data2)");
}

#[test]
fn test_explicit_reserved_names_are_skipped() {
    let model = model(json!({
        "classes": [foo_class()],
        "shards": [{
            "name": "AppComponentImpl",
            "reserved": ["data", "data2"],
            "bindings": [foo_binding()]
        }]
    }));

    let reports = run(&model, &DriverOptions::default()).expect("run");

    assert_eq!(reports[0].bindings[0].signature, "(String data3)");
}

#[test]
fn test_reserved_words_option() {
    let model = model(json!({
        "classes": [{
            "name": "Task",
            "constructors": [{
                "params": [{ "name": "new", "type": "boolean", "annotations": ["Assisted"] }]
            }]
        }],
        "shards": [{
            "name": "C",
            "bindings": [{
                "kind": "assisted_injection",
                "key": "Task",
                "constructor": { "class": "Task" }
            }]
        }]
    }));

    let with_words = run(&model, &DriverOptions::default()).expect("run");
    assert_eq!(with_words[0].bindings[0].signature, "(boolean new2)");

    let without_words = run(
        &model,
        &DriverOptions {
            reserved_words: false,
        },
    )
    .expect("run");
    assert_eq!(without_words[0].bindings[0].signature, "(boolean new)");
}

#[test]
fn test_non_assisted_bindings_have_no_parameters() {
    let model = model(json!({
        "shards": [{
            "name": "C",
            "bindings": [{ "kind": "provision", "key": "Logger", "qualifier": "Named" }]
        }]
    }));

    let reports = run(&model, &DriverOptions::default()).expect("run");

    let binding = &reports[0].bindings[0];
    assert_eq!(binding.kind, BindingKind::Provision);
    assert_eq!(binding.key, "@Named Logger");
    assert!(binding.parameters.is_empty());
    assert_eq!(binding.signature, "()");
}

#[test]
fn test_shards_have_independent_scopes() {
    let model = model(json!({
        "classes": [foo_class()],
        "shards": [
            { "name": "A", "bindings": [foo_binding()] },
            { "name": "B", "bindings": [foo_binding()] }
        ]
    }));

    let reports = run(&model, &DriverOptions::default()).expect("run");

    assert_eq!(reports[0].bindings[0].signature, "(String data)");
    assert_eq!(reports[1].bindings[0].signature, "(String data)");
}

#[test]
fn test_raw_key_is_an_error() {
    let model = model(json!({
        "classes": [foo_class()],
        "shards": [{
            "name": "C",
            "bindings": [{
                "kind": "assisted_injection",
                "key": "Foo",
                "constructor": { "class": "Foo" }
            }]
        }]
    }));

    let err = run(&model, &DriverOptions::default()).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("of `Foo` in shard `C`"), "{message}");
    assert!(
        message.contains("`Foo` declares 1 type parameter(s) but is instantiated with 0"),
        "{message}"
    );
}

#[test]
fn test_missing_constructor_is_an_error() {
    let model = model(json!({
        "classes": [foo_class()],
        "shards": [{
            "name": "C",
            "bindings": [{ "kind": "assisted_injection", "key": "Foo<String>" }]
        }]
    }));

    let err = run(&model, &DriverOptions::default()).unwrap_err();

    let message = format!("{err:#}");
    assert!(
        message.contains("assisted_injection binding for `Foo<String>` has no constructor element"),
        "{message}"
    );
}

#[test]
fn test_render_text() {
    let reports = vec![ShardReport {
        name: "AppComponentImpl".to_string(),
        fields: vec!["private final Logger data;".to_string()],
        bindings: vec![BindingReport {
            kind: BindingKind::AssistedInjection,
            key: "Foo<String>".to_string(),
            parameters: vec![ParameterReport {
                ty: "String".to_string(),
                name: "data2".to_string(),
            }],
            signature: "(String data2)".to_string(),
        }],
    }];

    assert_eq!(
        render_text(&reports),
        "shard AppComponentImpl\n  private final Logger data;\n  assisted_injection Foo<String>(String data2)\n"
    );
}
