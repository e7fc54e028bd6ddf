use std::sync::LazyLock;

use serde_json::json;
use shapecheck::prelude::*;

fn setting() -> Validator {
    an_object([
        ("name", a_string()),
        ("value", a_string().or_null()),
        ("enabled", a_boolean()),
    ])
}

static ITEM: LazyLock<Validator> = LazyLock::new(|| {
    an_object([
        ("name", Thunk::from(a_string())),
        ("value", Thunk::from(a_number())),
        ("subItems", Thunk::deferred(|| ITEM.array().or_undefined())),
    ])
});

static NODE: LazyLock<Validator> = LazyLock::new(|| {
    an_object([
        ("value", Thunk::from(a_number())),
        ("next", Thunk::deferred(|| NODE.or_null())),
    ])
});

#[test]
fn identity_preserved_for_already_valid_object() {
    let input = Value::from(json!({ "name": "", "value": null, "enabled": true }));
    let output = setting().validate(&input).unwrap();
    assert!(output.is_identical(&input));
}

#[test]
fn identity_preserved_for_array_of_objects() {
    let input = Value::from(json!([
        { "name": "a", "value": "1", "enabled": false },
        { "name": "b", "value": null, "enabled": true }
    ]));
    let output = setting().array().validate(&input).unwrap();
    assert!(output.is_identical(&input));
}

#[test]
fn missing_required_key_mentions_path() {
    let err = an_object([("name", a_string())])
        .validate(&Value::from(json!({})))
        .unwrap_err();
    assert_eq!(err.dotted_path(), "name");
    assert!(err.to_string().contains("'name'"));
}

#[test]
fn absent_and_explicit_undefined_stay_distinct() {
    let shape = an_object([("name", a_string()), ("extra", a_string().or_undefined())]);

    let output = shape.validate(&Value::object([("name", "x")])).unwrap();
    assert!(!output.contains_key("extra"));

    let output = shape
        .validate(&Value::object([
            ("name", Value::from("x")),
            ("extra", Value::Undefined),
        ]))
        .unwrap();
    assert!(output.contains_key("extra"));
    assert!(output.get("extra").is_some_and(Value::is_undefined));
}

#[test]
fn extra_keys_follow_options() {
    let shape = an_object([("name", a_string())]);
    let input = Value::from(json!({ "name": "x", "foo": "bar" }));

    let err = shape.validate(&input).unwrap_err();
    assert_eq!(err.message(), "unexpected property \"foo\"");
    assert!(!shape.is_valid(&input));

    let options = ValidationOptions::permissive();
    let output = shape.validate_with(&input, &options).unwrap();
    assert_eq!(output.get("foo"), Some(&Value::from("bar")));
    assert!(shape.is_valid_with(&input, &options));
}

#[test]
fn options_reach_nested_objects() {
    let shape = an_object([("inner", an_object([("a", a_number())]).array())]);
    let input = Value::from(json!({ "inner": [{ "a": 1, "b": 2 }] }));

    let err = shape.validate(&input).unwrap_err();
    assert_eq!(err.dotted_path(), "inner.0");

    let output = shape
        .validate_with(&input, &ValidationOptions::permissive())
        .unwrap();
    assert_eq!(output.to_json(), Some(json!({ "inner": [{ "a": 1, "b": 2 }] })));
}

#[test]
fn union_tries_alternatives_in_order() {
    let text_or_number = a_string().or(&a_number());
    assert_eq!(text_or_number.validate(&Value::from(3)).unwrap(), Value::from(3));
    assert!(text_or_number.validate(&Value::from(true)).is_err());
}

#[test]
fn error_path_runs_through_arrays() {
    let input = Value::from(json!({
        "name": "root",
        "value": 1,
        "subItems": [{ "name": "", "value": "not-a-number" }]
    }));

    let err = ITEM.validate(&input).unwrap_err();
    assert_eq!(err.dotted_path(), "subItems.0.value");
    assert_eq!(
        err.to_string(),
        "Validation error for key 'subItems.0.value': expected a number, not a string"
    );
}

#[test]
fn recursive_shape_validates_linked_list() {
    let input = Value::from(json!({
        "value": 1,
        "next": { "value": 2, "next": { "value": 3, "next": { "value": 4, "next": null } } }
    }));

    let output = NODE.validate(&input).unwrap();
    assert!(output.is_identical(&input));

    let broken = Value::from(json!({
        "value": 1,
        "next": { "value": 2, "next": { "value": "three", "next": null } }
    }));
    assert_eq!(
        NODE.validate(&broken).unwrap_err().dotted_path(),
        "next.next.value"
    );
}

#[test]
fn recursive_tree_accepts_absent_children() {
    let input = Value::from(json!({
        "name": "root",
        "value": 0,
        "subItems": [
            { "name": "leaf", "value": 1 },
            { "name": "branch", "value": 2, "subItems": [] }
        ]
    }));

    let output = ITEM.validate(&input).unwrap();
    assert!(output.is_identical(&input));
    assert!(output
        .get("subItems")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .is_some_and(|leaf| !leaf.contains_key("subItems")));
}

#[test]
fn failed_sibling_does_not_leak_path_state() {
    let shape = an_object([
        ("id", a_number().or(&a_string())),
        ("tags", a_string().array()),
    ]);
    let mut ctx = ValidationContext::new();
    let options = ValidationOptions::default();

    let err = shape
        .validate_in(&Value::from(json!({ "id": 1, "tags": ["a", 2] })), &options, &mut ctx)
        .unwrap_err();
    assert_eq!(err.dotted_path(), "tags.1");
    assert!(ctx.path().is_empty());

    let err = shape
        .validate_in(&Value::from(json!({ "id": true, "tags": [] })), &options, &mut ctx)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation error for key 'id': expected a string, not a boolean"
    );
}

#[test]
fn validators_are_shared_across_threads() {
    let shape = setting().array();
    let good = Value::from(json!([{ "name": "a", "value": null, "enabled": true }]));
    let bad = Value::from(json!([{ "name": "a", "value": 1, "enabled": true }]));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(shape.validate(&good).unwrap().is_identical(&good));
                    assert_eq!(shape.validate(&bad).unwrap_err().dotted_path(), "0.value");
                }
            });
        }
    });
}
