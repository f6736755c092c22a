use serde_json::json;
use shapeval::{ContractViolation, Schema, named, predicate, validate};

#[test]
fn scalar_schema_value_names_its_kind() {
    for (schema, kind) in [
        (json!(42), "number"),
        (json!("schema"), "string"),
        (json!([]), "array"),
        (json!(null), "null"),
    ] {
        let error = Schema::try_from(&schema).expect_err("must reject");
        assert_eq!(error, ContractViolation::InvalidSchema { found: kind });
    }
}

#[test]
fn scalar_data_names_its_kind() {
    let schema = Schema::new();
    for (data, kind) in [
        (json!(2), "number"),
        (json!("data"), "string"),
        (json!([]), "array"),
        (json!(null), "null"),
    ] {
        let error = validate(&schema, &data).expect_err("must reject");
        assert_eq!(
            error.to_string(),
            format!("invalid data: expected data to be an object, but got {kind}")
        );
    }
}

#[test]
fn non_boolean_named_rule_aborts_without_partial_report() {
    let schema = Schema::new()
        .field("lastName", predicate(|_, _| false))
        .field("firstName", named(|_, _| json!({"minLength": 2})));

    let error = validate(&schema, &json!({"firstName": "John"})).expect_err("must abort");
    match error {
        ContractViolation::InvalidNamedRule { pointer, found } => {
            assert_eq!(pointer.to_string(), "firstName.minLength");
            assert_eq!(found, "number");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn named_resolver_must_return_an_object() {
    let schema = Schema::new().field("firstName", named(|_, _| json!("nope")));
    let error = validate(&schema, &json!({})).expect_err("must abort");
    assert_eq!(
        error.to_string(),
        "invalid schema at `firstName`: expected named rules to be an object, but got string"
    );
}

#[test]
fn guard_failures_do_not_fire_for_skipped_branches() {
    let schema = Schema::new().field(
        "extra",
        shapeval::optional(named(|_, _| json!({"broken": "yes"}))),
    );
    assert!(validate(&schema, &json!({})).expect("report").is_valid());
}
