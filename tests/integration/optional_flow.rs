use serde_json::json;
use shapeval::{ErrorStatus, Schema, optional, predicate, validate, when};

fn optional_billing() -> Schema {
    Schema::new().field(
        "billingDetails",
        optional(Schema::new().field(
            "country",
            predicate(|value, _| value == "uk" || value == "us"),
        )),
    )
}

#[test]
fn optional_nested_schema_is_skipped_when_absent() {
    let report = validate(&optional_billing(), &json!({})).expect("report");
    assert!(report.is_valid());

    let report = validate(&optional_billing(), &json!({"billingDetails": null})).expect("report");
    assert!(report.is_valid());
}

#[test]
fn optional_nested_schema_is_checked_when_present() {
    let report = validate(
        &optional_billing(),
        &json!({"billingDetails": {"firstName": "John"}}),
    )
    .expect("report");
    assert_eq!(
        serde_json::to_value(&report.errors).expect("json"),
        json!([{"pointer": ["billingDetails", "country"], "status": "missing"}])
    );
}

#[test]
fn optional_predicate_reports_present_invalid_value() {
    let schema = Schema::new().field("age", optional(predicate(|value, _| value.is_u64())));

    assert!(validate(&schema, &json!({})).expect("report").is_valid());

    let report = validate(&schema, &json!({"age": "old"})).expect("report");
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.errors[0].status, ErrorStatus::Invalid);
    assert_eq!(report.errors[0].value, Some(json!("old")));
}

#[test]
fn custom_guard_can_depend_on_sibling_fields() {
    let schema = Schema::new().field(
        "vatNumber",
        when(
            |context| context.data["accountType"] == "business",
            predicate(|value, _| value.as_str().is_some_and(|vat| vat.starts_with("GB"))),
        ),
    );

    let personal = validate(&schema, &json!({"accountType": "personal"})).expect("report");
    assert!(personal.is_valid());

    let business = validate(&schema, &json!({"accountType": "business"})).expect("report");
    assert_eq!(business.error_count(), 1);
    assert_eq!(business.errors[0].status, ErrorStatus::Missing);
}
