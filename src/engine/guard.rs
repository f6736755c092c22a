use serde_json::{Map, Value};

use crate::domain::error::ContractViolation;
use crate::domain::pointer::Pointer;

/// Accepts only object-shaped data.
pub fn check_data(data: &Value) -> Result<&Map<String, Value>, ContractViolation> {
    data.as_object().ok_or(ContractViolation::InvalidData {
        found: value_kind(data),
    })
}

/// Accepts only object-shaped schema values.
pub fn check_schema(schema: &Value) -> Result<&Map<String, Value>, ContractViolation> {
    schema.as_object().ok_or(ContractViolation::InvalidSchema {
        found: value_kind(schema),
    })
}

/// Accepts a schema entry only when it is an object.
pub fn check_field_entry<'a>(
    entry: &'a Value,
    pointer: &Pointer,
) -> Result<&'a Map<String, Value>, ContractViolation> {
    entry
        .as_object()
        .ok_or_else(|| ContractViolation::InvalidResolver {
            pointer: pointer.clone(),
            found: value_kind(entry),
        })
}

/// Checks a named-rule verdict and returns the failed rule names in order.
pub fn check_named_rules<'a>(
    verdict: &'a Value,
    pointer: &Pointer,
) -> Result<Vec<&'a str>, ContractViolation> {
    let rules = verdict
        .as_object()
        .ok_or_else(|| ContractViolation::InvalidRuleMap {
            pointer: pointer.clone(),
            found: value_kind(verdict),
        })?;

    let mut failed = Vec::new();
    for (rule, outcome) in rules {
        match outcome {
            Value::Bool(true) => {}
            Value::Bool(false) => failed.push(rule.as_str()),
            other => {
                return Err(ContractViolation::InvalidNamedRule {
                    pointer: pointer.child(rule.as_str()),
                    found: value_kind(other),
                });
            }
        }
    }
    Ok(failed)
}

/// Type tag used in contract violation messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
