use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::pointer::Pointer;

/// Why a leaf check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStatus {
    Missing,
    Invalid,
}

/// How a failing value is classified as `missing` or `invalid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    /// `null`, `false`, `0` and `""` count as missing.
    #[default]
    Truthy,
    /// Only absent and `null` values count as missing.
    Defined,
}

impl Presence {
    pub fn is_present(self, value: Option<&Value>) -> bool {
        match (self, value) {
            (_, None) | (_, Some(Value::Null)) => false,
            (Self::Defined, Some(_)) => true,
            (Self::Truthy, Some(value)) => is_truthy(value),
        }
    }

    pub fn status_of(self, value: Option<&Value>) -> ErrorStatus {
        if self.is_present(value) {
            ErrorStatus::Invalid
        } else {
            ErrorStatus::Missing
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Single failed leaf check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationError {
    pub pointer: Pointer,
    pub status: ErrorStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl ValidationError {
    /// Builds an error whose status and carried value follow `presence`.
    pub fn new(
        pointer: Pointer,
        value: Option<&Value>,
        rule: Option<&str>,
        presence: Presence,
    ) -> Self {
        let status = presence.status_of(value);
        Self {
            pointer,
            status,
            value: match status {
                ErrorStatus::Invalid => value.cloned(),
                ErrorStatus::Missing => None,
            },
            rule: rule.map(ToOwned::to_owned),
        }
    }
}

/// Ordered outcome of one validation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
