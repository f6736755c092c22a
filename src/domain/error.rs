use thiserror::Error;

use crate::domain::pointer::Pointer;

/// Malformed schema or data shape, detected before or during traversal.
///
/// These are programming errors in schema authoring, not findings about the
/// data; they abort the validation call and no partial report is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractViolation {
    /// Schema value is not an object.
    #[error("invalid schema: expected schema to be an object, but got {found}")]
    InvalidSchema { found: &'static str },

    /// Validated data is not an object.
    #[error("invalid data: expected data to be an object, but got {found}")]
    InvalidData { found: &'static str },

    /// Schema entry is neither a resolver nor a nested schema.
    #[error(
        "invalid schema at `{pointer}`: expected resolver to be a function or nested schema, but got {found}"
    )]
    InvalidResolver {
        pointer: Pointer,
        found: &'static str,
    },

    /// Named-rule resolver returned something other than an object.
    #[error("invalid schema at `{pointer}`: expected named rules to be an object, but got {found}")]
    InvalidRuleMap {
        pointer: Pointer,
        found: &'static str,
    },

    /// Named-rule verdict is not a boolean. The pointer ends with the rule name.
    #[error("invalid schema at `{pointer}`: expected named rule to be a boolean, but got {found}")]
    InvalidNamedRule {
        pointer: Pointer,
        found: &'static str,
    },
}
