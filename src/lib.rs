//! Schema-driven structural validation of keyed data.
//!
//! A [`Schema`] maps field names to resolvers; [`validate`] walks it against a
//! JSON object and returns every failed check as a flat, ordered list.

pub mod domain;
pub mod engine;

pub use domain::error::ContractViolation;
pub use domain::pointer::Pointer;
pub use domain::validation::{ErrorStatus, Presence, ValidationError, ValidationReport};
pub use engine::lookup::lookup;
pub use engine::schema::{GuardContext, Schema, SchemaValue, named, optional, predicate, when};
pub use engine::validator::{ValidateOptions, validate, validate_with};
