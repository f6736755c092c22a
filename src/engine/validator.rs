use serde_json::Value;

use crate::domain::error::ContractViolation;
use crate::domain::pointer::Pointer;
use crate::domain::validation::{Presence, ValidationError, ValidationReport};
use crate::engine::guard;
use crate::engine::schema::{GuardContext, Predicate, RuleResolver, Schema, SchemaValue};

/// Options for a single validation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    pub presence: Presence,
}

/// Validates `data` against `schema` with default options.
pub fn validate(schema: &Schema, data: &Value) -> Result<ValidationReport, ContractViolation> {
    validate_with(schema, data, ValidateOptions::default())
}

/// Walks `schema` depth-first in key order and collects every failed leaf check.
pub fn validate_with(
    schema: &Schema,
    data: &Value,
    options: ValidateOptions,
) -> Result<ValidationReport, ContractViolation> {
    guard::check_data(data)?;

    let mut walker = Walker {
        root: data,
        presence: options.presence,
        errors: Vec::new(),
    };
    walker.walk(schema, Some(data), &Pointer::root())?;

    Ok(ValidationReport {
        errors: walker.errors,
    })
}

/// Resolver left after all conditionals around it have been admitted.
enum Effective<'s> {
    Nested(&'s Schema),
    Predicate(&'s Predicate),
    NamedRules(&'s RuleResolver),
}

struct Walker<'d> {
    root: &'d Value,
    presence: Presence,
    errors: Vec<ValidationError>,
}

impl<'d> Walker<'d> {
    fn walk(
        &mut self,
        schema: &Schema,
        data: Option<&Value>,
        pointer: &Pointer,
    ) -> Result<(), ContractViolation> {
        for (key, schema_value) in schema.iter() {
            let current = pointer.child(key);

            // Absence is reported once, at the first unreachable level.
            let container = match data {
                Some(container) if !container.is_null() => container,
                _ => {
                    self.push(current, None, None);
                    continue;
                }
            };
            let value = container.as_object().and_then(|map| map.get(key));

            let context = GuardContext {
                value,
                key,
                pointer: &current,
                data: container,
                schema,
                root: self.root,
            };
            let Some(resolver) = admit(schema_value, &context) else {
                continue;
            };

            match resolver {
                Effective::Nested(nested) => self.walk(nested, value, &current)?,
                Effective::Predicate(predicate) => {
                    if !predicate(value.unwrap_or(&Value::Null), &current) {
                        self.push(current, value, None);
                    }
                }
                Effective::NamedRules(resolver) => {
                    let verdict = resolver(value.unwrap_or(&Value::Null), &current);
                    for rule in guard::check_named_rules(&verdict, &current)? {
                        self.push(current.clone(), value, Some(rule));
                    }
                }
            }
        }
        Ok(())
    }

    fn push(&mut self, pointer: Pointer, value: Option<&Value>, rule: Option<&str>) {
        self.errors
            .push(ValidationError::new(pointer, value, rule, self.presence));
    }
}

/// Unwraps conditionals; `None` when any guard on the way rejects the key.
fn admit<'s>(mut schema_value: &'s SchemaValue, context: &GuardContext<'_>) -> Option<Effective<'s>> {
    loop {
        match schema_value {
            SchemaValue::Conditional(conditional) => {
                if !conditional.admits(context) {
                    return None;
                }
                schema_value = conditional.inner();
            }
            SchemaValue::Nested(schema) => return Some(Effective::Nested(schema)),
            SchemaValue::Predicate(predicate) => return Some(Effective::Predicate(predicate)),
            SchemaValue::NamedRules(resolver) => return Some(Effective::NamedRules(resolver)),
        }
    }
}
