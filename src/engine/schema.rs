use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::domain::error::ContractViolation;
use crate::domain::pointer::Pointer;
use crate::engine::{guard, lookup};

/// Judges a single value.
pub type Predicate = Arc<dyn Fn(&Value, &Pointer) -> bool + Send + Sync>;

/// Judges a single value against several named conditions.
///
/// Must return a JSON object whose values are all booleans; rule order is the
/// object's key order.
pub type RuleResolver = Arc<dyn Fn(&Value, &Pointer) -> Value + Send + Sync>;

/// Decides whether a conditional entry is evaluated at all.
pub type Guard = Arc<dyn Fn(&GuardContext<'_>) -> bool + Send + Sync>;

/// Everything a guard may inspect for one schema key.
#[derive(Debug, Clone, Copy)]
pub struct GuardContext<'a> {
    /// Value at the key in the current container, `None` when absent.
    pub value: Option<&'a Value>,
    pub key: &'a str,
    pub pointer: &'a Pointer,
    /// Container object the key is read from.
    pub data: &'a Value,
    /// Schema level the key belongs to.
    pub schema: &'a Schema,
    /// Data passed to the validation call.
    pub root: &'a Value,
}

/// One entry of a [`Schema`].
#[derive(Clone)]
pub enum SchemaValue {
    Predicate(Predicate),
    NamedRules(RuleResolver),
    Nested(Schema),
    Conditional(Conditional),
}

impl fmt::Debug for SchemaValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => formatter.write_str("Predicate(..)"),
            Self::NamedRules(_) => formatter.write_str("NamedRules(..)"),
            Self::Nested(schema) => formatter.debug_tuple("Nested").field(schema).finish(),
            Self::Conditional(conditional) => formatter
                .debug_tuple("Conditional")
                .field(&conditional.inner)
                .finish(),
        }
    }
}

impl From<Schema> for SchemaValue {
    fn from(schema: Schema) -> Self {
        Self::Nested(schema)
    }
}

impl From<Conditional> for SchemaValue {
    fn from(conditional: Conditional) -> Self {
        Self::Conditional(conditional)
    }
}

/// Schema value that is only evaluated when its guard passes.
#[derive(Clone)]
pub struct Conditional {
    guard: Guard,
    inner: Box<SchemaValue>,
}

impl Conditional {
    pub fn new(guard: Guard, inner: SchemaValue) -> Self {
        Self {
            guard,
            inner: Box::new(inner),
        }
    }

    pub fn admits(&self, context: &GuardContext<'_>) -> bool {
        (self.guard)(context)
    }

    pub fn inner(&self) -> &SchemaValue {
        &self.inner
    }
}

/// Ordered mapping from field name to [`SchemaValue`].
///
/// Immutable once handed to the validator and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, SchemaValue>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<SchemaValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces a field. A replaced field keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SchemaValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builds a schema from a JSON value, rejecting anything that is not
/// object-shaped all the way down.
///
/// JSON cannot carry resolvers, so every entry must itself be an object and
/// becomes a nested schema.
impl TryFrom<&Value> for Schema {
    type Error = ContractViolation;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let fields = guard::check_schema(value)?;
        nested_from_map(fields, &Pointer::root())
    }
}

fn nested_from_map(
    fields: &Map<String, Value>,
    pointer: &Pointer,
) -> Result<Schema, ContractViolation> {
    let mut schema = Schema::new();
    for (key, entry) in fields {
        let current = pointer.child(key.as_str());
        let nested = guard::check_field_entry(entry, &current)?;
        schema.insert(key.as_str(), nested_from_map(nested, &current)?);
    }
    Ok(schema)
}

pub fn predicate<F>(resolver: F) -> SchemaValue
where
    F: Fn(&Value, &Pointer) -> bool + Send + Sync + 'static,
{
    SchemaValue::Predicate(Arc::new(resolver))
}

pub fn named<F>(resolver: F) -> SchemaValue
where
    F: Fn(&Value, &Pointer) -> Value + Send + Sync + 'static,
{
    SchemaValue::NamedRules(Arc::new(resolver))
}

/// Evaluates `value` only when `guard` admits the key.
pub fn when<G>(guard: G, value: impl Into<SchemaValue>) -> SchemaValue
where
    G: Fn(&GuardContext<'_>) -> bool + Send + Sync + 'static,
{
    SchemaValue::Conditional(Conditional::new(Arc::new(guard), value.into()))
}

/// Evaluates `value` only when something non-null is present at its pointer.
pub fn optional(value: impl Into<SchemaValue>) -> SchemaValue {
    when(
        |context: &GuardContext<'_>| lookup::is_present(context.pointer, context.root),
        value,
    )
}
