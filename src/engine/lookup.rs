use serde_json::Value;

use crate::domain::pointer::Pointer;

/// Resolves the value at `pointer` inside `data`.
///
/// Returns `None` as soon as an intermediate level is `null`, absent, or not an
/// object. A `null` stored at the final segment is returned as-is.
pub fn lookup<'a>(pointer: &Pointer, data: &'a Value) -> Option<&'a Value> {
    let mut current = data;
    for segment in pointer.segments() {
        match current {
            Value::Object(map) => current = map.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}

/// True when a non-null value exists at `pointer`.
pub fn is_present(pointer: &Pointer, data: &Value) -> bool {
    lookup(pointer, data).is_some_and(|value| !value.is_null())
}
