//! Default-chained access into untyped upstream JSON.
//!
//! Upstream payloads are never trusted to have a given shape. Every read goes
//! through a path of segments: object keys, or decimal indices into arrays. A
//! missing key, an out-of-range index, a `null`, or a value of the wrong type
//! all resolve to the caller's default.

use serde_json::{Number, Value};

/// Walks `path` from `value`. Returns `None` as soon as a segment does not
/// apply to the current node.
pub fn lookup<'v>(value: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter().try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Conversion from a JSON node to a concrete field type.
pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Option<Self>;
}

impl FromJson for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromJson for Number {
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(n.clone()),
            _ => None,
        }
    }
}

pub fn get_or_default<T: FromJson>(value: &Value, path: &[&str], default: T) -> T {
    lookup(value, path)
        .and_then(T::from_json)
        .unwrap_or(default)
}

/// Length of the array at `path`, or 0 when there is no array there.
pub fn count(value: &Value, path: &[&str]) -> usize {
    lookup(value, path)
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Number of elements of the array at `path` satisfying `predicate`.
pub fn count_where<F>(value: &Value, path: &[&str], predicate: F) -> usize
where
    F: Fn(&Value) -> bool,
{
    lookup(value, path)
        .and_then(Value::as_array)
        .map_or(0, |items| items.iter().filter(|item| predicate(item)).count())
}
