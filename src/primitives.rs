//! Value-level helpers shared by the comparator and the document entry point.

use crate::error::CompareError;
use crate::types::LIST_PREVIEW_LEN;
use serde_json::{Map, Number, Value};

// ─── Equality ───────────────────────────────────────────────────────────────

/// Deep JSON equality.
///
/// Integer 42 equals float 42.0; object key order is irrelevant;
/// arrays compare element-wise by position and length. Booleans never equal
/// numbers.
pub fn values_deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => arrays_deep_equal(a, b),
        (Value::Object(a), Value::Object(b)) => objects_deep_equal(a, b),
        _ => false,
    }
}

/// Numeric equality.
///
/// Two integers compare exactly, so ids above 2^53 stay distinct. `f64` is
/// only used when at least one side is a float.
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    let is_integer = |n: &Number| n.is_i64() || n.is_u64();
    if is_integer(a) && is_integer(b) {
        // a negative i64 against a u64 above i64::MAX
        return false;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(fa), Some(fb)) => fa == fb,
        _ => a == b,
    }
}

/// Element-wise deep equality of two lists; order and length matter.
pub fn arrays_deep_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| values_deep_equal(a, b))
}

/// Deep equality of two mappings regardless of key order.
pub fn objects_deep_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .all(|(k, v)| b.get(k).is_some_and(|bv| values_deep_equal(v, bv)))
}

/// Whether `value` deep-equals any element of `list`, ignoring position.
pub fn list_contains(list: &[Value], value: &Value) -> bool {
    list.iter().any(|item| values_deep_equal(item, value))
}

/// The first [`LIST_PREVIEW_LEN`] elements of `list`, as an array value.
pub fn list_preview(list: &[Value]) -> Value {
    Value::Array(list.iter().take(LIST_PREVIEW_LEN).cloned().collect())
}

// ─── Element matching ───────────────────────────────────────────────────────

/// Number of keys of `candidate` whose value deep-equals the value stored
/// under the same key in `element`. Keys missing from `element` score nothing.
pub fn match_score(candidate: &Map<String, Value>, element: &Map<String, Value>) -> usize {
    candidate
        .iter()
        .filter(|(key, value)| element.get(*key).is_some_and(|v| values_deep_equal(value, v)))
        .count()
}

/// Picks the object in `pool` that shares the most key/value pairs with
/// `candidate`, together with its score.
///
/// Non-object elements of `pool` are never chosen. Ties go to the first
/// occurrence. This is a greedy per-element heuristic: two candidates may
/// both pick the same pool element, and the pairing is not globally optimal.
pub fn find_best_match<'a>(
    candidate: &Map<String, Value>,
    pool: &'a [Value],
) -> Option<(&'a Map<String, Value>, usize)> {
    let mut best: Option<(&Map<String, Value>, usize)> = None;
    for element in pool.iter().filter_map(Value::as_object) {
        let score = match_score(candidate, element);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((element, score)),
        }
    }
    best
}

// ─── Paths ──────────────────────────────────────────────────────────────────

/// Appends a mapping key to a location path.
///
/// Plain identifiers use dot notation (`$.name`); anything else is quoted
/// (`$["first name"]`).
pub fn key_path(parent: &str, key: &str) -> String {
    let plain = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if plain {
        format!("{}.{}", parent, key)
    } else {
        let quoted = serde_json::to_string(key).unwrap_or_else(|_| format!("\"{}\"", key));
        format!("{}[{}]", parent, quoted)
    }
}

/// Appends a list position to a location path.
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

// ─── Scoping ────────────────────────────────────────────────────────────────

/// Resolves a JSONPath selector against `value` and returns the first node.
///
/// Used to validate an expected document against a subtree of a larger
/// actual document.
pub fn select_root<'a>(selector: &str, value: &'a Value) -> Result<&'a Value, CompareError> {
    let path = serde_json_path::JsonPath::parse(selector).map_err(|e| CompareError::Scope {
        path: selector.to_string(),
        message: format!("invalid JSONPath: {}", e),
    })?;
    path.query(value)
        .first()
        .ok_or_else(|| CompareError::Scope {
            path: selector.to_string(),
            message: "selector matched no value".to_string(),
        })
}
