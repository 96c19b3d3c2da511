use crate::validators::is_valid_attribute_value;
use crate::value::{Scalar, Value};
use std::collections::BTreeMap;

/// Passes strings and numbers through unchanged; everything else becomes
/// "no value".
///
/// This is a filter, not a conversion: it never stringifies or numifies.
pub fn parse_string_or_number(value: &Value) -> Option<Scalar> {
    match value {
        Value::Text(s) => Some(Scalar::Text(s.clone())),
        Value::Number(n) => Some(Scalar::Number(*n)),
        _ => None,
    }
}

/// Canonicalizes a loosely-typed truthy/falsy signal into a strict boolean.
///
/// Only the exact falsy literals convert to `false`; any other input,
/// including arbitrary non-empty strings, converts to `true`. Callers rely
/// on that permissive fallback for flag-like fields of unknown provenance.
pub fn convert_to_boolean(value: &Value) -> bool {
    match value {
        Value::Text(s) if s == "false" => false,
        Value::Bool(false) => false,
        Value::Number(n) if *n == 0.0 => false,
        Value::Text(s) if s == "0" => false,
        Value::Null | Value::Undefined => false,
        Value::Text(s) if s.is_empty() => false,
        _ => true,
    }
}

/// Retains only attribute entries whose value passes
/// [`is_valid_attribute_value`]; invalid entries are dropped.
pub fn sanitize_attributes(attributes: &BTreeMap<String, Value>) -> BTreeMap<String, Value> {
    attributes
        .iter()
        .filter(|(_, value)| is_valid_attribute_value(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
