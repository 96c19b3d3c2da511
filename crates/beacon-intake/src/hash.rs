use crate::value::Value;

/// Hashes a value into a stable 32-bit bucket key.
///
/// Absent and null values hash to 0. Everything else hashes the lowercased
/// string form of the value with a 31-multiplier shift hash over UTF-16 code
/// units (`h = (h << 5) - h + unit`, wrapping), so repeated calls with the
/// same logical input always agree.
pub fn generate_hash(value: &Value) -> i32 {
    let text = match stable_string(value) {
        Some(text) => text.to_lowercase(),
        None => return 0,
    };
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash
}

/// String form fed to the hash; `None` for values that hash to 0.
///
/// Scalars use their shortest decimal/literal form; arrays and objects use
/// their JSON serialization, which is already key-ordered.
fn stable_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Undefined => None,
        Value::Text(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(&value.to_json()).ok(),
    }
}
