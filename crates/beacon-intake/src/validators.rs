use crate::identity::{IdentityMethod, IdentityRequest};
use crate::value::Value;
use regex::Regex;
use thiserror::Error;

/// Pattern a well-formed identity-type name must match.
const IDENTITY_NAME_PATTERN: &str = r"^[a-z][a-z0-9_]*$";

/// Validation errors for identity requests.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When an identity map key is not a well-formed identity-type name.
    #[error("identity name ('{value}') is not allowed")]
    MalformedIdentityName {
        /// Offending name.
        value: String,
    },
    /// When an identity map value is not a string or number.
    #[error("identity value for '{name}' must be a string or number")]
    InvalidIdentityValue {
        /// Name of the identity whose value failed.
        name: String,
    },
    /// When the copy-attributes flag is not a boolean-like scalar.
    #[error("copyUserAttributes must be a boolean, string, or number")]
    InvalidCopyFlag,
}

/// True iff `value` may be stored as a user attribute.
///
/// Strings, any number (zero and negatives included), booleans, and explicit
/// null are allowed; objects, arrays, and absent values are not.
pub fn is_valid_attribute_value(value: &Value) -> bool {
    matches!(
        value,
        Value::Text(_) | Value::Number(_) | Value::Bool(_) | Value::Null
    )
}

/// True iff `value` may be used as a mapping-key payload: strings and
/// numbers only. Stricter than attribute validity; null is rejected.
pub fn is_valid_key_value(value: &Value) -> bool {
    matches!(value, Value::Text(_) | Value::Number(_))
}

/// True iff `value` is a string or number.
///
/// Same contract as [`is_valid_key_value`]; used for generic payload fields.
pub fn is_string_or_number(value: &Value) -> bool {
    is_valid_key_value(value)
}

/// Validates an identity request.
///
/// Every request method shares the same acceptance criteria: identity names
/// must be well-formed (unknown names are allowed and map to the `Other`
/// type downstream), identity values must be strings or numbers, and the
/// copy-attributes flag, when present, must be a boolean-like scalar.
pub fn validate_identities(
    request: &IdentityRequest,
    _method: IdentityMethod,
) -> Result<(), ValidationError> {
    let name_pattern = Regex::new(IDENTITY_NAME_PATTERN).expect("invalid regex");
    for (name, value) in request.user_identities.iter() {
        if !name_pattern.is_match(name) {
            return Err(ValidationError::MalformedIdentityName {
                value: name.to_string(),
            });
        }
        if !is_valid_key_value(value) {
            return Err(ValidationError::InvalidIdentityValue {
                name: name.to_string(),
            });
        }
    }
    if let Some(flag) = &request.copy_user_attributes {
        if !matches!(flag, Value::Bool(_) | Value::Text(_) | Value::Number(_)) {
            return Err(ValidationError::InvalidCopyFlag);
        }
    }
    Ok(())
}
