//! Input validation and normalization primitives for the Beacon event SDK.
//!
//! Callers gate loosely-typed input through the validators, then hand
//! accepted input to the helpers for canonicalization: ordered identity
//! lists, strict booleans, stable bucket hashes, unique identifiers, and
//! versioned storage namespace keys. Transport, persistence, and the public
//! API layer live elsewhere and call into this crate with already-read or
//! about-to-be-written values.
#![deny(missing_docs)]

/// Scalar coercion and attribute sanitization helpers.
pub mod coerce;
/// Deterministic non-cryptographic hashing.
pub mod hash;
/// Identity types, requests, and wire-order filtering.
pub mod identity;
/// Integration delay queries.
pub mod integration;
/// Storage namespace key derivation.
pub mod storage;
/// Unique identifier generation over a randomness source chain.
pub mod unique_id;
/// Validation predicates for caller-supplied values.
pub mod validators;
/// Loosely-typed input value model.
pub mod value;

pub use coerce::{convert_to_boolean, parse_string_or_number, sanitize_attributes};
pub use hash::generate_hash;
pub use identity::{
    filter_user_identities, IdentityMethod, IdentityRequest, IdentityType, UserIdentities,
    UserIdentity,
};
pub use integration::{is_delayed_by_integration, IntegrationDelays};
pub use storage::{create_main_storage_name, create_product_storage_name, STORAGE_VERSION};
pub use unique_id::{
    generate_unique_id, ClockSeededSource, OsRandomSource, RandomSource, UniqueIdGenerator,
};
pub use validators::{
    is_string_or_number, is_valid_attribute_value, is_valid_key_value, validate_identities,
    ValidationError,
};
pub use value::{Scalar, Value};
