/// Persisted-state schema version token shared by every storage name.
pub const STORAGE_VERSION: &str = "v4";

const MAIN_STORAGE_PREFIX: &str = "mprtcl-";
const PRODUCT_STORAGE_PREFIX: &str = "mprtcl-prod";

/// Derives the main storage namespace key: `mprtcl-<version>[_<apiKey>]`.
///
/// Any consumer reading persisted state must reconstruct the exact same
/// name from the same api key and version constant, or the state will not
/// be found.
pub fn create_main_storage_name(api_key: Option<&str>) -> String {
    storage_name(MAIN_STORAGE_PREFIX, api_key)
}

/// Derives the product storage namespace key:
/// `mprtcl-prod<version>[_<apiKey>]`.
pub fn create_product_storage_name(api_key: Option<&str>) -> String {
    storage_name(PRODUCT_STORAGE_PREFIX, api_key)
}

fn storage_name(prefix: &str, api_key: Option<&str>) -> String {
    match api_key {
        Some(key) if !key.is_empty() => format!("{}{}_{}", prefix, STORAGE_VERSION, key),
        _ => format!("{}{}", prefix, STORAGE_VERSION),
    }
}
