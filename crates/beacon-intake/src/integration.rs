use std::collections::BTreeMap;

/// Integration identifier to "still loading" flag.
///
/// Populated incrementally by the caller as integrations report readiness
/// and queried repeatedly until all entries clear.
pub type IntegrationDelays = BTreeMap<i64, bool>;

/// True iff at least one registered integration is still loading.
///
/// An empty map means no integrations have registered, so nothing blocks.
pub fn is_delayed_by_integration(delays: &IntegrationDelays) -> bool {
    delays.values().any(|delayed| *delayed)
}
