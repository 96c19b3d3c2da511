//! Unique identifier generation.
//!
//! Randomness is an ordered chain of swappable sources. Sources may refuse
//! to produce bytes; generation itself never fails because a clock-seeded
//! stream is always the last resort.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of random bytes that may be unavailable.
pub trait RandomSource {
    /// Fills `buf` with random bytes; returns false when the source cannot.
    fn try_fill(&mut self, buf: &mut [u8]) -> bool;
}

/// Operating-system randomness. Reports failure instead of panicking so the
/// chain can degrade.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn try_fill(&mut self, buf: &mut [u8]) -> bool {
        getrandom::getrandom(buf).is_ok()
    }
}

/// Clock-seeded splitmix64 stream; the last-resort source that cannot fail.
#[derive(Debug, Clone)]
pub struct ClockSeededSource {
    state: u64,
}

impl ClockSeededSource {
    /// Seeds the stream from the system clock.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0x9e37_79b9_7f4a_7c15);
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Default for ClockSeededSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ClockSeededSource {
    fn try_fill(&mut self, buf: &mut [u8]) -> bool {
        for chunk in buf.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        true
    }
}

/// Generates unique identifiers through an ordered source chain.
///
/// Sources are tried in order; when none produces bytes the generator
/// degrades to its clock-seeded stream, so generation always succeeds and
/// the result is never empty.
pub struct UniqueIdGenerator {
    sources: Vec<Box<dyn RandomSource>>,
    fallback: ClockSeededSource,
}

impl UniqueIdGenerator {
    /// Generator over the default chain: OS randomness, then the
    /// clock-seeded fallback.
    pub fn new() -> Self {
        Self::with_sources(vec![Box::new(OsRandomSource)])
    }

    /// Generator over caller-supplied sources. The clock-seeded fallback is
    /// always appended.
    pub fn with_sources(sources: Vec<Box<dyn RandomSource>>) -> Self {
        Self {
            sources,
            fallback: ClockSeededSource::new(),
        }
    }

    /// Produces a non-empty unique identifier in hyphenated UUIDv4 form.
    pub fn generate(&mut self) -> String {
        let mut bytes = [0u8; 16];
        let filled = self
            .sources
            .iter_mut()
            .any(|source| source.try_fill(&mut bytes));
        if !filled {
            self.fallback.try_fill(&mut bytes);
        }
        uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}

impl Default for UniqueIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces a unique identifier with the default source chain.
pub fn generate_unique_id() -> String {
    UniqueIdGenerator::new().generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnavailableSource;

    impl RandomSource for UnavailableSource {
        fn try_fill(&mut self, _buf: &mut [u8]) -> bool {
            false
        }
    }

    #[test]
    fn default_chain_produces_an_id() {
        assert!(!generate_unique_id().is_empty());
    }

    #[test]
    fn generation_survives_an_empty_source_chain() {
        let mut generator = UniqueIdGenerator::with_sources(Vec::new());
        assert!(!generator.generate().is_empty());
    }

    #[test]
    fn generation_survives_sources_that_yield_nothing() {
        let mut generator = UniqueIdGenerator::with_sources(vec![Box::new(UnavailableSource)]);
        assert!(!generator.generate().is_empty());
    }

    #[test]
    fn ids_differ_across_calls() {
        let mut generator = UniqueIdGenerator::new();
        assert_ne!(generator.generate(), generator.generate());
    }

    #[test]
    fn fallback_ids_differ_across_calls() {
        let mut generator = UniqueIdGenerator::with_sources(vec![Box::new(UnavailableSource)]);
        assert_ne!(generator.generate(), generator.generate());
    }
}
