//! Content-keyed memoization of ramp builds.
//!
//! A ramp is a pure function of its clamped, sorted stop list, so rebuilds
//! with identical content can be served from a cache. The key is derived
//! from the stop *content* (position and channel bits after clamping and
//! sorting), never from collection identity, so callers that mutate a stop
//! list in place always get a correct result.
//!
//! Callers that re-render every frame call [`RampCache::maintain`] once per
//! frame; ramps untouched for two maintenance cycles become eligible for
//! eviction once the cache grows past its retained size.

use std::collections::HashMap;
use std::sync::Arc;

use crate::color_stop::ColorStop;
use crate::ramp::{canonical_stops, GradientError, Ramp};

/// Number of ramps kept without regard to age.
const RETAINED_RAMPS: usize = 64;

#[derive(Debug)]
struct Entry {
    ramp: Arc<Ramp>,
    last_used: u64,
}

/// Memoizing wrapper around [`Ramp::build`].
#[derive(Debug, Default)]
pub struct RampCache {
    epoch: u64,
    map: HashMap<Vec<u64>, Entry>,
}

impl RampCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the ramp for `stops`, building it only on a cache miss.
    ///
    /// Errors surface exactly as from [`Ramp::build`]; failed builds are
    /// not cached.
    pub fn get_or_build(&mut self, stops: &[ColorStop]) -> Result<Arc<Ramp>, GradientError> {
        let key = stop_key(stops);
        if let Some(entry) = self.map.get_mut(&key) {
            entry.last_used = self.epoch;
            return Ok(entry.ramp.clone());
        }
        let ramp = Arc::new(Ramp::build(stops)?);
        self.map.insert(
            key,
            Entry {
                ramp: ramp.clone(),
                last_used: self.epoch,
            },
        );
        Ok(ramp)
    }

    /// Advance the eviction clock and drop stale ramps.
    ///
    /// Entries used in the current or previous epoch are always kept; older
    /// ones are dropped once the cache exceeds [`RETAINED_RAMPS`] entries.
    pub fn maintain(&mut self) {
        self.epoch += 1;
        if self.map.len() > RETAINED_RAMPS {
            let epoch = self.epoch;
            self.map.retain(|_, entry| entry.last_used + 1 >= epoch);
        }
    }

    /// Number of cached ramps.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Canonical content key: position and channel bit patterns of the clamped,
/// stable-sorted stop list.
fn stop_key(stops: &[ColorStop]) -> Vec<u64> {
    let canonical = canonical_stops(stops);
    let mut key = Vec::with_capacity(canonical.len() * 5);
    for stop in &canonical {
        key.push(stop.position.to_bits());
        key.push(stop.color.r.to_bits());
        key.push(stop.color.g.to_bits());
        key.push(stop.color.b.to_bits());
        key.push(stop.color.a.to_bits());
    }
    key
}

// ============================================================================
// Tests
// ============================================================================
