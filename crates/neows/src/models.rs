//! Wire-level response shapes for the NeoWs feed endpoint.
//!
//! The detail endpoint deserializes straight into
//! [`neoscope_core::asteroid::AsteroidDetail`]; only the feed has an
//! envelope of its own (a mapping from calendar date to a list of raw
//! asteroid objects) that needs flattening.

use std::collections::BTreeMap;

use serde::Deserialize;

use neoscope_core::asteroid::AsteroidSummary;

/// Response from `GET /feed`.
///
/// `near_earth_objects` maps `YYYY-MM-DD` date strings (within the
/// requested range) to that date's asteroids. Each entry
/// deserializes down to `{id, name}`; every other upstream field is
/// dropped at this boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    /// Total object count as reported by upstream.
    pub element_count: Option<u64>,
    pub near_earth_objects: BTreeMap<String, Vec<AsteroidSummary>>,
}

impl FeedResponse {
    /// Flatten the per-date buckets into one list.
    ///
    /// Dates are visited in the mapping's natural iteration order
    /// (lexicographic, which is chronological for `YYYY-MM-DD` keys)
    /// and each bucket's internal order is preserved. Callers must
    /// not rely on a specific cross-date ordering.
    pub fn flatten(self) -> Vec<AsteroidSummary> {
        self.near_earth_objects.into_values().flatten().collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
