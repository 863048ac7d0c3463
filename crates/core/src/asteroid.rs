//! Asteroid data model.
//!
//! Field names mirror the upstream NeoWs JSON so records round-trip
//! through the API surface unchanged. Only `id` and `name` are
//! guaranteed by upstream; everything else is optional.

use serde::{Deserialize, Serialize};

/// Listing-level projection of an asteroid: just `{id, name}`.
///
/// Produced at the feed boundary (all other upstream fields are
/// dropped there) and by the favourites enrichment fan-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidSummary {
    pub id: String,
    pub name: String,
}

/// Min/max bounds of an estimated diameter, in one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub estimated_diameter_min: Option<f64>,
    pub estimated_diameter_max: Option<f64>,
}

/// Estimated diameter of an asteroid, per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: Option<SizeRange>,
    pub meters: Option<SizeRange>,
    pub miles: Option<SizeRange>,
    pub feet: Option<SizeRange>,
}

/// Relative velocity at close approach, per unit. Upstream delivers
/// these as decimal strings and they are passed through as such.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: Option<String>,
    pub kilometers_per_hour: Option<String>,
    pub miles_per_hour: Option<String>,
}

/// Miss distance at close approach, per unit (decimal strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissDistance {
    pub astronomical: Option<String>,
    pub lunar: Option<String>,
    pub kilometers: Option<String>,
    pub miles: Option<String>,
}

/// One close-approach record for an asteroid.
///
/// `close_approach_date_full` carries the "%b %d, %Y %H:%M" textual
/// form (e.g. "Sep 08, 2024 20:28") that the approach-window filter
/// parses. Record order is as delivered by upstream and is not
/// guaranteed chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachEvent {
    pub close_approach_date: Option<String>,
    pub close_approach_date_full: Option<String>,
    pub epoch_date_close_approach: Option<f64>,
    pub relative_velocity: Option<RelativeVelocity>,
    pub miss_distance: Option<MissDistance>,
    pub orbiting_body: Option<String>,
}

/// Full detail record for a single asteroid, 1:1 with one upstream id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidDetail {
    pub id: String,
    pub name: String,
    pub nasa_jpl_url: Option<String>,
    pub absolute_magnitude_h: Option<f64>,
    pub estimated_diameter: Option<EstimatedDiameter>,
    pub is_potentially_hazardous_asteroid: Option<bool>,
    #[serde(default)]
    pub close_approach_data: Vec<ApproachEvent>,
}

impl From<AsteroidDetail> for AsteroidSummary {
    fn from(detail: AsteroidDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
        }
    }
}
