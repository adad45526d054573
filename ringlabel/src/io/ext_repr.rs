use serde::{Deserialize, Serialize};

use crate::geometry::primitives::RingDefect;
use crate::label::LabelSource;

/// External representation of a [`Ring`](crate::geometry::primitives::Ring).
/// A list of `[x, y]` (or `[longitude, latitude]`) pairs, the first pair repeated as the last one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRing(pub Vec<(f64, f64)>);

/// A single ring to be processed, as found in a fixture file.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFixture {
    /// Unique identifier of the fixture
    pub id: u64,
    /// Optional human-readable name, used in titles of the SVG output
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub ring: ExtRing,
}

/// A collection of [`ExtFixture`]s.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFixtureSet {
    pub name: String,
    pub fixtures: Vec<ExtFixture>,
}

/// Everything computed for a single [`ExtFixture`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRingReport {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Area as returned by [`Ring::area`](crate::geometry::primitives::Ring::area), 0 for unclosed rings
    pub area: f64,
    pub centroid: Option<(f64, f64)>,
    pub label: Option<(f64, f64)>,
    pub label_source: Option<LabelSource>,
    /// Distance from the label to the closest edge of the ring, negative if the label lies outside
    pub label_clearance: Option<f64>,
    /// Why no centroid or label could be computed
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub defect: Option<RingDefect>,
}
