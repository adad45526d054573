use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::geometry::boundary::closest_boundary_point;
use crate::geometry::crossing::{SegmentCrossing, crossing};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Ring, RingDefect};
use crate::util::LabelConfig;

/// Which step of the placement produced a [`Label`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    /// The centroid lies inside the ring
    Centroid,
    /// The centroid lies outside and no edge crosses the probe line, the nearest boundary point is used as is
    Boundary,
    /// The nearest boundary point was pulled towards the closest crossing on the probe line
    Corrected,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub point: Point,
    pub source: LabelSource,
}

/// Finds a point inside a ring to anchor a text label.
///
/// The centroid is used whenever it lies inside the ring. Otherwise, the centroid is projected onto the
/// closest point of the boundary and the line from the centroid through that boundary point is intersected
/// with all other edges. The label is placed part of the way from the boundary point towards the nearest of
/// these crossings, which pushes it off the boundary into the shape.
///
/// This is a heuristic: for strongly concave rings the result is not guaranteed to be inside.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelPlacer {
    pub config: LabelConfig,
}

impl LabelPlacer {
    pub fn new(config: LabelConfig) -> Self {
        Self { config }
    }

    pub fn place(&self, ring: &Ring) -> Result<Label, RingDefect> {
        let centroid = ring.centroid(self.config.area_scaling)?;

        if ring.collides_with(&centroid) {
            return Ok(Label {
                point: centroid,
                source: LabelSource::Centroid,
            });
        }

        //a valid centroid implies at least 3 vertices, so there is always an edge
        let boundary =
            closest_boundary_point(ring, &centroid).ok_or(RingDefect::TooFewVertices {
                n: ring.n_vertices(),
            })?;

        let nearest_crossing = ring
            .edge_iter()
            .enumerate()
            .filter(|(i, _)| *i != boundary.edge_index)
            .filter_map(
                |(_, edge)| match crossing(centroid, boundary.point, &edge) {
                    SegmentCrossing::Passes { point, distance } => Some((point, distance)),
                    SegmentCrossing::Misses => None,
                },
            )
            //first of equally close crossings wins
            .min_by_key(|(_, distance)| OrderedFloat(*distance));

        let label = match nearest_crossing {
            None => Label {
                point: boundary.point,
                source: LabelSource::Boundary,
            },
            Some((crossing_point, _)) => {
                let pull = boundary.point.vector_to(&crossing_point) * self.config.pull_fraction;
                Label {
                    point: boundary.point + pull,
                    source: LabelSource::Corrected,
                }
            }
        };
        Ok(label)
    }
}
