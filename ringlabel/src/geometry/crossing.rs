use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Edge, Point};

/// Outcome of probing an [`Edge`] with the line from a center point through a target point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentCrossing {
    /// The edge's endpoints lie strictly on opposite sides of the probe line.
    Passes {
        /// Where the probe line meets the (infinite) line through the edge
        point: Point,
        /// Distance from the probe's target to `point`
        distance: f64,
    },
    Misses,
}

/// Tests whether the line from `center` through `through` passes between the endpoints of `edge`.
///
/// An endpoint lying exactly on the probe line does not count as being on either side,
/// so a probe through a vertex is reported as [`SegmentCrossing::Misses`].
pub fn crossing(center: Point, through: Point, edge: &Edge) -> SegmentCrossing {
    let direction = center.vector_to(&through);
    let cross_start = direction.cross(&center.vector_to(&edge.start));
    let cross_end = direction.cross(&center.vector_to(&edge.end));

    if cross_start * cross_end < 0.0 {
        if let Some(point) = line_intersection(center, direction, edge) {
            return SegmentCrossing::Passes {
                point,
                distance: through.distance_to(&point),
            };
        }
    }
    SegmentCrossing::Misses
}

/// Intersection of the line through `origin` along `direction` with the line through `edge`.
/// `None` if both lines are parallel or coincident.
fn line_intersection(origin: Point, direction: Point, edge: &Edge) -> Option<Point> {
    //based on: https://stackoverflow.com/a/565282
    let s = edge.start.vector_to(&edge.end);
    let denominator = direction.cross(&s);

    if denominator == 0.0 {
        return None;
    }

    let t = origin.vector_to(&edge.start).cross(&s) / denominator;

    Some(Point(origin.0 + direction.0 * t, origin.1 + direction.1 * t))
}
