use ordered_float::OrderedFloat;

use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Point, Ring};

/// Point on the boundary of a [`Ring`] closest to some query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryPoint {
    pub point: Point,
    /// Index of the edge (= index of its start vertex) the point lies on
    pub edge_index: usize,
    /// Distance between the query point and `point`
    pub distance: f64,
}

/// Projects `point` onto every edge of the ring and returns the closest projection.
///
/// On equal distances the edge with the lowest index wins.
/// Returns `None` if the ring has fewer than two vertices (and therefore no edges).
pub fn closest_boundary_point(ring: &Ring, point: &Point) -> Option<BoundaryPoint> {
    ring.edge_iter()
        .enumerate()
        .map(|(edge_index, edge)| {
            let projected = edge.closest_point_on_edge(point);
            BoundaryPoint {
                point: projected,
                edge_index,
                distance: point.distance_to(&projected),
            }
        })
        //min_by_key returns the first of several equal minima
        .min_by_key(|bp| OrderedFloat(bp.distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Ring {
        [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn projects_onto_nearest_edge() {
        let bp = closest_boundary_point(&square(), &Point(1.75, 0.5)).unwrap();
        assert_eq!(bp.point, Point(2.0, 0.5));
        assert_eq!(bp.edge_index, 1);
        assert_eq!(bp.distance, 0.25);
    }

    #[test]
    fn outside_point_projects_onto_corner() {
        let bp = closest_boundary_point(&square(), &Point(3.0, 3.0)).unwrap();
        assert_eq!(bp.point, Point(2.0, 2.0));
        assert_eq!(bp.edge_index, 1);
    }

    #[test]
    fn ties_go_to_the_first_edge() {
        let bp = closest_boundary_point(&square(), &Point(1.5, 0.5 + 1e-9)).unwrap();
        assert_eq!(bp.edge_index, 1);
        //equidistant from the bottom (0) and right (1) edge
        let bp = closest_boundary_point(&square(), &Point(1.5, 0.5)).unwrap();
        assert_eq!(bp.edge_index, 0);
        assert_eq!(bp.point, Point(1.5, 0.0));
        let bp = closest_boundary_point(&square(), &Point(1.0, 1.0)).unwrap();
        assert_eq!(bp.edge_index, 0);
        assert_eq!(bp.point, Point(1.0, 0.0));
    }

    #[test]
    fn no_edges_no_boundary() {
        let single: Ring = vec![Point(1.0, 1.0)].into();
        assert_eq!(closest_boundary_point(&single, &Point(0.0, 0.0)), None);
    }
}
