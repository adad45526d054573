use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::Point;

/// Line segment between two consecutive vertices of a [`Ring`](crate::geometry::primitives::Ring).
/// Zero-length edges are allowed, a closed ring always ends with one.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Edge { start, end }
    }

    /// Returns the closest point which lies on the edge to the given point
    /// A zero-length edge projects every point onto its start.
    pub fn closest_point_on_edge(&self, point: &Point) -> Point {
        //from https://stackoverflow.com/a/6853926
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x, y) = point;

        let a = x - x1;
        let b = y - y1;
        let c = x2 - x1;
        let d = y2 - y1;

        let dot = a * c + b * d;
        let len_sq = c * c + d * d;
        let mut param = -1.0;
        if len_sq != 0.0 {
            param = dot / len_sq;
        }
        let (xx, yy) = match param {
            p if p < 0.0 => (x1, y1),              //start is the closest point
            p if p > 1.0 => (x2, y2),              //end is the closest point
            _ => (x1 + param * c, y1 + param * d), //closest point is on the edge
        };

        Point(xx, yy)
    }

}

impl DistanceTo<Point> for Edge {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f64 {
        f64::sqrt(self.sq_distance_to(point))
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f64 {
        point.sq_distance_to(&self.closest_point_on_edge(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_clamped_to_the_segment() {
        let edge = Edge::new(Point(0.0, 0.0), Point(10.0, 0.0));
        assert_eq!(edge.closest_point_on_edge(&Point(4.0, 3.0)), Point(4.0, 0.0));
        assert_eq!(edge.closest_point_on_edge(&Point(-2.0, 1.0)), Point(0.0, 0.0));
        assert_eq!(edge.closest_point_on_edge(&Point(12.0, -1.0)), Point(10.0, 0.0));
        assert_eq!(edge.distance_to(&Point(4.0, 3.0)), 3.0);
    }

    #[test]
    fn zero_length_edge_projects_onto_its_start() {
        let edge = Edge::new(Point(2.0, 2.0), Point(2.0, 2.0));
        assert_eq!(edge.closest_point_on_edge(&Point(5.0, 6.0)), Point(2.0, 2.0));
        assert_eq!(edge.distance_to(&Point(5.0, 6.0)), 5.0);
    }
}
