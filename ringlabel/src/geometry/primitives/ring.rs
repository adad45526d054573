use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::geo_enums::{AreaScaling, GeoPosition};
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, SeparationDistance};
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use crate::util::rounding::round_to_hundredths;

/// A ring is the boundary of a simple polygon: an ordered sequence of vertices where the first vertex
/// is repeated as the last one.
///
/// Closure is not enforced on construction. Every calculation that needs a closed ring checks it
/// (with exact coordinate equality) and reports a [`RingDefect`] or a neutral value instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    vertices: Vec<Point>,
    /// Bounding box, `None` if the ring has no (finite) vertices
    bbox: Option<Rect>,
}

/// Reasons why a [`Ring`] cannot produce an area, centroid or label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingDefect {
    #[error("ring has no vertices")]
    Empty,
    #[error("ring has {n} vertices, at least 3 are required")]
    TooFewVertices { n: usize },
    #[error("ring is not closed, its first and last vertex differ")]
    NotClosed,
    #[error("ring encloses no area")]
    ZeroArea,
}

impl Ring {
    pub fn new(vertices: Vec<Point>) -> Self {
        let bbox = Rect::bounding(&vertices).ok();
        Ring { vertices, bbox }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn bbox(&self) -> Option<Rect> {
        self.bbox
    }

    /// A ring is closed if its first and last vertex are exactly equal (no tolerance).
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first.coincides_with(last),
            _ => false,
        }
    }

    /// Iterates over the edges between consecutive vertices, the i-th edge starts at vertex `i`.
    /// The last vertex does not wrap around to the first: in a closed ring they coincide.
    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices
            .iter()
            .tuple_windows()
            .map(|(s, e)| Edge::new(*s, *e))
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    /// Planar signed area, without any scaling or rounding. The last vertex wraps around to the first.
    pub fn signed_area(&self) -> f64 {
        let sigma: f64 = self
            .vertices
            .iter()
            .circular_tuple_windows()
            .map(|(p_i, p_j)| p_i.cross(p_j))
            .sum();
        0.5 * sigma
    }

    /// Absolute area of the ring, rounded to two decimals.
    ///
    /// Returns `0.0` for an empty or unclosed ring. With [`AreaScaling::Geographic`] the coordinates are
    /// scaled around the latitude of the first vertex and the result is in square meters.
    pub fn area(&self, scaling: AreaScaling) -> f64 {
        if !self.is_closed() {
            return 0.0;
        }
        let (f_x, f_y) = scaling.factors(self.vertices[0].1);

        let mut total = 0.0;
        for (p_i, p_j) in self.vertices.iter().circular_tuple_windows() {
            total += (p_i.0 * f_x) * (p_j.1 * f_y) * 0.5;
            total -= (p_j.0 * f_x) * (p_i.1 * f_y) * 0.5;
        }

        round_to_hundredths(total.abs())
    }

    /// Checks whether the ring can produce a centroid: at least 3 vertices and a non-zero area.
    pub fn validate(&self, scaling: AreaScaling) -> Result<(), RingDefect> {
        match self.n_vertices() {
            0 => Err(RingDefect::Empty),
            n if n < 3 => Err(RingDefect::TooFewVertices { n }),
            _ if self.area(scaling) != 0.0 => Ok(()),
            _ if !self.is_closed() => Err(RingDefect::NotClosed),
            _ => Err(RingDefect::ZeroArea),
        }
    }

    /// Center of mass of the enclosed area.
    /// The result is not guaranteed to lie inside the ring, see [`LabelPlacer`](crate::label::LabelPlacer) for that.
    pub fn centroid(&self, scaling: AreaScaling) -> Result<Point, RingDefect> {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon
        self.validate(scaling)?;

        let mut c_x = 0.0;
        let mut c_y = 0.0;
        let mut signed_area = 0.0;

        //the closing vertex is a duplicate of the first, no need to wrap around
        for (Point(x_i, y_i), Point(x_j, y_j)) in self.vertices.iter().tuple_windows() {
            let factor = x_i * y_j - x_j * y_i;
            signed_area += factor;
            c_x += (x_i + x_j) * factor;
            c_y += (y_i + y_j) * factor;
        }
        signed_area *= 0.5;

        //sign of the area is kept, so the winding direction cancels out
        c_x *= 1.0 / (6.0 * signed_area);
        c_y *= 1.0 / (6.0 * signed_area);

        Ok(Point(c_x, c_y))
    }
}

impl CollidesWith<Point> for Ring {
    /// Even-odd rule. Points exactly on the boundary get whatever the rule happens to yield for them.
    fn collides_with(&self, point: &Point) -> bool {
        //based on the ray casting algorithm: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        match self.bbox {
            Some(bbox) if bbox.collides_with(point) => {
                let Point(p_x, p_y) = *point;
                //horizontal ray shot to the right, toggle on every edge it crosses
                self.vertices
                    .iter()
                    .circular_tuple_windows()
                    .filter(|(Point(x_j, y_j), Point(x_i, y_i))| {
                        (*y_i > p_y) != (*y_j > p_y)
                            && p_x < (x_j - x_i) * (p_y - y_i) / (y_j - y_i) + x_i
                    })
                    .count()
                    % 2
                    == 1
            }
            _ => false,
        }
    }
}

impl DistanceTo<Point> for Ring {
    fn distance_to(&self, point: &Point) -> f64 {
        self.sq_distance_to(point).sqrt()
    }

    /// Zero for points inside the ring
    fn sq_distance_to(&self, point: &Point) -> f64 {
        match self.collides_with(point) {
            true => 0.0,
            false => self.sq_separation_distance(point).1,
        }
    }
}

impl SeparationDistance<Point> for Ring {
    fn separation_distance(&self, point: &Point) -> (GeoPosition, f64) {
        let (position, sq_distance) = self.sq_separation_distance(point);
        (position, sq_distance.sqrt())
    }

    fn sq_separation_distance(&self, point: &Point) -> (GeoPosition, f64) {
        let distance_to_closest_edge = self
            .edge_iter()
            .map(|edge| edge.sq_distance_to(point))
            .min_by_key(|sq_d| OrderedFloat(*sq_d))
            .unwrap_or(f64::INFINITY);

        match self.collides_with(point) {
            true => (GeoPosition::Interior, distance_to_closest_edge),
            false => (GeoPosition::Exterior, distance_to_closest_edge),
        }
    }
}

impl From<Vec<Point>> for Ring {
    fn from(vertices: Vec<Point>) -> Self {
        Ring::new(vertices)
    }
}

impl From<&[Point]> for Ring {
    fn from(vertices: &[Point]) -> Self {
        Ring::new(vertices.to_vec())
    }
}

impl FromIterator<Point> for Ring {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Ring::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn ring(coords: &[(f64, f64)]) -> Ring {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    fn unit_square() -> Ring {
        ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
    }

    #[test]
    fn closure_requires_exact_equality() {
        assert!(unit_square().is_closed());
        assert!(!ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1e-12)]).is_closed());
        assert!(!ring(&[]).is_closed());
        assert!(ring(&[(3.0, 3.0)]).is_closed());
    }

    #[test]
    fn signed_area_follows_winding() {
        let ccw = unit_square();
        let cw: Ring = ccw.vertices().iter().rev().copied().collect();
        assert_eq!(ccw.signed_area(), 1.0);
        assert_eq!(cw.signed_area(), -1.0);
    }

    #[test]
    fn planar_and_geographic_area() {
        let square = unit_square();
        assert_eq!(square.area(AreaScaling::Planar), 1.0);
        assert_eq!(square.area(AreaScaling::Geographic), 12_391_919_761.0);
    }

    #[test]
    fn geographic_area_shrinks_with_latitude() {
        let at_60 = ring(&[(0.0, 60.0), (1.0, 60.0), (1.0, 61.0), (0.0, 61.0), (0.0, 60.0)]);
        let expected = 111_319.0 * 111_319.0 * 60f64.to_radians().cos();
        assert!(approx_eq!(
            f64,
            at_60.area(AreaScaling::Geographic),
            expected,
            epsilon = 0.01
        ));
    }

    #[test]
    fn area_is_rounded_to_two_decimals() {
        let tri = ring(&[(0.0, 0.0), (0.123, 0.0), (0.0, 0.1), (0.0, 0.0)]);
        assert_eq!(tri.area(AreaScaling::Planar), 0.01);

        //the shoelace sum is 0.01499999.., which must not be bumped to 0.02
        let below_half = ring(&[(0.0, 0.0), (0.1, 0.0), (0.0, 0.3), (0.0, 0.0)]);
        assert_eq!(below_half.area(AreaScaling::Planar), 0.01);

        //exactly 0.125, halves round up
        let half = ring(&[(0.0, 0.0), (0.5, 0.0), (0.0, 0.5), (0.0, 0.0)]);
        assert_eq!(half.area(AreaScaling::Planar), 0.13);
    }

    #[test]
    fn unclosed_ring_has_no_area() {
        let open = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(open.area(AreaScaling::Planar), 0.0);
        assert_eq!(open.centroid(AreaScaling::Planar), Err(RingDefect::NotClosed));
    }

    #[test]
    fn centroid_defects() {
        assert_eq!(ring(&[]).centroid(AreaScaling::Planar), Err(RingDefect::Empty));
        assert_eq!(
            ring(&[(0.0, 0.0), (0.0, 0.0)]).centroid(AreaScaling::Planar),
            Err(RingDefect::TooFewVertices { n: 2 })
        );
        let collinear = ring(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 0.0)]);
        assert_eq!(
            collinear.centroid(AreaScaling::Planar),
            Err(RingDefect::ZeroArea)
        );
    }

    #[test]
    fn centroid_is_independent_of_winding() {
        let ccw = ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0), (0.0, 0.0)]);
        let cw: Ring = ccw.vertices().iter().rev().copied().collect();
        assert_eq!(ccw.centroid(AreaScaling::Planar), Ok(Point(2.0, 1.0)));
        assert_eq!(cw.centroid(AreaScaling::Planar), Ok(Point(2.0, 1.0)));
    }

    #[test]
    fn even_odd_membership() {
        let square = unit_square();
        assert!(square.collides_with(&Point(0.5, 0.5)));
        assert!(!square.collides_with(&Point(1.5, 0.5)));
        assert!(!square.collides_with(&Point(-0.5, 0.5)));
        assert!(!square.collides_with(&Point(0.5, 2.0)));
        assert!(!ring(&[]).collides_with(&Point(0.0, 0.0)));
    }

    #[test]
    fn separation_distance_reports_side() {
        let square = unit_square();
        assert_eq!(
            square.separation_distance(&Point(0.25, 0.5)),
            (GeoPosition::Interior, 0.25)
        );
        assert_eq!(
            square.separation_distance(&Point(3.0, 0.5)),
            (GeoPosition::Exterior, 2.0)
        );
        assert_eq!(square.distance_to(&Point(0.25, 0.5)), 0.0);
    }
}
