use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::{CollidesWith, DistanceTo};

/// Geometric primitive representing a point, or equally a 2D vector.
/// `.0` is x (longitude), `.1` is y (latitude).
#[derive(Debug, Clone, PartialEq, Copy, Default, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    /// Vector pointing from `self` to `other`
    #[inline(always)]
    pub fn vector_to(&self, other: &Point) -> Point {
        *other - *self
    }

    /// z-component of the 3D cross product of `self` and `other`, treated as vectors.
    /// Positive when `other` lies counterclockwise of `self`.
    #[inline(always)]
    pub fn cross(&self, other: &Point) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    /// Exact coordinate equality, `-0.0` and `0.0` are considered equal, NaN is never equal.
    pub fn coincides_with(&self, other: &Point) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point(self.0 * rhs, self.1 * rhs)
    }
}

impl DistanceTo<Point> for Point {
    #[inline(always)]
    fn distance_to(&self, other: &Point) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    #[inline(always)]
    fn sq_distance_to(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let x = self.0.to_bits();
        let y = self.1.to_bits();
        x.hash(state);
        y.hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Point(p[0], p[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.0, p.1]
    }
}

impl<T> CollidesWith<T> for Point
where
    T: CollidesWith<Point>,
{
    fn collides_with(&self, other: &T) -> bool {
        other.collides_with(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_product_sign_follows_orientation() {
        let east = Point(1.0, 0.0);
        assert_eq!(east.cross(&Point(0.0, 1.0)), 1.0);
        assert_eq!(east.cross(&Point(0.0, -1.0)), -1.0);
        assert_eq!(east.cross(&Point(3.0, 0.0)), 0.0);
    }

    #[test]
    fn vector_and_distance() {
        let a = Point(1.0, 1.0);
        let b = Point(4.0, 5.0);
        assert_eq!(a.vector_to(&b), Point(3.0, 4.0));
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(a.sq_distance_to(&b), 25.0);
    }

    #[test]
    fn coincidence_is_exact() {
        assert!(Point(0.1, 0.2).coincides_with(&Point(0.1, 0.2)));
        assert!(!Point(0.1, 0.2).coincides_with(&Point(0.1, 0.2 + 1e-15)));
        assert!(Point(0.0, -0.0).coincides_with(&Point(-0.0, 0.0)));
    }
}
