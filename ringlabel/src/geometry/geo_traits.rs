use crate::geometry::geo_enums::GeoPosition;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between two primitives.
    fn distance_to(&self, other: &T) -> f64;

    /// Squared version of [DistanceTo::distance_to]
    fn sq_distance_to(&self, other: &T) -> f64;
}

/// Trait for types that can compute how far `T` lies from their boundary, and on which side.
pub trait SeparationDistance<T>: DistanceTo<T> {
    /// Returns [GeoPosition::Interior] or [GeoPosition::Exterior] together with the
    /// distance from `other` to the boundary of `self`.
    fn separation_distance(&self, other: &T) -> (GeoPosition, f64);

    /// Squared version of [SeparationDistance::separation_distance]
    fn sq_separation_distance(&self, other: &T) -> (GeoPosition, f64);
}
