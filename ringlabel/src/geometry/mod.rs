/// Set of enums representing various geometric properties
pub mod geo_enums;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

/// Nearest point on the boundary of a ring
pub mod boundary;

/// Probe-line crossings with ring edges
pub mod crossing;
