#![doc = document_features::document_features!()]
//! Area, centroid, point-in-polygon membership and interior label placement for simple 2D polygon rings.
//!
//! The free functions at the root of this crate are the entry points most callers need.
//! [`LabelPlacer`](label::LabelPlacer) and [`Ring`](geometry::primitives::Ring) expose the
//! configurable forms and report *why* a ring was rejected.

/// Geometric primitives and base algorithms
pub mod geometry;

/// Interior label placement
pub mod label;

/// Importing ring fixtures into and exporting reports out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod api;

#[doc(inline)]
pub use api::{is_point_in_polygon, polygon_area, polygon_centroid, polygon_internal_label};
