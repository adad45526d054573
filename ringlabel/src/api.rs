use log::debug;

use crate::geometry::geo_enums::AreaScaling;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Ring};
use crate::label::LabelPlacer;
use crate::util::LabelConfig;

/// Area of a closed ring of (longitude, latitude) coordinates in square meters, rounded to two decimals.
///
/// Returns `0.0` if the ring is empty or not closed (first and last coordinate differ).
pub fn polygon_area(coordinates: &[Point]) -> f64 {
    let ring = Ring::from(coordinates);
    if !ring.is_closed() {
        debug!("[AREA] ring of {} vertices is not closed", ring.n_vertices());
    }
    ring.area(AreaScaling::Geographic)
}

/// Centroid of a closed ring.
///
/// Returns `None` if the ring has fewer than 3 vertices, is not closed or encloses no area.
/// The centroid of a concave ring may lie outside of it, see [`polygon_internal_label`].
pub fn polygon_centroid(coordinates: &[Point]) -> Option<Point> {
    Ring::from(coordinates)
        .centroid(AreaScaling::Geographic)
        .inspect_err(|defect| debug!("[CENTROID] no centroid: {defect}"))
        .ok()
}

/// Even-odd point-in-polygon test. Points exactly on the boundary may be reported either way.
pub fn is_point_in_polygon(point: Point, coordinates: &[Point]) -> bool {
    Ring::from(coordinates).collides_with(&point)
}

/// A point inside the ring suited to anchor a text label, see [`LabelPlacer`].
///
/// Returns `None` under the same conditions as [`polygon_centroid`].
pub fn polygon_internal_label(coordinates: &[Point]) -> Option<Point> {
    LabelPlacer::new(LabelConfig::default())
        .place(&Ring::from(coordinates))
        .inspect_err(|defect| debug!("[LABEL] no label: {defect}"))
        .ok()
        .map(|label| label.point)
}
