use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Rectangles of zero width or height are allowed: the bounding box of a degenerate ring is one.
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Smallest rectangle containing all `points`, fails for an empty slice or non-finite coordinates.
    pub fn bounding(points: &[Point]) -> Result<Self> {
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect::try_new(x_min, y_min, x_max, y_max)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        let dx = (self.width() * factor - self.width()) / 2.0;
        let dy = (self.height() * factor - self.height()) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }
}

impl CollidesWith<Point> for Rect {
    /// Boundary inclusive
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_of_points() {
        let points = [Point(1.0, -2.0), Point(3.0, 4.0), Point(-1.0, 0.0)];
        let bbox = Rect::bounding(&points).unwrap();
        assert_eq!(bbox, Rect::try_new(-1.0, -2.0, 3.0, 4.0).unwrap());
        assert!(bbox.collides_with(&Point(3.0, 4.0)));
        assert!(!bbox.collides_with(&Point(3.0, 4.5)));
    }

    #[test]
    fn empty_input_has_no_bounding_box() {
        assert!(Rect::bounding(&[]).is_err());
        assert!(Rect::bounding(&[Point(f64::NAN, 0.0)]).is_err());
    }
}
