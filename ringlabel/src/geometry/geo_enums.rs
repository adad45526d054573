use serde::{Deserialize, Serialize};

/// Position of a point relative to a closed shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoPosition {
    Exterior,
    Interior,
}

/// How ring coordinates are converted to area units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaScaling {
    /// Coordinates are (longitude, latitude) in degrees and the area is returned in square meters.
    /// Uses an equirectangular approximation around the latitude of the first vertex.
    #[default]
    Geographic,
    /// Coordinates are planar, the area is returned in squared coordinate units.
    Planar,
}

impl AreaScaling {
    /// Meters per degree of latitude (and of longitude at the equator)
    pub const METERS_PER_DEGREE: f64 = 111_319.0;

    /// Returns the `(x, y)` multipliers applied to coordinates of a ring whose first vertex lies at `latitude`.
    pub fn factors(&self, latitude: f64) -> (f64, f64) {
        match self {
            AreaScaling::Geographic => (
                Self::METERS_PER_DEGREE * latitude.to_radians().cos(),
                Self::METERS_PER_DEGREE,
            ),
            AreaScaling::Planar => (1.0, 1.0),
        }
    }
}
