use serde::{Deserialize, Serialize};

use crate::geometry::geo_enums::AreaScaling;

///Configuration of the [`LabelPlacer`](crate::label::LabelPlacer)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LabelConfig {
    ///Unit conversion used for the area check that precedes the centroid computation
    #[serde(default)]
    pub area_scaling: AreaScaling,
    ///Fraction of the way from the boundary point towards the nearest crossing at which a corrected label is placed
    #[serde(default = "LabelConfig::default_pull_fraction")]
    pub pull_fraction: f64,
}

impl LabelConfig {
    pub const DEFAULT_PULL_FRACTION: f64 = 0.3;

    fn default_pull_fraction() -> f64 {
        Self::DEFAULT_PULL_FRACTION
    }

    pub fn planar() -> Self {
        Self {
            area_scaling: AreaScaling::Planar,
            ..Self::default()
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            area_scaling: AreaScaling::Geographic,
            pull_fraction: Self::DEFAULT_PULL_FRACTION,
        }
    }
}
