use log::{debug, warn};

use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::SeparationDistance;
use crate::io::ext_repr::{ExtFixture, ExtRingReport};
use crate::io::import::import_fixture;
use crate::label::LabelPlacer;
use crate::util::LabelConfig;
use crate::util::assertions;

/// Computes area, centroid and label of a fixture and bundles them in an external representation.
pub fn export_report(ext_fixture: &ExtFixture, config: &LabelConfig) -> ExtRingReport {
    let ring = import_fixture(ext_fixture);
    let area = ring.area(config.area_scaling);

    let (centroid, label, defect) = match ring.centroid(config.area_scaling) {
        Err(defect) => {
            debug!("[EXPORT] fixture {} rejected: {defect}", ext_fixture.id);
            (None, None, Some(defect))
        }
        Ok(centroid) => {
            let label = LabelPlacer::new(*config).place(&ring).ok();
            (Some(centroid), label, None)
        }
    };

    let label_clearance = label.map(|l| match ring.separation_distance(&l.point) {
        (GeoPosition::Interior, d) => d,
        (GeoPosition::Exterior, d) => -d,
    });

    if let Some(l) = &label {
        if !assertions::label_within_ring(&ring, &l.point) {
            warn!(
                "[EXPORT] label of fixture {} lies outside its ring ({:?}, source: {:?})",
                ext_fixture.id, l.point, l.source
            );
            debug_assert!(
                !assertions::ring_is_convex(&ring),
                "label outside convex ring: {ring:?}"
            );
        }
    }

    ExtRingReport {
        id: ext_fixture.id,
        name: ext_fixture.name.clone(),
        area,
        centroid: centroid.map(|c| c.into()),
        label: label.map(|l| l.point.into()),
        label_source: label.map(|l| l.source),
        label_clearance,
        defect,
    }
}
