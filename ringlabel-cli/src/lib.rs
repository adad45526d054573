use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use itertools::Itertools;
use log::info;
use ringlabel::io::export::export_report;
use ringlabel::io::ext_repr::ExtFixtureSet;
use ringlabel::io::import::import_fixture;
use ringlabel::io::svg::{SvgDrawOptions, ring_to_svg};
use ringlabel::label::{Label, LabelSource};
use ringlabel::util::LabelConfig;

use crate::io::output::ReportOutput;

pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Computes a report for every fixture of the set and writes it to `output_folder` as `report_<stem>.json`.
/// If `draw_svg` is set, every fixture with a label is also drawn to `label_<stem>_<id>.svg`.
pub fn process_fixture_set(
    fixture_set: ExtFixtureSet,
    config: LabelConfig,
    input_stem: &str,
    output_folder: &Path,
    draw_svg: bool,
) -> Result<ReportOutput> {
    let reports = fixture_set
        .fixtures
        .iter()
        .map(|f| export_report(f, &config))
        .collect_vec();

    let n_labeled = reports.iter().filter(|r| r.label.is_some()).count();
    info!(
        "[PROC] {} of {} fixtures in \"{}\" labeled",
        n_labeled,
        reports.len(),
        fixture_set.name
    );

    if draw_svg {
        for (fixture, report) in fixture_set.fixtures.iter().zip(&reports) {
            let (Some(label), Some(source)) = (report.label, report.label_source) else {
                continue;
            };
            let ring = import_fixture(fixture);
            let label = Label {
                point: label.into(),
                source,
            };
            let title = match &fixture.name {
                Some(name) => format!("{name} ({})", describe(source)),
                None => format!("fixture {} ({})", fixture.id, describe(source)),
            };
            let svg = ring_to_svg(
                &ring,
                report.centroid.map(|c| c.into()),
                Some(label),
                SvgDrawOptions::default(),
                &title,
            );
            let svg_path = output_folder.join(format!("label_{input_stem}_{}.svg", fixture.id));
            io::write_svg(&svg, &svg_path)?;
        }
    }

    let output = ReportOutput {
        fixture_set,
        config,
        reports,
    };

    let report_path = output_folder.join(format!("report_{input_stem}.json"));
    io::write_json(&output, &report_path)?;

    Ok(output)
}

fn describe(source: LabelSource) -> &'static str {
    match source {
        LabelSource::Centroid => "centroid",
        LabelSource::Boundary => "boundary",
        LabelSource::Corrected => "corrected",
    }
}
