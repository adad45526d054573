use ringlabel::io::ext_repr::{ExtFixtureSet, ExtRingReport};
use ringlabel::util::LabelConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReportOutput {
    pub fixture_set: ExtFixtureSet,
    pub config: LabelConfig,
    pub reports: Vec<ExtRingReport>,
}
