/// External (serializable) representations of fixtures and reports.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for computing and exporting reports into external representations
pub mod export;

/// Rendering of rings, centroids and labels to SVG
#[cfg(feature = "svg")]
pub mod svg;
