/// Set of functions used to check the output of the library.
pub mod assertions;

mod config;

/// Decimal rounding of floating point values
pub mod rounding;

#[doc(inline)]
pub use config::LabelConfig;
