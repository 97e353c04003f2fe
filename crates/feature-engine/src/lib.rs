//! Feature Engineering Engine
//!
//! Extracts a fixed-order numeric feature vector, with matching names, from
//! a window of 3-axis accelerometer samples, for use as classifier input.

mod config;
mod error;
mod features;
mod magnitude;
mod schema;
mod statistics;

pub use config::{EntropyMode, ExtractorConfig, FilterConfig, MagnitudeMode};
pub use error::FeatureError;
pub use features::{FeatureExtractor, FeatureSet, LEGACY_FEATURE_DIMENSION};
pub use magnitude::{highpass_magnitude, magnitude_series};
pub use schema::{FeatureKind, FeatureSchema, SCHEMA_VERSION};
pub use statistics::{
    histogram, histogram_mass, mean, peak_count, shannon_entropy, trough_count, value_range,
    zero_crossings, Histogram,
};
