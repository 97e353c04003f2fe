//! Extractor configuration

use serde::{Deserialize, Serialize};

/// Semantics of the `entropy` feature slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntropyMode {
    /// Sum of histogram bin counts and bin edges
    ///
    /// Reproduces the summation existing classifier schemas were trained
    /// against. Not an entropy in the information-theoretic sense.
    HistogramMass,
    /// Shannon entropy over histogram bin occupancies
    Shannon,
}

impl Default for EntropyMode {
    fn default() -> Self {
        EntropyMode::HistogramMass
    }
}

/// Whether and how the magnitude series joins the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MagnitudeMode {
    /// Magnitude stays out of the vector (legacy layout)
    Off,
    /// Append the raw per-sample magnitude
    Raw,
    /// Append the high-pass filtered per-sample magnitude
    Filtered,
}

impl Default for MagnitudeMode {
    fn default() -> Self {
        MagnitudeMode::Off
    }
}

/// High-pass filter parameters for the magnitude transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Cutoff frequency (Hz)
    pub cutoff_hz: f64,
    /// Sampling frequency of the incoming windows (Hz)
    pub sample_rate_hz: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            cutoff_hz: 2.0,
            sample_rate_hz: 150.0,
        }
    }
}

/// Feature extraction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Entropy slot semantics
    pub entropy: EntropyMode,
    /// Magnitude wiring
    pub magnitude: MagnitudeMode,
    /// Number of histogram bins for the entropy slot
    pub histogram_bins: usize,
    /// Magnitude high-pass parameters
    pub filter: FilterConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            entropy: EntropyMode::default(),
            magnitude: MagnitudeMode::default(),
            histogram_bins: 5,
            filter: FilterConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Legacy-compatible configuration (the default)
    pub fn legacy() -> Self {
        Self::default()
    }

    /// Legacy layout with the entropy slot computed as true Shannon entropy
    pub fn shannon() -> Self {
        Self {
            entropy: EntropyMode::Shannon,
            ..Default::default()
        }
    }
}
