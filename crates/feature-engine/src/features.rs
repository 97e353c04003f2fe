//! Feature Vector Assembly

use crate::config::{EntropyMode, ExtractorConfig, MagnitudeMode};
use crate::error::FeatureError;
use crate::magnitude;
use crate::schema::{FeatureKind, FeatureSchema};
use crate::statistics;
use accel_window::{Axis, Window};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Width of the default feature vector (6 transforms x 3 axes)
pub const LEGACY_FEATURE_DIMENSION: usize = 18;

/// Named feature vector extracted from one window
///
/// Only the extractor constructs this, so `names` and `values` always have
/// equal length with positions in lock-step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureSet {
    /// Feature names in vector order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Feature values in vector order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no features
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of the named feature, if present
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    /// Consume into the (names, values) pair
    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.names, self.values)
    }
}

/// Feature extractor that processes accelerometer windows
pub struct FeatureExtractor {
    config: ExtractorConfig,
    schema: FeatureSchema,
}

impl FeatureExtractor {
    /// Create an extractor; the schema is derived from the config once
    pub fn new(config: ExtractorConfig) -> Self {
        let schema = match config.magnitude {
            MagnitudeMode::Off => FeatureSchema::legacy(),
            MagnitudeMode::Raw | MagnitudeMode::Filtered => FeatureSchema::with_magnitude(),
        };
        Self { config, schema }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Vector layout this extractor produces
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Extract the feature vector and matching names from a window
    ///
    /// Fail-fast: an empty window is rejected before any transform runs.
    /// The axis split is computed once and shared by every per-axis
    /// transform. Pure: the same window always yields the same result.
    pub fn extract(&self, window: &Window) -> Result<FeatureSet, FeatureError> {
        if window.is_empty() {
            return Err(FeatureError::EmptyWindow);
        }

        let axes = window.split_axes();
        let mut values = Vec::with_capacity(self.schema.width(window.len()));
        for kind in self.schema.kinds() {
            match kind {
                FeatureKind::Magnitude => values.extend(self.magnitude_values(window)),
                per_axis => {
                    for axis in Axis::ALL {
                        values.push(self.axis_value(*per_axis, axes.axis(axis)));
                    }
                }
            }
        }

        let names = self.schema.names(window.len());
        debug_assert_eq!(names.len(), values.len());
        debug!(
            "extracted {} features from {} samples",
            values.len(),
            window.len()
        );

        Ok(FeatureSet { names, values })
    }

    /// Extract from untyped rows directly
    pub fn extract_from_rows(&self, rows: &[Vec<f64>]) -> Result<FeatureSet, FeatureError> {
        let window = Window::from_rows(rows)?;
        self.extract(&window)
    }

    fn axis_value(&self, kind: FeatureKind, seq: &[f64]) -> f64 {
        match kind {
            FeatureKind::Mean => statistics::mean(seq),
            FeatureKind::Peaks => statistics::peak_count(seq) as f64,
            FeatureKind::Troughs => statistics::trough_count(seq) as f64,
            FeatureKind::ZeroCrossings => statistics::zero_crossings(seq) as f64,
            FeatureKind::Range => statistics::value_range(seq),
            FeatureKind::Entropy => match self.config.entropy {
                EntropyMode::HistogramMass => {
                    statistics::histogram_mass(seq, self.config.histogram_bins)
                }
                EntropyMode::Shannon => {
                    statistics::shannon_entropy(seq, self.config.histogram_bins)
                }
            },
            FeatureKind::Magnitude => unreachable!("magnitude is not a per-axis transform"),
        }
    }

    fn magnitude_values(&self, window: &Window) -> Vec<f64> {
        match self.config.magnitude {
            MagnitudeMode::Off => Vec::new(),
            MagnitudeMode::Raw => magnitude::magnitude_series(window),
            MagnitudeMode::Filtered => magnitude::highpass_magnitude(window, &self.config.filter),
        }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}
