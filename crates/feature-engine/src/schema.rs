//! Feature Schema
//!
//! The ordered list of transforms is the single source of truth for the
//! feature vector: it generates the names and drives value assembly, so the
//! two cannot drift apart. Consumers depend on positional meaning, so any
//! change to the order or membership is a breaking change and must bump
//! `SCHEMA_VERSION`.

use accel_window::Axis;
use serde::{Deserialize, Serialize};

/// Version tag of the feature vector layout
pub const SCHEMA_VERSION: u32 = 1;

/// One transform slot in the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Per-axis arithmetic mean
    Mean,
    /// Per-axis strict local-maxima count
    Peaks,
    /// Per-axis strict local-minima count
    Troughs,
    /// Per-axis negative/non-negative transition count
    ZeroCrossings,
    /// Per-axis max minus min; exported as `dfreq`, the key existing
    /// classifier schemas already use
    Range,
    /// Per-axis histogram summary (semantics chosen by `EntropyMode`)
    Entropy,
    /// Per-sample Euclidean norm across axes (window-length values)
    Magnitude,
}

impl FeatureKind {
    /// Stable wire key used in feature names
    pub fn key(&self) -> &'static str {
        match self {
            FeatureKind::Mean => "mean",
            FeatureKind::Peaks => "peaks",
            FeatureKind::Troughs => "troughs",
            FeatureKind::ZeroCrossings => "zero_crossings",
            FeatureKind::Range => "dfreq",
            FeatureKind::Entropy => "entropy",
            FeatureKind::Magnitude => "mag",
        }
    }

    /// Whether this transform yields one value per axis
    pub fn per_axis(&self) -> bool {
        !matches!(self, FeatureKind::Magnitude)
    }
}

/// Ordered feature vector layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    kinds: Vec<FeatureKind>,
}

impl FeatureSchema {
    /// The legacy layout: mean, peaks, troughs, zero-crossings, range,
    /// entropy — magnitude excluded
    pub fn legacy() -> Self {
        Self {
            kinds: vec![
                FeatureKind::Mean,
                FeatureKind::Peaks,
                FeatureKind::Troughs,
                FeatureKind::ZeroCrossings,
                FeatureKind::Range,
                FeatureKind::Entropy,
            ],
        }
    }

    /// Legacy layout with the magnitude series appended at the end
    pub fn with_magnitude() -> Self {
        let mut schema = Self::legacy();
        schema.kinds.push(FeatureKind::Magnitude);
        schema
    }

    /// Transforms in vector order
    pub fn kinds(&self) -> &[FeatureKind] {
        &self.kinds
    }

    /// Total vector width for a window of `window_len` samples
    pub fn width(&self, window_len: usize) -> usize {
        self.kinds
            .iter()
            .map(|k| if k.per_axis() { Axis::ALL.len() } else { window_len })
            .sum()
    }

    /// Feature names in vector order
    ///
    /// Per-axis slots follow the `<axis>_<key>` template with axes in
    /// x, y, z order; the magnitude slot contributes `mag_<i>` per sample.
    pub fn names(&self, window_len: usize) -> Vec<String> {
        let mut names = Vec::with_capacity(self.width(window_len));
        for kind in &self.kinds {
            if kind.per_axis() {
                for axis in Axis::ALL {
                    names.push(format!("{}_{}", axis.label(), kind.key()));
                }
            } else {
                for i in 0..window_len {
                    names.push(format!("{}_{}", kind.key(), i));
                }
            }
        }
        names
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::legacy()
    }
}
