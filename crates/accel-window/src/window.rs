//! Fixed-Size Sample Windows

use crate::AccelSample;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of components in a well-formed sample row
pub const SAMPLE_WIDTH: usize = 3;

/// Errors during window construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// Window contains no samples
    #[error("window contains no samples")]
    Empty,

    /// A raw sample row does not have exactly 3 components
    #[error("sample {index} has {got} components, expected {SAMPLE_WIDTH}")]
    BadSampleWidth { index: usize, got: usize },
}

/// Accelerometer axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in the fixed x, y, z order used throughout the pipeline
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase label used as the feature-name prefix
    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// A time-ordered, non-empty slice of 3-axis accelerometer samples
///
/// Windows are sliced upstream (segmentation is not this pipeline's job) and
/// are read-only once constructed. Shape is enforced at the boundary:
/// `from_rows` rejects malformed rows, so every transform downstream can
/// assume exactly 3 components per sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    samples: Vec<AccelSample>,
}

impl Window {
    /// Create a window from typed samples, rejecting empty input
    pub fn new(samples: Vec<AccelSample>) -> Result<Self, WindowError> {
        if samples.is_empty() {
            return Err(WindowError::Empty);
        }
        Ok(Self { samples })
    }

    /// Create a window from untyped rows, validating each row's width
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, WindowError> {
        let mut samples = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            if row.len() != SAMPLE_WIDTH {
                return Err(WindowError::BadSampleWidth {
                    index,
                    got: row.len(),
                });
            }
            samples.push(AccelSample::new(row[0], row[1], row[2]));
        }
        Self::new(samples)
    }

    /// Number of samples in the window
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window holds no samples
    ///
    /// `new` rejects empty input, but deserialization can still produce an
    /// empty window, so consumers re-check before extracting.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in time order
    pub fn samples(&self) -> &[AccelSample] {
        &self.samples
    }

    /// Iterate over samples in time order
    pub fn iter(&self) -> std::slice::Iter<'_, AccelSample> {
        self.samples.iter()
    }

    /// Split the window into one ordered sequence per axis
    ///
    /// Computed once per extraction call and shared by every transform that
    /// needs per-axis data.
    pub fn split_axes(&self) -> AxisSeries {
        let mut x = Vec::with_capacity(self.samples.len());
        let mut y = Vec::with_capacity(self.samples.len());
        let mut z = Vec::with_capacity(self.samples.len());
        for sample in &self.samples {
            x.push(sample.x);
            y.push(sample.y);
            z.push(sample.z);
        }
        AxisSeries { x, y, z }
    }
}

/// Per-axis sequences split out of a window, order-preserving
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl AxisSeries {
    /// Sequence for the given axis
    pub fn axis(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Length of each per-axis sequence (equal to the window length)
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn window(rows: &[[f64; 3]]) -> Window {
        Window::new(rows.iter().map(|&r| AccelSample::from(r)).collect()).unwrap()
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Window::new(vec![]), Err(WindowError::Empty));
        assert_eq!(Window::from_rows(&[]), Err(WindowError::Empty));
    }

    #[test]
    fn test_rejects_bad_row_width() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert_eq!(
            Window::from_rows(&rows),
            Err(WindowError::BadSampleWidth { index: 1, got: 2 })
        );
    }

    #[test]
    fn test_from_rows_preserves_order() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let w = Window::from_rows(&rows).unwrap();
        assert_eq!(w.len(), 2);
        assert_eq!(w.samples()[0], AccelSample::new(1.0, 2.0, 3.0));
        assert_eq!(w.samples()[1], AccelSample::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_split_axes() {
        let w = window(&[[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);
        let axes = w.split_axes();
        assert_eq!(axes.x, vec![1.0, 2.0, 3.0]);
        assert_eq!(axes.y, vec![4.0, 5.0, 6.0]);
        assert_eq!(axes.z, vec![7.0, 8.0, 9.0]);
        assert_eq!(axes.len(), w.len());
    }

    #[test]
    fn test_axis_labels_in_fixed_order() {
        let labels: Vec<&str> = Axis::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let w = window(&[[0.1, 0.2, 0.3]]);
        let json = serde_json::to_string(&w).unwrap();
        let back: Window = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }

    proptest! {
        #[test]
        fn prop_split_axes_preserves_samples(
            rows in prop::collection::vec(
                (-100.0..100.0f64, -100.0..100.0f64, -100.0..100.0f64),
                1..50,
            )
        ) {
            let samples: Vec<AccelSample> =
                rows.iter().map(|&(x, y, z)| AccelSample::new(x, y, z)).collect();
            let w = Window::new(samples.clone()).unwrap();
            let axes = w.split_axes();
            prop_assert_eq!(axes.len(), samples.len());
            for (i, s) in samples.iter().enumerate() {
                prop_assert_eq!(axes.x[i], s.x);
                prop_assert_eq!(axes.y[i], s.y);
                prop_assert_eq!(axes.z[i], s.z);
            }
        }
    }
}
