//! Accelerometer Windows
//!
//! Provides the sample and window types consumed by the feature engine.

mod window;

pub use window::{Axis, AxisSeries, Window, WindowError, SAMPLE_WIDTH};

use serde::{Deserialize, Serialize};

/// Single 3-axis accelerometer sample (acceleration in g)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccelSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AccelSample {
    /// Create a sample from per-axis accelerations
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Acceleration along the given axis
    pub fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Euclidean norm across the three axes
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl From<[f64; 3]> for AccelSample {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}
