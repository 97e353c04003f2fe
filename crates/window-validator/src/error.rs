//! Validation Error Types

use accel_window::Axis;
use thiserror::Error;

/// Errors during window validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value is NaN or infinite
    #[error("{axis_label} sample {index} is not finite ({value})", axis_label = .axis.label())]
    NonFinite { axis: Axis, index: usize, value: f64 },

    /// Value out of the allowed acceleration range
    #[error(
        "{axis_label} sample {index} value {value} is out of range [{min}, {max}]",
        axis_label = .axis.label()
    )]
    OutOfRange {
        axis: Axis,
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },
}
