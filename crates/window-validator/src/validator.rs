//! Window Validator for Range Checking

use crate::error::ValidationError;
use accel_window::{Axis, Window};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Allowed acceleration range per axis (g)
    pub accel_range: (f64, f64),
    /// Reject NaN and infinite values
    pub reject_non_finite: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        // ±16 g covers the full-scale range of common MEMS accelerometers
        Self {
            accel_range: (-16.0, 16.0),
            reject_non_finite: true,
        }
    }
}

/// Result of validating one window
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether every value passed
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of samples inspected
    pub samples_checked: usize,
}

impl ValidationResult {
    /// Create a passing result
    pub fn valid(samples_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            samples_checked,
        }
    }

    /// Create a failing result with errors
    pub fn invalid(errors: Vec<ValidationError>, samples_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            samples_checked,
        }
    }
}

/// Value-level validator for accelerometer windows
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value at a known axis/position
    pub fn validate_value(
        &self,
        axis: Axis,
        index: usize,
        value: f64,
    ) -> Result<(), ValidationError> {
        if self.config.reject_non_finite && !value.is_finite() {
            return Err(ValidationError::NonFinite { axis, index, value });
        }
        let (min, max) = self.config.accel_range;
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                axis,
                index,
                value,
                min,
                max,
            });
        }
        Ok(())
    }

    /// Validate every value in the window, collecting all errors
    pub fn validate(&self, window: &Window) -> ValidationResult {
        let mut errors = Vec::new();
        for (index, sample) in window.iter().enumerate() {
            for axis in Axis::ALL {
                if let Err(e) = self.validate_value(axis, index, sample.axis(axis)) {
                    errors.push(e);
                }
            }
        }
        if errors.is_empty() {
            ValidationResult::valid(window.len())
        } else {
            warn!(
                "window failed validation: {} error(s) in {} samples",
                errors.len(),
                window.len()
            );
            ValidationResult::invalid(errors, window.len())
        }
    }

    /// Validate the window, stopping at the first error
    pub fn check(&self, window: &Window) -> Result<(), ValidationError> {
        for (index, sample) in window.iter().enumerate() {
            for axis in Axis::ALL {
                self.validate_value(axis, index, sample.axis(axis))?;
            }
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accel_window::AccelSample;
    use proptest::prelude::*;

    fn window(rows: &[[f64; 3]]) -> Window {
        Window::new(rows.iter().map(|&r| AccelSample::from(r)).collect()).unwrap()
    }

    #[test]
    fn test_normal_motion_passes() {
        let validator = Validator::default();
        let w = window(&[[0.1, -0.2, 0.98], [0.3, 0.1, 1.02], [-0.1, 0.0, 0.95]]);
        let result = validator.validate(&w);
        assert!(result.valid);
        assert_eq!(result.samples_checked, 3);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_spike_rejected() {
        let validator = Validator::default();
        let w = window(&[[0.1, 0.0, 1.0], [100.0, 0.0, 1.0]]);
        let result = validator.validate(&w);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors[0],
            ValidationError::OutOfRange {
                axis: Axis::X,
                index: 1,
                value: 100.0,
                min: -16.0,
                max: 16.0,
            }
        );
    }

    #[test]
    fn test_nan_rejected() {
        let validator = Validator::default();
        let w = window(&[[0.0, f64::NAN, 1.0]]);
        assert!(matches!(
            validator.check(&w),
            Err(ValidationError::NonFinite {
                axis: Axis::Y,
                index: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_boundary_values_pass() {
        let validator = Validator::default();
        let w = window(&[[-16.0, 16.0, 0.0]]);
        assert!(validator.check(&w).is_ok());
    }

    #[test]
    fn test_check_reports_first_error_only() {
        let validator = Validator::default();
        let w = window(&[[20.0, -20.0, 0.0]]);
        assert!(matches!(
            validator.check(&w),
            Err(ValidationError::OutOfRange { axis: Axis::X, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_in_range_windows_always_pass(
            rows in prop::collection::vec(
                (-16.0..16.0f64, -16.0..16.0f64, -16.0..16.0f64),
                1..40,
            )
        ) {
            let w = Window::new(
                rows.into_iter()
                    .map(|(x, y, z)| AccelSample::new(x, y, z))
                    .collect(),
            )
            .unwrap();
            let validator = Validator::default();
            prop_assert!(validator.validate(&w).valid);
            prop_assert!(validator.check(&w).is_ok());
        }
    }
}
