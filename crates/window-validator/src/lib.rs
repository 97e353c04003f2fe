//! Window Validation
//!
//! Provides value-level sanity checks and despiking for accelerometer
//! windows, run before feature extraction so garbage values never reach a
//! classifier's training data.

mod error;
mod filter;
mod validator;

pub use error::ValidationError;
pub use filter::median_despike;
pub use validator::{ValidationConfig, ValidationResult, Validator};
