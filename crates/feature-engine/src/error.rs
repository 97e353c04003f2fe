//! Feature Extraction Error Types

use accel_window::WindowError;
use thiserror::Error;

/// Errors during feature extraction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Window holds no samples; every transform requires at least one
    #[error("cannot extract features from an empty window")]
    EmptyWindow,

    /// Window construction failed
    #[error(transparent)]
    Window(#[from] WindowError),
}
