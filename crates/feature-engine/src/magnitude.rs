//! Magnitude Signal Analysis

use crate::config::FilterConfig;
use accel_window::Window;

/// Per-sample Euclidean norm across the three axes
pub fn magnitude_series(window: &Window) -> Vec<f64> {
    window.iter().map(|s| s.magnitude()).collect()
}

/// High-pass filtered magnitude series
///
/// Removes the gravity/DC component so the series reflects motion energy
/// only. Second-order Butterworth high-pass (bilinear transform), applied
/// forward and then backward for zero phase distortion. Output has the same
/// length as the window.
pub fn highpass_magnitude(window: &Window, config: &FilterConfig) -> Vec<f64> {
    let mag = magnitude_series(window);
    let forward = biquad_highpass(&mag, config.sample_rate_hz, config.cutoff_hz);
    let mut reversed: Vec<f64> = forward.into_iter().rev().collect();
    reversed = biquad_highpass(&reversed, config.sample_rate_hz, config.cutoff_hz);
    reversed.reverse();
    reversed
}

/// Second-order Butterworth high-pass filter (bilinear transform)
fn biquad_highpass(signal: &[f64], fs: f64, fc: f64) -> Vec<f64> {
    let wc = (std::f64::consts::PI * fc / fs).tan();
    let wc2 = wc * wc;
    let sqrt2 = std::f64::consts::SQRT_2;
    let k = 1.0 + sqrt2 * wc + wc2;

    let b0 = 1.0 / k;
    let b1 = -2.0 / k;
    let b2 = 1.0 / k;
    let a1 = 2.0 * (wc2 - 1.0) / k;
    let a2 = (1.0 - sqrt2 * wc + wc2) / k;

    iir_filter_2nd(signal, b0, b1, b2, a1, a2)
}

/// Apply a second-order IIR filter (Direct Form I)
fn iir_filter_2nd(signal: &[f64], b0: f64, b1: f64, b2: f64, a1: f64, a2: f64) -> Vec<f64> {
    let n = signal.len();
    let mut out = vec![0.0f64; n];
    for i in 0..n {
        let x0 = signal[i];
        let x1 = if i >= 1 { signal[i - 1] } else { 0.0 };
        let x2 = if i >= 2 { signal[i - 2] } else { 0.0 };
        let y1 = if i >= 1 { out[i - 1] } else { 0.0 };
        let y2 = if i >= 2 { out[i - 2] } else { 0.0 };
        out[i] = b0 * x0 + b1 * x1 + b2 * x2 - a1 * y1 - a2 * y2;
    }
    out
}
