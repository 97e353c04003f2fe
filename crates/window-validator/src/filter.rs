//! Median Despiking for Noisy Windows

use accel_window::{AccelSample, Window};

/// Replace each value with the median of a sliding window over its axis
///
/// `width` must be odd and > 0. The neighborhood is clamped at the window
/// boundaries, so the output has the same length as the input. Useful when
/// the upstream driver occasionally delivers single-sample spikes; never
/// applied implicitly by the feature extractor.
pub fn median_despike(window: &Window, width: usize) -> Window {
    assert!(width > 0 && width % 2 == 1, "width must be odd and > 0");

    let axes = window.split_axes();
    let x = despike_axis(&axes.x, width);
    let y = despike_axis(&axes.y, width);
    let z = despike_axis(&axes.z, width);

    let samples = (0..window.len())
        .map(|i| AccelSample::new(x[i], y[i], z[i]))
        .collect();
    // Input window is non-empty, so reconstruction cannot fail
    Window::new(samples).expect("despiked window preserves length")
}

fn despike_axis(seq: &[f64], width: usize) -> Vec<f64> {
    let half = width / 2;
    let mut out = Vec::with_capacity(seq.len());
    for i in 0..seq.len() {
        let lo = i.saturating_sub(half);
        let hi = (i + half + 1).min(seq.len());
        let mut neighborhood: Vec<f64> = seq[lo..hi].to_vec();
        neighborhood.sort_by(|a, b| a.partial_cmp(b).expect("non-NaN input"));
        out.push(neighborhood[neighborhood.len() / 2]);
    }
    out
}
