//! Per-Axis Statistical Transforms
//!
//! Pure functions over a single axis's sample sequence. Every function
//! assumes a non-empty sequence; the extractor rejects empty windows before
//! any transform runs.

/// Arithmetic mean of the sequence
pub fn mean(seq: &[f64]) -> f64 {
    debug_assert!(!seq.is_empty());
    seq.iter().sum::<f64>() / seq.len() as f64
}

/// Number of strict interior local maxima
///
/// Position i counts iff `seq[i-1] < seq[i] > seq[i+1]`. Boundary samples
/// never qualify, so sequences shorter than 3 have no peaks.
pub fn peak_count(seq: &[f64]) -> usize {
    seq.windows(3)
        .filter(|w| w[1] > w[0] && w[1] > w[2])
        .count()
}

/// Number of strict interior local minima
pub fn trough_count(seq: &[f64]) -> usize {
    seq.windows(3)
        .filter(|w| w[1] < w[0] && w[1] < w[2])
        .count()
}

/// Number of transitions between the negative and non-negative value classes
///
/// A value is "negative" iff it is strictly below zero; exact zero belongs
/// to the non-negative class. The tracked class starts at the first sample
/// and updates on every transition.
pub fn zero_crossings(seq: &[f64]) -> usize {
    debug_assert!(!seq.is_empty());
    let mut crossings = 0;
    let mut negative = seq[0] < 0.0;
    for &v in &seq[1..] {
        let is_negative = v < 0.0;
        if is_negative != negative {
            crossings += 1;
            negative = is_negative;
        }
    }
    crossings
}

/// Max minus min of the sequence
pub fn value_range(seq: &[f64]) -> f64 {
    debug_assert!(!seq.is_empty());
    let min = seq.iter().cloned().fold(f64::MAX, f64::min);
    let max = seq.iter().cloned().fold(f64::MIN, f64::max);
    max - min
}

/// Equal-width histogram of a sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Occupancy count per bin
    pub counts: Vec<usize>,
    /// Bin edges, `bins + 1` of them, ascending
    pub edges: Vec<f64>,
}

/// Build an equal-width histogram over `[min, max]`
///
/// A constant sequence has zero spread, so its range is widened to
/// `[v - 0.5, v + 0.5]`. Interior bins are half-open `[e_i, e_i+1)`; the
/// final bin is closed so the maximum lands in it.
pub fn histogram(seq: &[f64], bins: usize) -> Histogram {
    debug_assert!(!seq.is_empty());
    debug_assert!(bins > 0);

    let mut lo = seq.iter().cloned().fold(f64::MAX, f64::min);
    let mut hi = seq.iter().cloned().fold(f64::MIN, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let edges: Vec<f64> = (0..=bins)
        .map(|i| lo + (hi - lo) * i as f64 / bins as f64)
        .collect();

    let mut counts = vec![0usize; bins];
    let width = hi - lo;
    for &v in seq {
        let idx = (((v - lo) / width) * bins as f64) as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    Histogram { counts, edges }
}

/// Sum of all histogram bin counts and bin edges
///
/// This is the summation the downstream classifier schema was trained
/// against under the `entropy` key. It is not an entropy in the
/// information-theoretic sense; `shannon_entropy` is the corrected
/// alternative, selected via `EntropyMode`.
pub fn histogram_mass(seq: &[f64], bins: usize) -> f64 {
    let hist = histogram(seq, bins);
    let count_sum: usize = hist.counts.iter().sum();
    let edge_sum: f64 = hist.edges.iter().sum();
    count_sum as f64 + edge_sum
}

/// Shannon entropy (bits) of the histogram bin occupancies
///
/// `-Σ p_i * log2(p_i)` over non-empty bins.
pub fn shannon_entropy(seq: &[f64], bins: usize) -> f64 {
    let hist = histogram(seq, bins);
    let n = seq.len() as f64;
    -hist
        .counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / n;
            p * p.log2()
        })
        .sum::<f64>()
}
