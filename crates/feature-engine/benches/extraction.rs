//! End-to-end extraction benchmark

use accel_window::{AccelSample, Window};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feature_engine::{ExtractorConfig, FeatureExtractor, MagnitudeMode};

fn synthetic_window(len: usize) -> Window {
    let samples: Vec<AccelSample> = (0..len)
        .map(|i| {
            let t = i as f64 / 150.0;
            AccelSample::new(
                (2.0 * std::f64::consts::PI * 3.0 * t).sin(),
                (2.0 * std::f64::consts::PI * 5.0 * t).cos(),
                1.0 + 0.2 * (2.0 * std::f64::consts::PI * 8.0 * t).sin(),
            )
        })
        .collect();
    Window::new(samples).expect("non-empty")
}

fn bench_extraction(c: &mut Criterion) {
    let window = synthetic_window(150);

    let legacy = FeatureExtractor::default();
    c.bench_function("extract_legacy_150", |b| {
        b.iter(|| legacy.extract(black_box(&window)).unwrap())
    });

    let filtered = FeatureExtractor::new(ExtractorConfig {
        magnitude: MagnitudeMode::Filtered,
        ..Default::default()
    });
    c.bench_function("extract_filtered_magnitude_150", |b| {
        b.iter(|| filtered.extract(black_box(&window)).unwrap())
    });
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
