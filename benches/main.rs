use criterion::{black_box, criterion_group, criterion_main, Criterion};
use micro_lms::{LmsFilter, MatrixView};

fn run_step_benchmark(
    id: &str,
    c: &mut Criterion,
    tap_count: usize,
    channel_count: usize,
    normalized: bool,
) {
    let mut filter =
        LmsFilter::from_options(tap_count, 0, channel_count, 0.01, normalized, None).unwrap();
    let data: Vec<f64> = (0..tap_count * channel_count)
        .map(|i| ((i % 17) as f64 - 8.0) / 8.0)
        .collect();
    let regressors = MatrixView::new(&data[..], channel_count, tap_count).unwrap();

    c.bench_function(id, |b| {
        b.iter(|| {
            filter.step(black_box(&regressors), black_box(0.5)).unwrap();
        })
    });
}

fn lms_benchmarks(c: &mut Criterion) {
    run_step_benchmark("LMS taps 32, channels 1", c, 32, 1, false);
    run_step_benchmark("LMS taps 128, channels 1", c, 128, 1, false);
    run_step_benchmark("LMS taps 128, channels 4", c, 128, 4, false);
}

fn nlms_benchmarks(c: &mut Criterion) {
    run_step_benchmark("NLMS taps 32, channels 1", c, 32, 1, true);
    run_step_benchmark("NLMS taps 128, channels 1", c, 128, 1, true);
    run_step_benchmark("NLMS taps 128, channels 4", c, 128, 4, true);
    run_step_benchmark("NLMS taps 512, channels 8", c, 512, 8, true);
}

criterion_group!(benches, lms_benchmarks, nlms_benchmarks);
criterion_main!(benches);
