//! Criterion benchmarks for varswap_core curves.
//!
//! Measures construction, lookup and jump extraction of the piecewise
//! linear curve across knot counts to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use varswap_core::math::interpolators::{Interpolator, PiecewiseLinearCurve};

/// Generate knots for 1D benchmarks.
fn generate_knots(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| x.sin() + 0.5 * x * x).collect();
    (xs, ys)
}

fn bench_piecewise_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("piecewise_linear");

    for size in [100, 1000, 10000] {
        let (xs, ys) = generate_knots(size);

        group.bench_with_input(
            BenchmarkId::new("construction", size),
            &(&xs, &ys),
            |b, (xs, ys)| {
                b.iter(|| PiecewiseLinearCurve::new(black_box(xs), black_box(ys)).unwrap());
            },
        );

        let curve = PiecewiseLinearCurve::new(&xs, &ys).unwrap();
        group.bench_with_input(BenchmarkId::new("lookup", size), &curve, |b, curve| {
            b.iter(|| curve.interpolate(black_box(0.5)).unwrap());
        });

        group.bench_with_input(
            BenchmarkId::new("jump_sequence", size),
            &curve,
            |b, curve| {
                b.iter(|| black_box(curve.jump_sequence()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_piecewise_linear);
criterion_main!(benches);
