//! Benchmark: value mapping and easing hot paths.
//!
//! Run with: `cargo bench -p dslider-core --bench value_mapper_bench`
//!
//! `from_offset` runs once per touch-move event and `Easing::apply` once per
//! animated cell per frame, so both sit on the interaction hot path.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use dslider_core::ValueRange;
use dslider_core::animation::{CubicBezier, Easing};

fn bench_from_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_offset");
    let continuous = ValueRange::new(0.0, 100.0, 0.0).expect("valid range");
    let stepped = ValueRange::new(0.0, 100.0, 0.1).expect("valid range");

    group.bench_function("continuous", |b| {
        b.iter(|| continuous.from_offset(black_box(137.5), black_box(280.0), false))
    });
    group.bench_function("stepped", |b| {
        b.iter(|| stepped.from_offset(black_box(137.5), black_box(280.0), false))
    });
    group.bench_function("stepped_mirrored", |b| {
        b.iter(|| stepped.from_offset(black_box(137.5), black_box(280.0), true))
    });
    group.finish();
}

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");
    let curves = [
        ("linear", Easing::Linear),
        ("in_out_ease", Easing::InOutEase),
        (
            "cubic_bezier",
            Easing::CubicBezier(CubicBezier::new(0.4, 0.0, 0.2, 1.0)),
        ),
    ];
    for (name, easing) in curves {
        group.bench_function(name, |b| b.iter(|| easing.apply(black_box(0.37))));
    }
    group.finish();
}

criterion_group!(benches, bench_from_offset, bench_easing);
criterion_main!(benches);
