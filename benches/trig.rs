use hailmath::{num, trig};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_sin_appr(c: &mut Criterion) {
    c.bench_function("Approximate sine", |b| {
        b.iter(|| trig::sin_q(black_box(1.0_f32)))
    });
}

fn bench_sin_exact(c: &mut Criterion) {
    c.bench_function("Exact sine", |b| b.iter(|| f32::sin(black_box(1.0))));
}

fn bench_abs_bitmask(c: &mut Criterion) {
    c.bench_function("Bit-mask abs", |b| {
        b.iter(|| trig::abs_q(black_box(-1.0_f32)))
    });
}

fn bench_abs_branching(c: &mut Criterion) {
    c.bench_function("Branching abs", |b| {
        b.iter(|| num::abs(black_box(-1.0_f32)))
    });
}

criterion_group!(
    benches,
    bench_sin_appr,
    bench_sin_exact,
    bench_abs_bitmask,
    bench_abs_branching
);
criterion_main!(benches);
