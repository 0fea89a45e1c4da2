use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swapcore_amm::tick_math::{sqrt_ratio_at_tick, tick_at_sqrt_ratio};

fn bench_sqrt_ratio_at_tick(c: &mut Criterion) {
    c.bench_function("sqrt_ratio_at_tick", |b| {
        b.iter(|| sqrt_ratio_at_tick(black_box(123_456)).unwrap())
    });
}

fn bench_tick_at_sqrt_ratio(c: &mut Criterion) {
    let ratio = sqrt_ratio_at_tick(123_456).unwrap();
    c.bench_function("tick_at_sqrt_ratio", |b| {
        b.iter(|| tick_at_sqrt_ratio(black_box(ratio)).unwrap())
    });
}

criterion_group!(benches, bench_sqrt_ratio_at_tick, bench_tick_at_sqrt_ratio);
criterion_main!(benches);
