use chronology_core::{AsinhLocator, TickLocator};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_locator(c: &mut Criterion) {
    let major = AsinhLocator::new(20.0, 0.0).expect("valid");
    let minor = major.clone().with_subs(vec![2.0, 4.0, 6.0, 8.0]);
    let views = [(-500.0, 500.0), (-98.0, 102.0), (-2_000.0, 1e6), (0.0, 1e15)];

    c.bench_function("asinh_major_ticks", |b| {
        b.iter(|| {
            for &(lo, hi) in &views {
                black_box(major.compute(black_box(lo), black_box(hi)));
            }
        })
    });
    c.bench_function("asinh_minor_ticks", |b| {
        b.iter(|| {
            for &(lo, hi) in &views {
                black_box(minor.compute(black_box(lo), black_box(hi)));
            }
        })
    });
}

criterion_group!(benches, bench_locator);
criterion_main!(benches);
