use criterion::{black_box, criterion_group, criterion_main, Criterion};
use multiorder::Sequence;

fn benchme(c: &mut Criterion) {
    // Insertion order shuffled enough that the sorts do real work.
    let seq: Sequence<u64> = (0..1000u64).map(|i| i.wrapping_mul(2654435761) % 1000).collect();

    c.bench_function("ascending_route", |b| {
        b.iter(|| {
            let _ = black_box(&seq).iter_ascending();
        });
    });

    c.bench_function("side_cross_route", |b| {
        b.iter(|| {
            let _ = black_box(&seq).iter_side_cross();
        });
    });

    c.bench_function("middle_out_route", |b| {
        b.iter(|| {
            let _ = black_box(&seq).iter_middle_out();
        });
    });

    c.bench_function("drain_ascending", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for item in black_box(&seq).iter_ascending() {
                sum = sum.wrapping_add(*item);
            }
            sum
        });
    });

    c.bench_function("drain_insertion", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for item in black_box(&seq).iter() {
                sum = sum.wrapping_add(*item);
            }
            sum
        });
    });
}

criterion_group!(benches, benchme);
criterion_main!(benches);
