use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use euclid_vector::{utils::generate_random_vectors, vector};

const BATCH_SIZE: usize = 1_000;

/// Element-wise operations over a range of dimensions.
fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");
    for dim in [2usize, 3, 16, 128] {
        let vectors = generate_random_vectors(dim, 2).expect("non-zero dimension");
        let (a, b) = (&vectors[0], &vectors[1]);

        group.bench_with_input(BenchmarkId::new("add", dim), &dim, |bencher, _| {
            bencher.iter(|| black_box(a).add(black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("dot", dim), &dim, |bencher, _| {
            bencher.iter(|| black_box(a).dot(black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("normalize", dim), &dim, |bencher, _| {
            bencher.iter(|| black_box(a).normalize())
        });
    }
    group.finish();
}

/// Cross product and perpendicular of 3D vectors.
fn bench_cross(c: &mut Criterion) {
    let a = vector![1, 1, 1].expect("three components");
    let b = vector![2, 4, 6].expect("three components");

    c.bench_function("cross 3D × 1000 batch", |bencher| {
        bencher.iter(|| {
            for _ in 0..BATCH_SIZE {
                black_box(black_box(&a).cross(black_box(&b)).ok());
            }
        })
    });

    c.bench_function("perpendicular 3D × 1000 batch", |bencher| {
        bencher.iter(|| {
            for _ in 0..BATCH_SIZE {
                black_box(black_box(&a).perpendicular().ok());
            }
        })
    });
}

criterion_group!(benches, bench_elementwise, bench_cross);
criterion_main!(benches);
