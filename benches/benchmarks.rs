use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keyspread::{DistributorBuilder, HashFunction};

fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key_{}", i)).collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute");
    let keys = keys(1000);

    let strategies = [
        ("fnv1a", HashFunction::Fnv1a),
        ("sip", HashFunction::Sip),
        ("positional", HashFunction::Positional),
    ];

    for (name, strategy) in strategies {
        group.bench_with_input(
            BenchmarkId::new("strategy", name),
            &strategy,
            |b, &strategy| {
                let distributor = DistributorBuilder::new()
                    .container_count(16)
                    .unwrap()
                    .hash_function(strategy)
                    .build()
                    .unwrap();
                b.iter(|| distributor.distribute(black_box(&keys)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_container_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_count");
    let keys = keys(1000);

    for container_count in [2, 16, 64, 256, 1000] {
        group.bench_with_input(
            BenchmarkId::new("fnv1a", container_count),
            &container_count,
            |b, &container_count| {
                let distributor = DistributorBuilder::new()
                    .container_count(container_count)
                    .unwrap()
                    .build()
                    .unwrap();
                b.iter(|| distributor.distribute(black_box(&keys)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_diagnostics(c: &mut Criterion) {
    let keys = keys(10_000);
    let distributor = DistributorBuilder::new()
        .container_count(64)
        .unwrap()
        .build()
        .unwrap();
    let dist = distributor.distribute(&keys).unwrap();

    c.bench_function("diagnostics", |b| {
        b.iter(|| black_box(&dist).diagnostics());
    });
}

criterion_group!(
    benches,
    bench_strategies,
    bench_container_counts,
    bench_diagnostics
);
criterion_main!(benches);
