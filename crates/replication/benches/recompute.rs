//! Benchmark for the full placement recomputation pass.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use replication::{Cluster, ClusterConfig};

fn bench_recompute(c: &mut Criterion) {
    let config = ClusterConfig {
        replication_factor: 3,
        num_tokens: 64,
        token_max: 1_000_000_000,
        eager_secondary: true,
        seed: 42,
    };

    c.bench_function("add_node_full_recompute_16_nodes", |b| {
        b.iter_batched(
            || {
                let mut cluster = Cluster::bootstrap(&config).expect("bootstrap");
                for _ in 0..13 {
                    cluster.add_node().expect("add node");
                }
                cluster
            },
            |mut cluster| {
                cluster.add_node().expect("add node");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
