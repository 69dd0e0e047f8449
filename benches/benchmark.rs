use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dsbox::AvlTree;
use dsbox::model::Container;
use dsbox::store::{CollectionKind, Registry};
use std::hint::black_box;

const TREE_SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Deterministic pseudo-random keys (xorshift), so runs are comparable.
fn keys(n: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

fn tree_insert_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("avl_tree");
    for &n in TREE_SIZES {
        let keys = keys(n);

        group.bench_with_input(BenchmarkId::new("insert_random", n), &keys, |b, keys| {
            b.iter(|| keys.iter().copied().collect::<AvlTree<u64>>());
        });

        group.bench_with_input(BenchmarkId::new("insert_sorted", n), &n, |b, &n| {
            b.iter(|| (0..n as u64).collect::<AvlTree<u64>>());
        });

        let full: AvlTree<u64> = keys.iter().copied().collect();
        group.bench_with_input(BenchmarkId::new("delete_all", n), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = full.clone();
                for key in keys {
                    tree.delete(key);
                }
                tree
            });
        });

        group.bench_with_input(BenchmarkId::new("contains", n), &keys, |b, keys| {
            b.iter(|| keys.iter().filter(|key| full.contains(*key)).count());
        });
    }
    group.finish();
}

fn filled_registry() -> Registry {
    let mut registry = Registry::new();
    for (i, kind) in CollectionKind::ALL.into_iter().enumerate() {
        for j in 0..10 {
            let container = match registry.create(&format!("{kind}_{i}_{j}"), kind) {
                Ok(collection) => collection.as_container_mut(),
                Err(err) => panic!("{err}"),
            };
            for value in keys(1_000) {
                container.restore(value.to_string());
            }
        }
    }
    registry
}

fn registry_persistence(c: &mut Criterion) {
    let registry = filled_registry();
    let text = registry.serialize();

    c.bench_function("serialize", |b| b.iter(|| black_box(&registry).serialize()));
    c.bench_function("deserialize", |b| {
        b.iter(|| {
            let mut restored = Registry::new();
            restored.deserialize(black_box(&text));
            restored
        });
    });
}

criterion_group!(trees, tree_insert_delete);
criterion_group! {
    name = persistence;
    config = Criterion::default().sample_size(10);
    targets = registry_persistence
}
criterion_main!(trees, persistence);
