use byte_table::ByteTable;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> Vec<u8> {
    format!("k{:016x}", n).into_bytes()
}

fn bench_put(c: &mut Criterion) {
    c.bench_function("byte_table_put_10k", |b| {
        let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
        b.iter_batched(
            || ByteTable::with_capacity(4096).unwrap(),
            |mut t| {
                for (i, k) in keys.iter().enumerate() {
                    t.put(k, &(i as u64).to_le_bytes()).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("byte_table_get_hit", |b| {
        let mut t = ByteTable::with_capacity(4096).unwrap();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            t.put(k, &(i as u64).to_le_bytes()).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.get(k).unwrap());
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("byte_table_get_miss", |b| {
        let mut t = ByteTable::with_capacity(4096).unwrap();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            t.put(&key(x), &(i as u64).to_le_bytes()).unwrap();
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in table
            let k = key(miss.next().unwrap());
            black_box(t.get(&k));
        })
    });
}

fn bench_chain_scan(c: &mut Criterion) {
    // Load factor ~256: lookups are dominated by chain traversal.
    c.bench_function("byte_table_get_loaded_chains", |b| {
        let mut t = ByteTable::with_capacity(16).unwrap();
        let keys: Vec<_> = lcg(13).take(4_096).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            t.put(k, &(i as u64).to_le_bytes()).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.get(k).unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_put,
    bench_get_hit,
    bench_get_miss,
    bench_chain_scan
);
criterion_main!(benches);
