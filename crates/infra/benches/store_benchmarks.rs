use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::Utc;
use serde_json::{Map, Value};
use stockroom_infra::{
    Dispatcher, InMemorySnapshotStore, JsonFileStore, PurchasingDefaults, RecordStore, Snapshot,
    SnapshotStore,
};
use stockroom_inventory::StockItem;

fn snapshot_with_stock(count: usize) -> Snapshot {
    let now = Utc::now();
    Snapshot {
        stock: (0..count)
            .map(|i| StockItem {
                sku: format!("SKU{i:05}"),
                available_qty: (i % 500) as u64,
                reserved_qty: (i % 50) as u64,
                location: format!("A{}", i % 20),
                updated_at: now,
            })
            .collect(),
        orders: Vec::new(),
        purchase_orders: Vec::new(),
    }
}

fn bench_snapshot_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_io");

    for item_count in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*item_count as u64));

        group.bench_with_input(
            BenchmarkId::new("save", item_count),
            item_count,
            |b, &count| {
                let dir = tempfile::tempdir().unwrap();
                let store = JsonFileStore::new(dir.path().join("data.json"));
                let snapshot = snapshot_with_stock(count);
                b.iter(|| store.save(black_box(&snapshot)).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("load", item_count),
            item_count,
            |b, &count| {
                let dir = tempfile::tempdir().unwrap();
                let store = JsonFileStore::new(dir.path().join("data.json"));
                store.save(&snapshot_with_stock(count)).unwrap();
                b.iter(|| black_box(store.load().unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_dispatch_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_reads");
    group.sample_size(1000);

    group.bench_function("check_stock_in_1000", |b| {
        let dispatcher = Dispatcher::new(RecordStore::new(
            InMemorySnapshotStore::with_snapshot(snapshot_with_stock(1000)),
            PurchasingDefaults::default(),
        ));
        let mut params = Map::new();
        params.insert("sku".to_string(), Value::String("SKU00500".to_string()));

        b.iter(|| {
            black_box(dispatcher.dispatch("check_stock", black_box(&params)).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_snapshot_io, bench_dispatch_reads);
criterion_main!(benches);
