//! Session benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use reldux_bench::{generate_rows, item_schema, populated, TABLE};
use reldux_value::Row;

/// Benchmark one batched insert of many rows.
fn bench_batch_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_insert");
    let schema = item_schema();

    for batch_size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            batch_size,
            |b, &batch_size| {
                let rows = generate_rows(batch_size);

                b.iter(|| {
                    let mut db = schema.db(schema.initial());
                    for row in &rows {
                        db.insert(TABLE, black_box(row.clone()));
                    }
                    black_box(db.run().unwrap());
                });
            },
        );
    }
    group.finish();
}

/// Benchmark a single-row update against a large snapshot.
fn bench_single_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_update");
    let schema = item_schema();

    for row_count in [100, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(row_count),
            row_count,
            |b, &count| {
                let state = populated(&schema, count);
                let mut rng = rand::thread_rng();

                b.iter(|| {
                    let id = rng.gen_range(0..count as i64);
                    let next = schema
                        .db(state.clone())
                        .after()
                        .update(TABLE, black_box(id), Row::new().with("flag", true))
                        .unwrap();
                    black_box(next);
                });
            },
        );
    }
    group.finish();
}

/// Benchmark update_all over every row.
fn bench_update_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_all");
    let schema = item_schema();

    for row_count in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(row_count),
            row_count,
            |b, &count| {
                let state = populated(&schema, count);

                b.iter(|| {
                    let next = schema
                        .db(state.clone())
                        .after()
                        .update_all(TABLE, Row::new().with("flag", false))
                        .unwrap();
                    black_box(next);
                });
            },
        );
    }
    group.finish();
}

/// Benchmark delete_where removing roughly half the rows.
fn bench_delete_where(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_where");
    let schema = item_schema();

    for row_count in [100, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(row_count),
            row_count,
            |b, &count| {
                let state = populated(&schema, count);

                b.iter(|| {
                    let next = schema
                        .db(state.clone())
                        .after()
                        .delete_where(TABLE, |row, _| row.bool("flag").unwrap_or(false))
                        .unwrap();
                    black_box(next);
                });
            },
        );
    }
    group.finish();
}

/// Benchmark session overhead (empty run).
fn bench_run_overhead(c: &mut Criterion) {
    c.bench_function("run_overhead", |b| {
        let schema = item_schema();
        let state = populated(&schema, 1000);

        b.iter(|| {
            black_box(schema.db(state.clone()).run().unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_batch_insert,
    bench_single_update,
    bench_update_all,
    bench_delete_where,
    bench_run_overhead,
);

criterion_main!(benches);
