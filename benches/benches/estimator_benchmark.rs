//! Estimator, simulation service and store benchmarks.
//!
//! Run with: `cargo bench --package ranportal-bench`

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ranportal_bench::parameter_grid;
use ranportal_metrics::RanMetrics;
use ranportal_sim::SimulationService;
use ranportal_store::{ConfigurationStore, FileStore, MemoryStore};
use ranportal_types::{DuplexMode, RanConfiguration, RanParameters};
use tempfile::TempDir;

fn reference(mode: DuplexMode) -> RanParameters {
    RanParameters::new(3.5e9, 20e6, mode, 20.0).expect("valid reference parameters")
}

fn estimator_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimator");

    for mode in DuplexMode::ALL {
        let params = reference(mode);
        group.bench_with_input(BenchmarkId::new("estimate", mode), &params, |b, p| {
            b.iter(|| ranportal_estimate::estimate(black_box(p)));
        });
        group.bench_with_input(BenchmarkId::new("explain", mode), &params, |b, p| {
            b.iter(|| ranportal_estimate::explain(black_box(p)));
        });
    }

    let grid = parameter_grid();
    group.throughput(Throughput::Elements(grid.len() as u64));
    group.bench_function("grid", |b| {
        b.iter(|| {
            for params in &grid {
                black_box(ranportal_estimate::estimate(black_box(params)));
            }
        });
    });

    group.finish();
}

fn service_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let metrics = Arc::new(RanMetrics::new());
    let service = SimulationService::new(metrics.clone());
    let params = reference(DuplexMode::Tdd);

    c.bench_function("service/estimator_only", |b| {
        b.to_async(&runtime)
            .iter(|| async { black_box(service.simulate(black_box(&params)).await) });
    });

    c.bench_function("metrics/prometheus_export", |b| {
        b.iter(|| black_box(metrics.to_prometheus()));
    });
}

fn store_benchmark(c: &mut Criterion) {
    let params = reference(DuplexMode::Fdd);
    let result = ranportal_estimate::estimate(&params);

    let mut group = c.benchmark_group("store");

    let memory = MemoryStore::new();
    for _ in 0..100 {
        memory
            .insert(&RanConfiguration::new(params, result))
            .expect("insert");
    }
    group.bench_function("memory_list", |b| {
        b.iter(|| black_box(memory.list().expect("list")));
    });

    let dir = TempDir::new().expect("temp dir");
    let file = FileStore::new(dir.path().to_path_buf()).expect("file store");
    group.sample_size(20);
    group.bench_function("file_insert", |b| {
        b.iter(|| {
            file.insert(&RanConfiguration::new(params, result))
                .expect("insert");
        });
    });

    for _ in 0..100 {
        file.insert(&RanConfiguration::new(params, result))
            .expect("insert");
    }
    group.bench_function("file_list", |b| {
        b.iter(|| black_box(file.list().expect("list")));
    });

    group.finish();
}

criterion_group!(benches, estimator_benchmark, service_benchmark, store_benchmark);
criterion_main!(benches);
