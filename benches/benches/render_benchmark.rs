//! Rendering and batch-walk benchmarks.
//!
//! Run with: `cargo bench --package wickmark-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tempfile::TempDir;
use wickmark_bench::{TouchRunner, populate_tree, synthetic_sequence};
use wickmark_lib::{BatchRasterizer, CandleCatalog, ChartConfig, SvgWriter, ToolChain, compact, layout};

fn catalog_benchmark(c: &mut Criterion) {
    let writer = SvgWriter::new(ChartConfig::default());
    let catalog = CandleCatalog::global();

    c.bench_function("render_catalog", |b| {
        b.iter(|| {
            for (_, definition) in catalog.all() {
                black_box(writer.render_definition(definition).unwrap());
            }
        });
    });
}

fn sequence_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for count in [8, 64, 512] {
        let (config, ticks) = synthetic_sequence(count);
        let writer = SvgWriter::new(config.clone());
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("layout", count), &ticks, |b, ticks| {
            b.iter(|| layout(black_box(ticks), &config).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("render", count), &ticks, |b, ticks| {
            b.iter(|| writer.render(black_box(ticks)).unwrap());
        });

        let markup = writer.render(&ticks).unwrap();
        group.bench_with_input(BenchmarkId::new("compact", count), &markup, |b, markup| {
            b.iter(|| compact(black_box(markup)));
        });
    }

    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    let source = TempDir::new().unwrap();
    populate_tree(source.path(), 4, 25).unwrap();
    let rasterizer = BatchRasterizer::with_runner(ToolChain::new(120, 100), TouchRunner);

    let mut group = c.benchmark_group("batch");
    group.sample_size(20);
    group.throughput(Throughput::Elements(100));
    group.bench_function("walk_100_files", |b| {
        b.iter(|| {
            let output = TempDir::new().unwrap();
            rasterizer.run(source.path(), output.path()).unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, catalog_benchmark, sequence_benchmark, batch_benchmark);
criterion_main!(benches);
