//! Benchmarks for the segmentation pipeline

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use utter_core::{pack, Segmenter};

/// Generate test text of roughly `size_kb` kilobytes
fn generate_text(size_kb: usize) -> String {
    let base_text = "Dr. Smith arrived at 10:01! Did he? Yes, he said: hello (again), world. ";
    let target_size = size_kb * 1024;
    let repeat_count = target_size / base_text.len() + 1;
    base_text.repeat(repeat_count)
}

fn bench_segment_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_by_size");
    let segmenter = Segmenter::new(100).unwrap();

    for size_kb in [1, 10, 100] {
        let text = generate_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size_kb}KB")),
            &text,
            |b, text| b.iter(|| segmenter.segment(black_box(text))),
        );
    }

    group.finish();
}

fn bench_max_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_by_max_size");
    let text = generate_text(10);

    for max_size in [10, 50, 100, 200] {
        let segmenter = Segmenter::new(max_size).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(max_size), &text, |b, text| {
            b.iter(|| segmenter.segment(black_box(text)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let segmenter = Segmenter::new(100).unwrap();
    let texts: Vec<String> = (0..64).map(|_| generate_text(4)).collect();

    c.bench_function("segment_batch_64x4KB", |b| {
        b.iter(|| segmenter.segment_batch(black_box(&texts)))
    });
}

fn bench_pack(c: &mut Criterion) {
    let text = "lorem ipsum dolor sit amet ".repeat(400);
    c.bench_function("pack_10KB", |b| b.iter(|| pack(black_box(&text), " ", 100)));
}

criterion_group!(benches, bench_segment_by_size, bench_max_size, bench_batch, bench_pack);
criterion_main!(benches);
