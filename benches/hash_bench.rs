//! Benchmarks for digestrs.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::io::Cursor;

use digestrs::{Crc32, HasherConfig, IncrementalHasher, StreamCount};

#[cfg(feature = "algo-blake3")]
use digestrs::Blake3;

fn bench_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");

    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("crc32_{}kb", size / 1024), &data, |b, data| {
            b.iter(|| {
                let mut hasher = IncrementalHasher::new(Crc32::new()).unwrap();
                black_box(hasher.hash_bytes(black_box(data)).unwrap())
            });
        });

        #[cfg(feature = "algo-blake3")]
        group.bench_with_input(format!("blake3_{}kb", size / 1024), &data, |b, data| {
            b.iter(|| {
                let mut hasher = IncrementalHasher::new(Blake3::new()).unwrap();
                black_box(hasher.hash_bytes(black_box(data)).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_sizes");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    // Update granularity: tiny chunks stress the carry path, large chunks
    // the stride walk.
    for chunk_size in [7usize, 64, 4096, 65536] {
        group.bench_with_input(
            format!("update_{}b", chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let mut hasher = IncrementalHasher::new(Crc32::new()).unwrap();
                    hasher.init();
                    for chunk in data.chunks(chunk_size) {
                        hasher.update(black_box(chunk)).unwrap();
                    }
                    black_box(hasher.finish().unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");
    let size = 4 * 1024 * 1024;
    let data: Vec<u8> = (0..size).map(|i| (i * 31 + 7) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    for window in [64 * 1024, 1024 * 1024] {
        group.bench_with_input(format!("window_{}kb", window / 1024), &window, |b, &window| {
            let config = HasherConfig::new(window).unwrap();
            b.iter(|| {
                let mut hasher =
                    IncrementalHasher::with_config(Crc32::new(), config).unwrap();
                let mut source = Cursor::new(&data);
                black_box(hasher.hash_stream(&mut source, StreamCount::All).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_buffer, bench_chunk_sizes, bench_stream);
criterion_main!(benches);
