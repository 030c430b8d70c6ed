//! Benchmarks for huffpack compression and decompression throughput.
//!
//! Covers data patterns from incompressible (uniform random) to highly
//! skewed (few distinct symbols).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huffpack::{compress, decompress};
use std::io::Cursor;

/// Generate random (incompressible) data
fn generate_random_data(size: usize, seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state = seed;
    for _ in 0..size {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        data.push((state & 0xFF) as u8);
    }
    data
}

/// Generate repetitive (highly compressible) data
fn generate_repetitive_data(size: usize) -> Vec<u8> {
    let pattern = b"ABCDABCDABCDABCD";
    pattern.iter().cycle().take(size).copied().collect()
}

/// Generate English-like text with a skewed symbol distribution
fn generate_text_data(size: usize) -> Vec<u8> {
    let sentence = b"the quick brown fox jumps over the lazy dog. ";
    sentence.iter().cycle().take(size).copied().collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for size in [16 * 1024, 256 * 1024, 1024 * 1024] {
        let datasets = [
            ("random", generate_random_data(size, 0x5EED)),
            ("repetitive", generate_repetitive_data(size)),
            ("text", generate_text_data(size)),
        ];

        for (name, data) in datasets {
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| {
                    let mut out = Vec::with_capacity(data.len());
                    compress(Cursor::new(data.as_slice()), &mut out).unwrap();
                    out
                })
            });
        }
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    for size in [16 * 1024, 256 * 1024, 1024 * 1024] {
        let datasets = [
            ("random", generate_random_data(size, 0x5EED)),
            ("repetitive", generate_repetitive_data(size)),
            ("text", generate_text_data(size)),
        ];

        for (name, data) in datasets {
            let mut compressed = Vec::new();
            compress(Cursor::new(data.as_slice()), &mut compressed).unwrap();

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &compressed, |b, compressed| {
                b.iter(|| {
                    let mut out = Vec::with_capacity(size);
                    decompress(compressed.as_slice(), &mut out).unwrap();
                    out
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
