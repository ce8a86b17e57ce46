#![allow(unused)]
extern crate sfscope;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use sfscope::{render, sf::MAX_SECTIONS, SfFile};
use std::{hint::black_box, io::Write};

/// Build a valid SF file with the maximum number of sections.
fn build_max_file() -> Vec<u8> {
    let mut data = vec![b's', 0x06, 0x00, 0x32, 0x00, MAX_SECTIONS];
    for i in 0..u32::from(MAX_SECTIONS) {
        let mut name = [0_u8; 20];
        let label = format!("section_{i:02}");
        name[..label.len()].copy_from_slice(label.as_bytes());

        data.extend_from_slice(&name);
        data.extend_from_slice(&[23_u32, 60, 88][i as usize % 3].to_le_bytes());
        data.extend_from_slice(&(i * 0x100).to_le_bytes());
        data.extend_from_slice(&0x100_u32.to_le_bytes());
    }
    data
}

/// Benchmark the full pipeline from memory and from a memory-mapped file
fn bench_parse(c: &mut Criterion) {
    let data = build_max_file();

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("from_mem", |b| {
        b.iter(|| {
            let report = SfFile::from_mem(black_box(data.clone())).unwrap();
            black_box(report)
        });
    });

    let mut temp = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    temp.write_all(&data).expect("Failed to write temp file");
    group.bench_function("from_path", |b| {
        b.iter(|| {
            let report = SfFile::from_path(black_box(temp.path())).unwrap();
            black_box(report)
        });
    });

    group.bench_function("render", |b| {
        let outcome = SfFile::from_mem(data.clone());
        b.iter(|| black_box(render(black_box(&outcome))));
    });
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
