//! Benchmarks for packing and unpacking.

use packbits::{pack_to_vec, unpack, unpack_window, SourceLimit};

/// Returns a buffer with a mix of runs and literal regions.
fn get_large_array(items: usize) -> Vec<u8> {
    let mut input = Vec::new();
    let mut v: usize = 0;
    for i in 0..items {
        v += 3;
        if (i / 64) % 2 == 0 {
            input.push((i ^ v) as u8);
        } else {
            input.push((i / 100) as u8);
        }
    }
    input
}

fn pack_large_buffer() {
    let input = get_large_array(1_000_000);
    let packed = pack_to_vec(&input);
    black_box(packed.len());
}

fn unpack_large_buffer(packed: &[u8], output: &mut [u8]) {
    let limit = SourceLimit::Bounded(packed.len());
    let res = unpack(packed, limit, output);
    black_box(res.written);
}

fn unpack_tail_window(packed: &[u8], output: &mut [u8]) {
    let limit = SourceLimit::Bounded(packed.len());
    let written = unpack_window(packed, limit, 990_000, output);
    black_box(written);
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    let input = get_large_array(1_000_000);
    let packed = pack_to_vec(&input);
    let mut output = vec![0u8; input.len()];
    let mut window = vec![0u8; 1024];

    c.bench_function("pack_large_buffer", |b| b.iter(pack_large_buffer));
    c.bench_function("unpack_large_buffer", |b| {
        b.iter(|| unpack_large_buffer(&packed, &mut output))
    });
    c.bench_function("unpack_tail_window", |b| {
        b.iter(|| unpack_tail_window(&packed, &mut window))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
