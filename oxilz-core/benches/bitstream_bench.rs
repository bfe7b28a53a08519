//! Benchmarks for bit packing across alphabets
//!
//! Measures pack and unpack throughput for the 6-bit and 15-bit alphabets
//! with code widths typical of a growing dictionary.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxilz_core::alphabet::{Alphabet, Base64, Utf16};
use oxilz_core::bitstream::{BitPacker, BitUnpacker};
use std::hint::black_box;

/// Pseudo-random (value, width) pairs with widths between 2 and 16 bits
fn tokens(count: usize) -> Vec<(u32, u8)> {
    let mut seed: u64 = 0x123456789ABCDEF0;
    (0..count)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let width = 2 + ((seed >> 60) as u8 % 15);
            let value = (seed >> 20) as u32 & ((1u32 << width) - 1);
            (value, width)
        })
        .collect()
}

fn pack<A: Alphabet>(tokens: &[(u32, u8)]) -> Vec<u16> {
    let mut packer = BitPacker::<A>::new();
    for &(value, width) in tokens {
        packer.write_bits(value, width);
    }
    packer.finish()
}

fn unpack<A: Alphabet>(data: &[u16], tokens: &[(u32, u8)]) -> u64 {
    let mut unpacker = BitUnpacker::<A>::new(data);
    tokens
        .iter()
        .map(|&(_, width)| u64::from(unpacker.read_bits(width)))
        .sum()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for &count in &[1_000usize, 10_000, 100_000] {
        let input = tokens(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("base64", count), &input, |b, input| {
            b.iter(|| pack::<Base64>(black_box(input)));
        });
        group.bench_with_input(BenchmarkId::new("utf16", count), &input, |b, input| {
            b.iter(|| pack::<Utf16>(black_box(input)));
        });
    }

    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack");

    for &count in &[1_000usize, 10_000, 100_000] {
        let input = tokens(count);
        let base64 = pack::<Base64>(&input);
        let utf16 = pack::<Utf16>(&input);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("base64", count), &base64, |b, data| {
            b.iter(|| unpack::<Base64>(black_box(data), &input));
        });
        group.bench_with_input(BenchmarkId::new("utf16", count), &utf16, |b, data| {
            b.iter(|| unpack::<Utf16>(black_box(data), &input));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack, bench_unpack);
criterion_main!(benches);
