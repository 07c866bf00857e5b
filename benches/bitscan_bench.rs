//! Intrinsic vs portable scan benchmarks

use bitscan::scan::{self, portable};
use bitscan::SetBits;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const INPUTS: [(&str, u64); 3] = [
    ("bit37", 1 << 37),
    ("sparse", 0x8000_0000_0000_0081),
    ("dense", 0xFFFF_FFFF_FFFF_FFFF),
];

fn benchmark_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for (name, value) in INPUTS {
        group.bench_with_input(BenchmarkId::new("intrinsic", name), &value, |b, &v| {
            b.iter(|| {
                (
                    scan::count_trailing_zeros(black_box(v)),
                    scan::highest_set_bit_index(black_box(v)),
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("portable", name), &value, |b, &v| {
            b.iter(|| {
                (
                    portable::count_trailing_zeros(black_box(v)),
                    portable::highest_set_bit_index(black_box(v)),
                )
            });
        });
    }
    group.finish();
}

fn benchmark_set_bits(c: &mut Criterion) {
    c.bench_function("set_bits_sum", |b| {
        b.iter(|| SetBits::new(black_box(0x00FF_0000_0000_FF00)).sum::<u32>());
    });
}

criterion_group!(benches, benchmark_scans, benchmark_set_bits);
criterion_main!(benches);
