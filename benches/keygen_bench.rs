use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;

use rsakit::rsa::arith::mod_exp;
use rsakit::rsa::keygen::generate_key_pair;
use rsakit::rsa::prime::generate_large_prime;

fn bench_mod_exp(c: &mut Criterion) {
    // Modulus-sized operands: 2^521 - 1 with a full-width exponent.
    let n = (BigUint::from(1u8) << 521u32) - 1u8;
    let exp = &n - 1u8;
    let base = BigUint::from(0xdead_beefu32);
    c.bench_function("mod_exp(521-bit)", |b| {
        b.iter(|| mod_exp(black_box(&base), black_box(&exp), black_box(&n)));
    });
}

// The original timing sweep ran 64..2048 bits; the checked-in bench keeps
// to the low end so a full run stays in the seconds range.
fn bench_generate_large_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_large_prime");
    group.sample_size(10);
    for bits in [64u64, 128, 256] {
        group.bench_function(format!("{} bits", bits), |b| {
            b.iter(|| generate_large_prime(black_box(bits), black_box(10)).unwrap());
        });
    }
    group.finish();
}

fn bench_generate_key_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_key_pair");
    group.sample_size(10);
    for bits in [64u64, 128] {
        group.bench_function(format!("{} bits", bits), |b| {
            b.iter(|| generate_key_pair(black_box(bits), black_box(10)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_mod_exp,
    bench_generate_large_prime,
    bench_generate_key_pair,
);
criterion_main!(benches);
