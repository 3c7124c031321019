use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use bigmont::{BigInt, MontgomeryCtx};

fn fixture() -> (MontgomeryCtx, BigInt, BigInt) {
    let modulus = BigInt::from_hex(&"F".repeat(256), BigInt::BITS).unwrap();
    let ctx = MontgomeryCtx::new(modulus).unwrap();
    let x = BigInt::from_hex(&"A".repeat(256), BigInt::BITS).unwrap();
    let y = BigInt::from_hex(&"5".repeat(256), BigInt::BITS).unwrap();
    (ctx, x, y)
}

fn bench_mod_mul(c: &mut Criterion) {
    let (ctx, x, y) = fixture();
    c.bench_function("mod_mul_1024", |b| {
        b.iter(|| ctx.mod_mul(black_box(&x), black_box(&y)))
    });
}

fn bench_mod_pow(c: &mut Criterion) {
    let (ctx, x, _) = fixture();
    let exponent = BigInt::from_hex("10001", BigInt::BITS).unwrap();
    c.bench_function("mod_pow_f4_1024", |b| {
        b.iter(|| ctx.mod_pow(black_box(&x), black_box(&exponent)))
    });
}

fn bench_schoolbook_mul(c: &mut Criterion) {
    let (_, x, y) = fixture();
    c.bench_function("mul_1024", |b| b.iter(|| black_box(&x).mul(black_box(&y))));
}

criterion_group!(benches, bench_mod_mul, bench_mod_pow, bench_schoolbook_mul);
criterion_main!(benches);
