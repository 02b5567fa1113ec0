//! Point arithmetic benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use curvemath::{
    BigUint, CurveArithmetic, UniformLadder,
    named::{self, NamedCurve},
};
use hex_literal::hex;
use std::hint::black_box;

fn test_scalar() -> BigUint {
    BigUint::from_bytes_be(&hex!(
        "AA5E28D6A97A2479A65527F7290311A3624D4CC0FA1578598EE3C2613BF99522"
    ))
}

fn bench_curve<'a, C, M>(group: &mut BenchmarkGroup<'a, M>, named: &NamedCurve<C>)
where
    C: CurveArithmetic,
    M: Measurement,
{
    let curve = &named.curve;
    let g = &named.generator;
    let two_g = curve.double(g).unwrap();
    let k = test_scalar();

    group.bench_function("double", |b| b.iter(|| curve.double(black_box(g))));
    group.bench_function("add", |b| {
        b.iter(|| curve.add(black_box(&two_g), black_box(g)))
    });
    group.bench_function("mul", |b| {
        b.iter(|| curve.mul(black_box(g), black_box(&k)))
    });
    group.bench_function("mul (uniform ladder)", |b| {
        b.iter(|| curve.mul_with::<UniformLadder>(black_box(g), black_box(&k)))
    });
}

fn bench_prime(c: &mut Criterion) {
    for name in ["secp256k1", "P-256"] {
        let named = named::prime_curve(name).unwrap();
        let mut group = c.benchmark_group(name);
        bench_curve(&mut group, &named);
        group.finish();
    }
}

fn bench_binary(c: &mut Criterion) {
    for name in ["K-233", "B-233"] {
        let named = named::binary_curve(name).unwrap();
        let mut group = c.benchmark_group(name);
        bench_curve(&mut group, &named);
        group.finish();
    }
}

criterion_group!(benches, bench_prime, bench_binary);
criterion_main!(benches);
