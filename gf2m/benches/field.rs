//! GF(2^m) field arithmetic benchmarks

use criterion::{criterion_group, criterion_main};
use gf2m::{Gf2mField, bench_field};
use hex_literal::hex;

fn f163() -> Gf2mField {
    Gf2mField::new(&[163, 7, 6, 3, 0]).unwrap()
}

bench_field!(
    bench_f163,
    "GF(2^163)",
    f163(),
    f163()
        .element_from_be_bytes(&hex!("02fe13c0537bbc11acaa07d793de4e6d5e5c94eee8"))
        .unwrap(),
    f163()
        .element_from_be_bytes(&hex!("0289070fb05d38ff58321f2e800536d538ccdaa3d9"))
        .unwrap()
);

criterion_group!(benches, bench_f163);
criterion_main!(benches);
