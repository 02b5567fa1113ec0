#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod named;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

mod arithmetic;
mod binary;
mod dev;
mod error;
mod mul;
mod point;
mod prime;

pub use crate::{
    arithmetic::CurveArithmetic,
    binary::BinaryCurve,
    error::{Error, Result},
    mul::{Ladder, ScalarMul, UniformLadder},
    point::Point,
    prime::PrimeCurve,
};
pub use gf2m::{self, Gf2mElement, Gf2mField};
pub use num_bigint::{self, BigUint};
pub use subtle;
