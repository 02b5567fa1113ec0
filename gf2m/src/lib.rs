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

mod dev;
mod element;
mod error;
mod field;
mod poly;

pub use crate::{
    element::Gf2mElement,
    error::{Error, Result},
    field::Gf2mField,
};
pub use subtle;
pub use zeroize;
