//! Polynomials over GF(2) stored as little-endian `u64` limbs: bit `i` of the
//! limb slice is the coefficient of `z^i`.

use alloc::{vec, vec::Vec};

pub(crate) const LIMB_BITS: usize = u64::BITS as usize;

/// Number of limbs needed to store `bits` coefficients.
pub(crate) const fn limbs_for(bits: usize) -> usize {
    bits.div_ceil(LIMB_BITS)
}

/// Degree of the polynomial, or `None` for the zero polynomial.
pub(crate) fn degree(limbs: &[u64]) -> Option<usize> {
    limbs
        .iter()
        .enumerate()
        .rev()
        .find(|(_, limb)| **limb != 0)
        .map(|(i, limb)| i * LIMB_BITS + (LIMB_BITS - 1 - limb.leading_zeros() as usize))
}

/// Coefficient of `z^i`.
pub(crate) fn bit(limbs: &[u64], i: usize) -> bool {
    limbs
        .get(i / LIMB_BITS)
        .is_some_and(|limb| (limb >> (i % LIMB_BITS)) & 1 == 1)
}

/// `acc += rhs · z^shift`.
///
/// Coefficients which land beyond the end of `acc` are discarded, so callers
/// size `acc` for the largest degree they expect.
pub(crate) fn xor_shifted(acc: &mut [u64], rhs: &[u64], shift: usize) {
    let limb_shift = shift / LIMB_BITS;
    let bit_shift = shift % LIMB_BITS;

    for (i, &limb) in rhs.iter().enumerate() {
        if limb == 0 {
            continue;
        }

        let j = i + limb_shift;
        if let Some(lo) = acc.get_mut(j) {
            *lo ^= limb << bit_shift;
        }
        if bit_shift != 0 {
            if let Some(hi) = acc.get_mut(j + 1) {
                *hi ^= limb >> (LIMB_BITS - bit_shift);
            }
        }
    }
}

/// Carry-less product of two polynomials, without reduction.
pub(crate) fn clmul(lhs: &[u64], rhs: &[u64]) -> Vec<u64> {
    let mut product = vec![0u64; lhs.len() + rhs.len()];

    for (i, &limb) in rhs.iter().enumerate() {
        for j in 0..LIMB_BITS {
            if (limb >> j) & 1 == 1 {
                xor_shifted(&mut product, lhs, i * LIMB_BITS + j);
            }
        }
    }

    product
}
