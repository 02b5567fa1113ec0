//! Binary field elements.

use crate::poly;
use alloc::vec::Vec;
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Element of GF(2^m): a polynomial over GF(2) of degree less than `m`.
///
/// Elements are created and combined through the [`Gf2mField`] they belong
/// to, which owns the defining polynomial. Every element produced by a field
/// operation is fully reduced and uses exactly [`Gf2mField::limbs`] limbs, so
/// two elements of the same field compare equal iff they are the same
/// polynomial.
///
/// [`Gf2mField`]: crate::Gf2mField
/// [`Gf2mField::limbs`]: crate::Gf2mField::limbs
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Gf2mElement {
    pub(crate) limbs: Vec<u64>,
}

impl Gf2mElement {
    /// Determine if this element is the zero polynomial.
    ///
    /// # Returns
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_zero(&self) -> Choice {
        self.limbs
            .iter()
            .fold(Choice::from(1), |acc, limb| acc & limb.ct_eq(&0))
    }

    /// Degree of the polynomial, or `None` for zero.
    pub fn degree(&self) -> Option<usize> {
        poly::degree(&self.limbs)
    }

    /// Coefficient of `z^i`.
    pub fn bit(&self, i: usize) -> bool {
        poly::bit(&self.limbs, i)
    }

    /// Borrow the little-endian limbs of this element.
    pub fn as_limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Swap `self` and `other` if `choice` is set, without branching on it.
    ///
    /// Both elements must come from the same field.
    pub fn conditional_swap(&mut self, other: &mut Self, choice: Choice) {
        debug_assert_eq!(self.limbs.len(), other.limbs.len());

        for (a, b) in self.limbs.iter_mut().zip(other.limbs.iter_mut()) {
            u64::conditional_swap(a, b, choice);
        }
    }
}

impl ConstantTimeEq for Gf2mElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.limbs.len() != other.limbs.len() {
            return Choice::from(0);
        }

        self.limbs.as_slice().ct_eq(other.limbs.as_slice())
    }
}

impl Zeroize for Gf2mElement {
    fn zeroize(&mut self) {
        self.limbs.as_mut_slice().zeroize();
    }
}

impl fmt::Debug for Gf2mElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf2mElement(0x{:x})", self)
    }
}

impl fmt::LowerHex for Gf2mElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Gf2mElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            write!(f, "{:016X}", limb)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Gf2mElement;
    use alloc::{format, vec};
    use subtle::{Choice, ConstantTimeEq};
    use zeroize::Zeroize;

    fn element(limbs: &[u64]) -> Gf2mElement {
        Gf2mElement {
            limbs: limbs.to_vec(),
        }
    }

    #[test]
    fn conditional_swap() {
        let mut a = element(&[1, 2]);
        let mut b = element(&[3, 4]);

        a.conditional_swap(&mut b, Choice::from(0));
        assert_eq!(a.limbs, vec![1, 2]);

        a.conditional_swap(&mut b, Choice::from(1));
        assert_eq!(a.limbs, vec![3, 4]);
        assert_eq!(b.limbs, vec![1, 2]);
    }

    #[test]
    fn ct_eq_requires_same_width() {
        assert!(bool::from(element(&[5, 0]).ct_eq(&element(&[5, 0]))));
        assert!(!bool::from(element(&[5, 0]).ct_eq(&element(&[5]))));
    }

    #[test]
    fn zeroize_keeps_width() {
        let mut a = element(&[7, 9]);
        a.zeroize();
        assert_eq!(a.limbs, vec![0, 0]);
        assert!(bool::from(a.is_zero()));
    }

    #[test]
    fn hex_formatting() {
        let a = element(&[0xab, 0x1]);
        assert_eq!(format!("{:x}", a), "000000000000000100000000000000ab");
        assert_eq!(format!("{:?}", a), "Gf2mElement(0x000000000000000100000000000000ab)");
    }
}
