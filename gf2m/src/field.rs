//! Binary extension field context.

use crate::{
    Error, Gf2mElement, Result,
    poly::{self, LIMB_BITS},
};
use alloc::{vec, vec::Vec};
use core::mem;

/// The field GF(2^m) defined by an irreducible polynomial `f(z)` of degree `m`.
///
/// This is the context every field operation runs against: it caches the
/// defining polynomial in limb form along with the sizes derived from it.
/// It is immutable once constructed and can be shared freely between threads.
///
/// Irreducibility of `f` is not checked. With a reducible `f` the quotient
/// ring is not a field, and [`Gf2mField::invert`] reports elements which
/// have no inverse by returning `None`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Gf2mField {
    /// Extension degree `m`.
    degree: usize,

    /// Defining polynomial, `limbs_for(m + 1)` limbs.
    modulus: Vec<u64>,

    /// Limbs per element, `limbs_for(m)`.
    limbs: usize,
}

impl Gf2mField {
    /// Largest supported extension degree `m`.
    pub const MAX_DEGREE: usize = 1 << 16;

    /// Create a field from the exponents of the nonzero terms of its defining
    /// polynomial, e.g. `&[163, 7, 6, 3, 0]` for `z^163 + z^7 + z^6 + z^3 + 1`.
    ///
    /// The polynomial must have a constant term and a degree between 1 and
    /// [`Gf2mField::MAX_DEGREE`], and no exponent may be repeated.
    pub fn new(exponents: &[usize]) -> Result<Self> {
        let degree = exponents.iter().copied().max().ok_or(Error)?;
        if degree == 0 || degree > Self::MAX_DEGREE || !exponents.contains(&0) {
            return Err(Error);
        }

        let mut modulus = vec![0u64; poly::limbs_for(degree + 1)];
        for &exponent in exponents {
            if poly::bit(&modulus, exponent) {
                return Err(Error);
            }
            modulus[exponent / LIMB_BITS] |= 1 << (exponent % LIMB_BITS);
        }

        Ok(Self {
            degree,
            modulus,
            limbs: poly::limbs_for(degree),
        })
    }

    /// Extension degree `m`.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Defining polynomial as little-endian limbs.
    pub fn modulus(&self) -> &[u64] {
        &self.modulus
    }

    /// Number of limbs in each element of this field.
    pub fn limbs(&self) -> usize {
        self.limbs
    }

    /// Size of a big-endian element encoding in bytes.
    pub fn byte_len(&self) -> usize {
        self.degree.div_ceil(8)
    }

    /// Zero element (additive identity).
    pub fn zero(&self) -> Gf2mElement {
        Gf2mElement {
            limbs: vec![0; self.limbs],
        }
    }

    /// Multiplicative identity.
    pub fn one(&self) -> Gf2mElement {
        let mut one = self.zero();
        one.limbs[0] = 1;
        one
    }

    /// Does `element` belong to this field?
    pub fn contains(&self, element: &Gf2mElement) -> bool {
        element.limbs.len() == self.limbs && element.degree().is_none_or(|d| d < self.degree)
    }

    /// Interpret the bits of `value` as polynomial coefficients.
    ///
    /// Returns an error if the polynomial has degree `m` or more.
    pub fn element_from_u64(&self, value: u64) -> Result<Gf2mElement> {
        self.element_from_be_bytes(&value.to_be_bytes())
    }

    /// Decode a big-endian bytestring, where the least significant bit of the
    /// last byte is the constant coefficient.
    ///
    /// Leading zero bytes are permitted. Returns an error if the encoded
    /// polynomial has degree `m` or more.
    pub fn element_from_be_bytes(&self, bytes: &[u8]) -> Result<Gf2mElement> {
        let mut element = self.zero();

        for (i, &byte) in bytes.iter().rev().enumerate() {
            if byte == 0 {
                continue;
            }

            let limb = element.limbs.get_mut(i / 8).ok_or(Error)?;
            *limb |= u64::from(byte) << ((i % 8) * 8);
        }

        if self.contains(&element) {
            Ok(element)
        } else {
            Err(Error)
        }
    }

    /// Encode `element` as [`Gf2mField::byte_len`] big-endian bytes.
    pub fn element_to_be_bytes(&self, element: &Gf2mElement) -> Vec<u8> {
        let mut bytes: Vec<u8> = element
            .limbs
            .iter()
            .rev()
            .flat_map(|limb| limb.to_be_bytes())
            .collect();

        let excess = bytes.len().saturating_sub(self.byte_len());
        bytes.drain(..excess);
        bytes
    }

    /// Compute `lhs + rhs`, which is also `lhs - rhs` in characteristic 2.
    pub fn add(&self, lhs: &Gf2mElement, rhs: &Gf2mElement) -> Gf2mElement {
        let mut sum = self.zero();

        for (i, limb) in sum.limbs.iter_mut().enumerate() {
            *limb = lhs.limbs.get(i).copied().unwrap_or_default()
                ^ rhs.limbs.get(i).copied().unwrap_or_default();
        }

        sum
    }

    /// Compute `lhs · rhs mod f(z)`.
    pub fn mul(&self, lhs: &Gf2mElement, rhs: &Gf2mElement) -> Gf2mElement {
        self.reduce(poly::clmul(&lhs.limbs, &rhs.limbs))
    }

    /// Compute `element² mod f(z)`.
    pub fn square(&self, element: &Gf2mElement) -> Gf2mElement {
        self.mul(element, element)
    }

    /// Compute the multiplicative inverse of `element` with the extended
    /// Euclidean algorithm for binary polynomials.
    ///
    /// Returns `None` if `element` is zero or shares a factor with `f(z)`.
    ///
    /// **This operation is variable time.**
    pub fn invert(&self, element: &Gf2mElement) -> Option<Gf2mElement> {
        let width = self.modulus.len();

        let mut u = element.limbs.clone();
        u.resize(width, 0);
        let mut v = self.modulus.clone();
        let mut g1 = vec![0u64; width];
        g1[0] = 1;
        let mut g2 = vec![0u64; width];

        // Invariants: a·g1 ≡ u and a·g2 ≡ v (mod f).
        loop {
            let deg_u = poly::degree(&u)?;
            if deg_u == 0 {
                break;
            }

            let mut deg_v = poly::degree(&v)?;
            let mut shift = deg_u;
            if deg_u < deg_v {
                mem::swap(&mut u, &mut v);
                mem::swap(&mut g1, &mut g2);
                mem::swap(&mut shift, &mut deg_v);
            }

            let shift = shift - deg_v;
            poly::xor_shifted(&mut u, &v, shift);
            poly::xor_shifted(&mut g1, &g2, shift);
        }

        Some(self.reduce(g1))
    }

    /// Compute `lhs / rhs`, or `None` if `rhs` has no inverse.
    pub fn div(&self, lhs: &Gf2mElement, rhs: &Gf2mElement) -> Option<Gf2mElement> {
        self.invert(rhs).map(|inverse| self.mul(lhs, &inverse))
    }

    /// Reduce an arbitrary-width polynomial modulo `f(z)`.
    fn reduce(&self, mut wide: Vec<u64>) -> Gf2mElement {
        if let Some(top) = poly::degree(&wide) {
            for i in (self.degree..=top).rev() {
                if poly::bit(&wide, i) {
                    poly::xor_shifted(&mut wide, &self.modulus, i - self.degree);
                }
            }
        }

        wide.resize(self.limbs, 0);
        Gf2mElement { limbs: wide }
    }
}

#[cfg(test)]
mod tests {
    use super::Gf2mField;
    use crate::Error;
    use alloc::vec;
    use hex_literal::hex;

    /// GF(2^8) with the AES polynomial `z^8 + z^4 + z^3 + z + 1`.
    fn aes_field() -> Gf2mField {
        Gf2mField::new(&[8, 4, 3, 1, 0]).unwrap()
    }

    /// GF(2^4) with `z^4 + z + 1`.
    fn small_field() -> Gf2mField {
        Gf2mField::new(&[4, 1, 0]).unwrap()
    }

    #[test]
    fn new_rejects_malformed_polynomials() {
        assert_eq!(Gf2mField::new(&[]), Err(Error));
        assert_eq!(Gf2mField::new(&[0]), Err(Error));
        assert_eq!(Gf2mField::new(&[8, 4, 3, 1]), Err(Error));
        assert_eq!(Gf2mField::new(&[8, 4, 4, 0]), Err(Error));
    }

    #[test]
    fn new_rejects_oversized_degree() {
        assert_eq!(Gf2mField::new(&[usize::MAX, 0]), Err(Error));
        assert_eq!(Gf2mField::new(&[1 << 40, 1, 0]), Err(Error));
        assert_eq!(
            Gf2mField::new(&[Gf2mField::MAX_DEGREE + 1, 0]),
            Err(Error)
        );

        let field = Gf2mField::new(&[Gf2mField::MAX_DEGREE, 0]).unwrap();
        assert_eq!(field.degree(), Gf2mField::MAX_DEGREE);
        assert_eq!(field.limbs(), Gf2mField::MAX_DEGREE / 64);
    }

    #[test]
    fn sizes() {
        let field = Gf2mField::new(&[163, 7, 6, 3, 0]).unwrap();
        assert_eq!(field.degree(), 163);
        assert_eq!(field.limbs(), 3);
        assert_eq!(field.byte_len(), 21);
        assert_eq!(field.modulus(), &[0xc9, 0, 1 << 35]);

        let field = Gf2mField::new(&[64, 4, 3, 1, 0]).unwrap();
        assert_eq!(field.limbs(), 1);
        assert_eq!(field.modulus().len(), 2);
    }

    #[test]
    fn aes_mul() {
        // FIPS 197, section 4.2: {57} • {83} = {c1}
        let field = aes_field();
        let a = field.element_from_u64(0x57).unwrap();
        let b = field.element_from_u64(0x83).unwrap();
        assert_eq!(field.mul(&a, &b), field.element_from_u64(0xc1).unwrap());
    }

    #[test]
    fn aes_invert() {
        // FIPS 197, section 5.1.1: {53}^-1 = {ca}
        let field = aes_field();
        let a = field.element_from_u64(0x53).unwrap();
        assert_eq!(
            field.invert(&a).unwrap(),
            field.element_from_u64(0xca).unwrap()
        );
    }

    #[test]
    fn small_field_inverse_table() {
        let field = small_field();
        let table = [
            (1, 1),
            (2, 9),
            (3, 14),
            (4, 13),
            (5, 11),
            (6, 7),
            (8, 15),
            (10, 12),
        ];

        for (x, inv) in table {
            let x = field.element_from_u64(x).unwrap();
            let inv = field.element_from_u64(inv).unwrap();
            assert_eq!(field.invert(&x).unwrap(), inv);
            assert_eq!(field.invert(&inv).unwrap(), x);
        }
    }

    #[test]
    fn zero_has_no_inverse() {
        let field = small_field();
        assert_eq!(field.invert(&field.zero()), None);
    }

    #[test]
    fn reducible_modulus_reports_non_units() {
        // z^4 + 1 = (z + 1)^4
        let field = Gf2mField::new(&[4, 0]).unwrap();
        let z_plus_one = field.element_from_u64(0b11).unwrap();
        assert_eq!(field.invert(&z_plus_one), None);

        let z = field.element_from_u64(0b10).unwrap();
        let z_inv = field.invert(&z).unwrap();
        assert_eq!(field.mul(&z, &z_inv), field.one());
    }

    #[test]
    fn decode_rejects_degree_m() {
        let field = small_field();
        assert_eq!(field.element_from_u64(0x10), Err(Error));
        assert!(field.element_from_u64(0x0f).is_ok());
        assert_eq!(field.element_from_be_bytes(&[1, 0, 0, 0, 0, 0, 0, 0, 0]), Err(Error));
    }

    #[test]
    fn encode_decode_k163_generator() {
        let field = Gf2mField::new(&[163, 7, 6, 3, 0]).unwrap();
        let bytes = hex!("02fe13c0537bbc11acaa07d793de4e6d5e5c94eee8");
        let x = field.element_from_be_bytes(&bytes).unwrap();
        assert_eq!(x.degree(), Some(161));
        assert_eq!(field.element_to_be_bytes(&x), bytes.to_vec());
    }

    #[test]
    fn mul_wraps_through_modulus() {
        // z^3 · z = z^4 = z + 1
        let field = small_field();
        let z3 = field.element_from_u64(0b1000).unwrap();
        let z = field.element_from_u64(0b10).unwrap();
        assert_eq!(field.mul(&z3, &z), field.element_from_u64(0b11).unwrap());
        assert_eq!(field.square(&z3).as_limbs(), vec![0b1100].as_slice());
    }

    #[test]
    fn add_is_xor() {
        let field = small_field();
        let a = field.element_from_u64(0b1010).unwrap();
        let b = field.element_from_u64(0b0110).unwrap();
        assert_eq!(field.add(&a, &b), field.element_from_u64(0b1100).unwrap());
        assert!(bool::from(field.add(&a, &a).is_zero()));
    }
}
