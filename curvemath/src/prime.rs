//! Short Weierstrass curves over prime fields.

use crate::{CurveArithmetic, Error, Point, Result, arithmetic::invertible};
use alloc::{vec, vec::Vec};
use num_bigint::BigUint;
use num_traits::Zero;

/// Curve `y² = x³ + a·x + b` over the integers modulo an odd prime `p`.
///
/// Coordinates are [`BigUint`]s in `[0, p)`. Every operation reduces its
/// intermediate values modulo `p`, so results stay in range whenever the
/// operands are.
///
/// Primality of `p` is not checked. Over a composite modulus a denominator
/// may share a factor with `p`, which is reported as
/// [`Error::NonInvertibleElement`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimeCurve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

impl PrimeCurve {
    /// Create a curve from its modulus and equation coefficients.
    ///
    /// `a` and `b` are reduced modulo `p`. Fails with
    /// [`Error::InvalidModulus`] if `p` is even or less than 3.
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Result<Self> {
        if p < BigUint::from(3u8) || !p.bit(0) {
            return Err(Error::InvalidModulus);
        }

        let a = a % &p;
        let b = b % &p;
        Ok(Self { p, a, b })
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Size of an encoded coordinate in bytes.
    pub fn byte_len(&self) -> usize {
        self.p.bits().div_ceil(8) as usize
    }

    /// `lhs - rhs mod p`.
    fn sub_mod(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        ((lhs % &self.p) + &self.p - (rhs % &self.p)) % &self.p
    }

    /// `lhs · rhs mod p`.
    fn mul_mod(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs * rhs) % &self.p
    }

    /// `lhs / rhs mod p`.
    fn div_mod(&self, lhs: &BigUint, rhs: &BigUint) -> Result<BigUint> {
        let inverse = invertible(rhs.modinv(&self.p))?;
        Ok(self.mul_mod(lhs, &inverse))
    }
}

impl CurveArithmetic for PrimeCurve {
    type Element = BigUint;

    fn negate(&self, point: &Point<BigUint>) -> Point<BigUint> {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => {
                Point::new(x.clone(), self.sub_mod(&BigUint::zero(), y))
            }
        }
    }

    fn double(&self, point: &Point<BigUint>) -> Result<Point<BigUint>> {
        let (x, y) = match point {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (x, y),
        };

        if (y % &self.p).is_zero() {
            return Ok(Point::Identity);
        }

        // λ = (3x² + a) / 2y
        let numerator = (self.mul_mod(x, x) * 3u32 + &self.a) % &self.p;
        let lambda = self.div_mod(&numerator, &((y * 2u32) % &self.p))?;

        // x' = λ² - 2x
        let x2 = self.sub_mod(&self.mul_mod(&lambda, &lambda), &((x * 2u32) % &self.p));

        // y' = λ(x - x') - y
        let y2 = self.sub_mod(&self.mul_mod(&lambda, &self.sub_mod(x, &x2)), y);

        Ok(Point::new(x2, y2))
    }

    fn add(&self, lhs: &Point<BigUint>, rhs: &Point<BigUint>) -> Result<Point<BigUint>> {
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (Point::Identity, _) => return Ok(rhs.clone()),
            (_, Point::Identity) => return Ok(lhs.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if self.equal(lhs, rhs) {
            return Err(Error::InvalidRoutingPrecondition);
        }

        if x1 == x2 && ((y1 + y2) % &self.p).is_zero() {
            return Ok(Point::Identity);
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = self.div_mod(&self.sub_mod(y2, y1), &self.sub_mod(x2, x1))?;

        // x' = λ² - x1 - x2
        let x3 = self.sub_mod(&self.sub_mod(&self.mul_mod(&lambda, &lambda), x1), x2);

        // y' = λ(x1 - x') - y1
        let y3 = self.sub_mod(&self.mul_mod(&lambda, &self.sub_mod(x1, &x3)), y1);

        Ok(Point::new(x3, y3))
    }

    fn contains(&self, point: &Point<BigUint>) -> bool {
        let (x, y) = match point {
            Point::Identity => return true,
            Point::Affine { x, y } => (x, y),
        };

        if x >= &self.p || y >= &self.p {
            return false;
        }

        // y² = x³ + ax + b
        let lhs = self.mul_mod(y, y);
        let x3 = self.mul_mod(&self.mul_mod(x, x), x);
        let rhs = (x3 + self.mul_mod(&self.a, x) + &self.b) % &self.p;
        lhs == rhs
    }

    fn coordinate_from_be_bytes(&self, bytes: &[u8]) -> Result<BigUint> {
        let element = BigUint::from_bytes_be(bytes);
        if element < self.p {
            Ok(element)
        } else {
            Err(Error::InvalidCoordinate)
        }
    }

    fn coordinate_to_be_bytes(&self, element: &BigUint) -> Vec<u8> {
        let digits = element.to_bytes_be();
        let len = self.byte_len().max(digits.len());
        let mut bytes = vec![0u8; len - digits.len()];
        bytes.extend_from_slice(&digits);
        bytes
    }
}
