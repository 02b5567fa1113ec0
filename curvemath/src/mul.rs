//! Scalar multiplication.
//!
//! Both strategies are two-register ladders: starting from `R0 = P` and
//! `R1 = 2P` they consume the scalar from the bit below its most significant
//! one, keeping `R1 = R0 + P` after every step. Each step is a single
//! addition of the two registers followed by a single doubling. The
//! registers differ by `P`, so for `P ≠ O` the addition never sees equal
//! operands. Either register may become the identity, e.g. `R1` once
//! `R0 = -P`; the identity rules of `add` and `double` absorb it.

use crate::{CurveArithmetic, Error, Point, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use subtle::Choice;

/// Strategy for computing `k·P` from the group law of a curve.
pub trait ScalarMul {
    /// Returns `k·point`.
    ///
    /// Fails with [`Error::InvalidRoutingPrecondition`] if `k` is zero.
    /// `k·Identity` is the identity for every nonzero `k`.
    fn mul<C: CurveArithmetic>(
        curve: &C,
        point: &Point<C::Element>,
        k: &BigUint,
    ) -> Result<Point<C::Element>>;
}

/// Ladder which picks the register to double by branching on each scalar bit.
///
/// **This strategy is variable time.** The operand order of every step
/// depends on the corresponding bit of `k`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ladder;

impl ScalarMul for Ladder {
    fn mul<C: CurveArithmetic>(
        curve: &C,
        point: &Point<C::Element>,
        k: &BigUint,
    ) -> Result<Point<C::Element>> {
        let Some(top) = highest_bit(point, k)? else {
            return Ok(Point::Identity);
        };

        let mut r0 = point.clone();
        let mut r1 = curve.double(point)?;

        for i in (0..top).rev() {
            if k.bit(i) {
                r0 = curve.add(&r1, &r0)?;
                r1 = curve.double(&r1)?;
            } else {
                r1 = curve.add(&r0, &r1)?;
                r0 = curve.double(&r0)?;
            }
        }

        Ok(r0)
    }
}

/// Ladder which performs the same addition and doubling on every bit,
/// selecting operands with conditional swaps instead of branches.
///
/// The sequence of group operations is independent of `k`. The swaps are
/// branch-free for binary curves when both registers are finite points;
/// prime-field arithmetic on `BigUint` is not constant time, so this only
/// removes the branch on the scalar bit itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformLadder;

impl ScalarMul for UniformLadder {
    fn mul<C: CurveArithmetic>(
        curve: &C,
        point: &Point<C::Element>,
        k: &BigUint,
    ) -> Result<Point<C::Element>> {
        let Some(top) = highest_bit(point, k)? else {
            return Ok(Point::Identity);
        };

        let mut r0 = point.clone();
        let mut r1 = curve.double(point)?;

        for i in (0..top).rev() {
            let swap = Choice::from(u8::from(k.bit(i)));
            curve.conditional_swap(&mut r0, &mut r1, swap);
            r1 = curve.add(&r0, &r1)?;
            r0 = curve.double(&r0)?;
            curve.conditional_swap(&mut r0, &mut r1, swap);
        }

        Ok(r0)
    }
}

/// Index of the most significant set bit of `k`, or `None` when the result is
/// the identity regardless of `k`.
fn highest_bit<E>(point: &Point<E>, k: &BigUint) -> Result<Option<u64>> {
    if k.is_zero() {
        return Err(Error::InvalidRoutingPrecondition);
    }

    if point.is_identity() {
        return Ok(None);
    }

    Ok(Some(k.bits() - 1))
}

#[cfg(test)]
mod tests {
    use super::{Ladder, ScalarMul, UniformLadder};
    use crate::{CurveArithmetic, Error, Point, PrimeCurve};
    use num_bigint::BigUint;

    /// y² = x³ + 2x + 2 over GF(17), a cyclic group of order 19.
    fn curve() -> PrimeCurve {
        PrimeCurve::new(17u32.into(), 2u32.into(), 2u32.into()).unwrap()
    }

    fn point(x: u32, y: u32) -> Point<BigUint> {
        Point::new(x.into(), y.into())
    }

    #[test]
    fn zero_scalar_is_rejected() {
        let curve = curve();
        let k = BigUint::default();
        assert_eq!(
            Ladder::mul(&curve, &point(5, 1), &k),
            Err(Error::InvalidRoutingPrecondition)
        );
        assert_eq!(
            UniformLadder::mul(&curve, &Point::Identity, &k),
            Err(Error::InvalidRoutingPrecondition)
        );
    }

    #[test]
    fn identity_is_absorbing() {
        let curve = curve();
        let k = BigUint::from(7u32);
        assert_eq!(Ladder::mul(&curve, &Point::Identity, &k), Ok(Point::Identity));
        assert_eq!(
            UniformLadder::mul(&curve, &Point::Identity, &k),
            Ok(Point::Identity)
        );
    }

    #[test]
    fn strategies_agree_on_every_multiple() {
        let curve = curve();
        let g = point(5, 1);

        for k in 1u32..=40 {
            let k = BigUint::from(k);
            let expected = curve.mul(&g, &k).unwrap();
            assert_eq!(curve.mul_with::<UniformLadder>(&g, &k), Ok(expected));
        }
    }

    #[test]
    fn ladder_wraps_at_group_order() {
        let curve = curve();
        let g = point(5, 1);
        assert_eq!(curve.mul(&g, &BigUint::from(19u32)), Ok(Point::Identity));
        assert_eq!(curve.mul(&g, &BigUint::from(20u32)), Ok(g.clone()));
        assert_eq!(
            curve.mul_with::<UniformLadder>(&g, &BigUint::from(38u32)),
            Ok(Point::Identity)
        );
    }

    #[test]
    fn register_passing_through_identity() {
        // Both scalars end with R0 = 18G = -G and R1 = 19G = O; for 37 the
        // last step adds and doubles with R1 already the identity.
        let curve = curve();
        let g = point(5, 1);
        let neg = curve.negate(&g);
        assert_eq!(neg, point(5, 16));

        for k in [18u32, 37] {
            let k = BigUint::from(k);
            assert_eq!(Ladder::mul(&curve, &g, &k), Ok(neg.clone()));
            assert_eq!(UniformLadder::mul(&curve, &g, &k), Ok(neg.clone()));
        }
    }
}
