//! Point arithmetic shared by prime and binary curves.

use crate::{Error, Point, Result, mul::ScalarMul};
use alloc::vec::Vec;
use core::{fmt::Debug, mem};
use num_bigint::BigUint;
use subtle::Choice;

mod sealed {
    /// Curves whose formulas are implemented by this crate.
    pub trait Sealed {}

    impl Sealed for crate::PrimeCurve {}
    impl Sealed for crate::BinaryCurve {}
}

/// Elliptic curve group law in affine coordinates.
///
/// Implemented by [`PrimeCurve`](crate::PrimeCurve) and
/// [`BinaryCurve`](crate::BinaryCurve). Curves are immutable parameter sets:
/// every operation borrows the curve and its operands and returns a fresh
/// point, so a single curve can be shared between threads.
///
/// None of the operations check that their operands lie on the curve; use
/// [`CurveArithmetic::contains`] for that.
pub trait CurveArithmetic: sealed::Sealed {
    /// Base field element type.
    type Element: Clone + Debug + Eq;

    /// Returns `lhs == rhs`, comparing coordinates without reduction.
    fn equal(&self, lhs: &Point<Self::Element>, rhs: &Point<Self::Element>) -> bool {
        lhs == rhs
    }

    /// Returns `-point`.
    fn negate(&self, point: &Point<Self::Element>) -> Point<Self::Element>;

    /// Returns `point + point`.
    ///
    /// Points of order two double to [`Point::Identity`].
    fn double(&self, point: &Point<Self::Element>) -> Result<Point<Self::Element>>;

    /// Returns `lhs + rhs` for distinct points.
    ///
    /// Fails with [`Error::InvalidRoutingPrecondition`] when `lhs == rhs`:
    /// the chord formula is undefined there and the caller must use
    /// [`CurveArithmetic::double`] instead.
    fn add(
        &self,
        lhs: &Point<Self::Element>,
        rhs: &Point<Self::Element>,
    ) -> Result<Point<Self::Element>>;

    /// Does `point` satisfy the curve equation?
    fn contains(&self, point: &Point<Self::Element>) -> bool;

    /// Decode a big-endian coordinate, rejecting values outside the base
    /// field.
    fn coordinate_from_be_bytes(&self, bytes: &[u8]) -> Result<Self::Element>;

    /// Encode a coordinate as a fixed-width big-endian bytestring.
    fn coordinate_to_be_bytes(&self, element: &Self::Element) -> Vec<u8>;

    /// Decode a finite point from big-endian coordinates.
    ///
    /// Only the range of each coordinate is checked, not curve membership.
    fn point_from_be_bytes(&self, x: &[u8], y: &[u8]) -> Result<Point<Self::Element>> {
        Ok(Point::new(
            self.coordinate_from_be_bytes(x)?,
            self.coordinate_from_be_bytes(y)?,
        ))
    }

    /// Swap `a` and `b` if `choice` is set.
    ///
    /// The default implementation branches on `choice`.
    fn conditional_swap(
        &self,
        a: &mut Point<Self::Element>,
        b: &mut Point<Self::Element>,
        choice: Choice,
    ) {
        if bool::from(choice) {
            mem::swap(a, b);
        }
    }

    /// Returns `k·point` using the default [`Ladder`](crate::Ladder).
    ///
    /// **This operation is variable time** with respect to `k`.
    fn mul(&self, point: &Point<Self::Element>, k: &BigUint) -> Result<Point<Self::Element>>
    where
        Self: Sized,
    {
        self.mul_with::<crate::Ladder>(point, k)
    }

    /// Returns `k·point` using the scalar multiplication strategy `M`.
    fn mul_with<M: ScalarMul>(
        &self,
        point: &Point<Self::Element>,
        k: &BigUint,
    ) -> Result<Point<Self::Element>>
    where
        Self: Sized,
    {
        M::mul(self, point, k)
    }
}

/// Map a failed inversion to [`Error::NonInvertibleElement`].
pub(crate) fn invertible<T>(inverse: Option<T>) -> Result<T> {
    inverse.ok_or(Error::NonInvertibleElement)
}
