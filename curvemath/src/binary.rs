//! Non-supersingular curves over binary extension fields.

use crate::{CurveArithmetic, Error, Point, Result, arithmetic::invertible};
use alloc::vec::Vec;
use gf2m::{Gf2mElement, Gf2mField};
use subtle::Choice;

/// Curve `y² + x·y = x³ + a·x² + b` over GF(2^m).
///
/// The [`Gf2mField`] holds the defining polynomial and is borrowed by every
/// field operation the formulas perform, so each product and inverse is
/// reduced as soon as it is computed.
///
/// The curve is non-singular iff `b ≠ 0`, which is not checked here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinaryCurve {
    field: Gf2mField,
    a: Gf2mElement,
    b: Gf2mElement,
}

impl BinaryCurve {
    /// Create a curve over `field` with equation coefficients `a` and `b`.
    ///
    /// Fails with [`Error::InvalidCoordinate`] if either coefficient is not
    /// an element of `field`.
    pub fn new(field: Gf2mField, a: Gf2mElement, b: Gf2mElement) -> Result<Self> {
        if !field.contains(&a) || !field.contains(&b) {
            return Err(Error::InvalidCoordinate);
        }

        Ok(Self { field, a, b })
    }

    /// Base field GF(2^m).
    pub fn field(&self) -> &Gf2mField {
        &self.field
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &Gf2mElement {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &Gf2mElement {
        &self.b
    }
}

impl CurveArithmetic for BinaryCurve {
    type Element = Gf2mElement;

    fn negate(&self, point: &Point<Gf2mElement>) -> Point<Gf2mElement> {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::new(x.clone(), self.field.add(x, y)),
        }
    }

    fn double(&self, point: &Point<Gf2mElement>) -> Result<Point<Gf2mElement>> {
        let f = &self.field;
        let (x, y) = match point {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (x, y),
        };

        // x = 0 is the unique point of order two
        if bool::from(x.is_zero()) {
            return Ok(Point::Identity);
        }

        // λ = x + y/x
        let lambda = f.add(x, &f.mul(y, &invertible(f.invert(x))?));

        // x' = λ² + λ + a
        let x2 = f.add(&f.add(&f.square(&lambda), &lambda), &self.a);

        // y' = x² + λx' + x'
        let y2 = f.add(&f.add(&f.square(x), &f.mul(&lambda, &x2)), &x2);

        Ok(Point::new(x2, y2))
    }

    fn add(
        &self,
        lhs: &Point<Gf2mElement>,
        rhs: &Point<Gf2mElement>,
    ) -> Result<Point<Gf2mElement>> {
        let f = &self.field;
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (Point::Identity, _) => return Ok(rhs.clone()),
            (_, Point::Identity) => return Ok(lhs.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if self.equal(lhs, rhs) {
            return Err(Error::InvalidRoutingPrecondition);
        }

        let x_sum = f.add(x1, x2);
        if bool::from(x_sum.is_zero()) && *y2 == f.add(x1, y1) {
            return Ok(Point::Identity);
        }

        // λ = (y1 + y2) / (x1 + x2)
        let lambda = invertible(f.div(&f.add(y1, y2), &x_sum))?;

        // x' = λ² + λ + x1 + x2 + a
        let x3 = f.add(
            &f.add(&f.add(&f.square(&lambda), &lambda), &x_sum),
            &self.a,
        );

        // y' = (x1 + x')λ + x' + y1
        let y3 = f.add(&f.add(&f.mul(&f.add(x1, &x3), &lambda), &x3), y1);

        Ok(Point::new(x3, y3))
    }

    fn contains(&self, point: &Point<Gf2mElement>) -> bool {
        let f = &self.field;
        let (x, y) = match point {
            Point::Identity => return true,
            Point::Affine { x, y } => (x, y),
        };

        if !f.contains(x) || !f.contains(y) {
            return false;
        }

        // y² + xy = x³ + ax² + b
        let x_sq = f.square(x);
        let lhs = f.add(&f.square(y), &f.mul(x, y));
        let rhs = f.add(&f.add(&f.mul(&x_sq, x), &f.mul(&self.a, &x_sq)), &self.b);
        lhs == rhs
    }

    fn coordinate_from_be_bytes(&self, bytes: &[u8]) -> Result<Gf2mElement> {
        Ok(self.field.element_from_be_bytes(bytes)?)
    }

    fn coordinate_to_be_bytes(&self, element: &Gf2mElement) -> Vec<u8> {
        self.field.element_to_be_bytes(element)
    }

    /// Swaps affine coordinates limb by limb without branching on `choice`.
    ///
    /// Falls back to a branching swap when either point is the identity.
    fn conditional_swap(
        &self,
        a: &mut Point<Gf2mElement>,
        b: &mut Point<Gf2mElement>,
        choice: Choice,
    ) {
        match (a, b) {
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                x1.conditional_swap(x2, choice);
                y1.conditional_swap(y2, choice);
            }
            (a, b) => {
                if bool::from(choice) {
                    core::mem::swap(a, b);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryCurve;
    use crate::{CurveArithmetic, Error, Point, UniformLadder};
    use gf2m::{Gf2mElement, Gf2mField};
    use num_bigint::BigUint;
    use subtle::Choice;

    /// y² + xy = x³ + z³x² + (z³ + 1) over GF(2^4) with f = z^4 + z + 1.
    ///
    /// The curve has 22 points and (1, 0) generates all of them.
    fn curve() -> BinaryCurve {
        let field = Gf2mField::new(&[4, 1, 0]).unwrap();
        let a = field.element_from_u64(8).unwrap();
        let b = field.element_from_u64(9).unwrap();
        BinaryCurve::new(field, a, b).unwrap()
    }

    fn element(value: u64) -> Gf2mElement {
        curve().field().element_from_u64(value).unwrap()
    }

    fn point(x: u64, y: u64) -> Point<Gf2mElement> {
        Point::new(element(x), element(y))
    }

    /// `k·(1, 0)` for `k = 1..=11`. `11·(1, 0)` has order two.
    const MULTIPLES: [(u64, u64); 11] = [
        (1, 0),
        (8, 1),
        (7, 11),
        (9, 15),
        (2, 15),
        (12, 0),
        (5, 5),
        (15, 11),
        (3, 12),
        (11, 2),
        (0, 11),
    ];

    #[test]
    fn new_rejects_coefficients_outside_field() {
        let field = Gf2mField::new(&[4, 1, 0]).unwrap();
        let wide = Gf2mField::new(&[8, 4, 3, 1, 0]).unwrap();
        let a = wide.element_from_u64(0x80).unwrap();
        assert_eq!(
            BinaryCurve::new(field.clone(), a, field.one()),
            Err(Error::InvalidCoordinate)
        );
    }

    #[test]
    fn every_multiple_is_on_curve() {
        let curve = curve();
        for (x, y) in MULTIPLES {
            assert!(curve.contains(&point(x, y)));
        }
        assert!(curve.contains(&Point::Identity));
        assert!(!curve.contains(&point(1, 2)));
    }

    #[test]
    fn double_generator() {
        let curve = curve();
        assert_eq!(curve.double(&point(1, 0)), Ok(point(8, 1)));
        assert_eq!(curve.double(&point(8, 1)), Ok(point(9, 15)));
    }

    #[test]
    fn repeated_addition() {
        let curve = curve();
        let g = point(1, 0);
        let mut p = curve.double(&g).unwrap();

        for &(x, y) in &MULTIPLES[1..] {
            assert_eq!(p, point(x, y));
            p = curve.add(&p, &g).unwrap();
        }

        // 12·G = -(10·G)
        assert_eq!(p, curve.negate(&point(11, 2)));
        assert_eq!(p, point(11, 9));
    }

    #[test]
    fn double_then_add_is_triple() {
        let curve = curve();
        let g = point(1, 0);
        let two_g = curve.double(&g).unwrap();
        assert_eq!(curve.add(&two_g, &g), Ok(point(7, 11)));
        assert_eq!(curve.add(&g, &two_g), Ok(point(7, 11)));
        assert_eq!(curve.mul(&g, &BigUint::from(3u32)), Ok(point(7, 11)));
    }

    #[test]
    fn add_same_point_is_rejected() {
        let curve = curve();
        let p = point(7, 11);
        assert_eq!(curve.add(&p, &p), Err(Error::InvalidRoutingPrecondition));
    }

    #[test]
    fn add_inverse_is_identity() {
        let curve = curve();
        let p = point(7, 11);
        let neg = curve.negate(&p);
        assert_eq!(neg, point(7, 12));
        assert_eq!(curve.add(&p, &neg), Ok(Point::Identity));
    }

    #[test]
    fn identity_rules() {
        let curve = curve();
        let g = point(1, 0);
        assert_eq!(curve.add(&Point::Identity, &g), Ok(g.clone()));
        assert_eq!(curve.add(&g, &Point::Identity), Ok(g));
        assert_eq!(curve.double(&Point::Identity), Ok(Point::Identity));
    }

    #[test]
    fn double_two_torsion_is_identity() {
        let curve = curve();
        let t = point(0, 11);
        assert_eq!(curve.negate(&t), t);
        assert_eq!(curve.double(&t), Ok(Point::Identity));
    }

    #[test]
    fn mul_reaches_group_order() {
        let curve = curve();
        let g = point(1, 0);
        for (k, &(x, y)) in MULTIPLES.iter().enumerate() {
            let k = BigUint::from(k + 1);
            assert_eq!(curve.mul(&g, &k), Ok(point(x, y)));
            assert_eq!(curve.mul_with::<UniformLadder>(&g, &k), Ok(point(x, y)));
        }
        assert_eq!(curve.mul(&g, &BigUint::from(22u32)), Ok(Point::Identity));
        assert_eq!(
            curve.mul_with::<UniformLadder>(&g, &BigUint::from(23u32)),
            Ok(g)
        );
    }

    #[test]
    fn conditional_swap_affine_and_identity() {
        let curve = curve();
        let mut p = point(1, 0);
        let mut q = point(8, 1);

        curve.conditional_swap(&mut p, &mut q, Choice::from(0));
        assert_eq!((&p, &q), (&point(1, 0), &point(8, 1)));

        curve.conditional_swap(&mut p, &mut q, Choice::from(1));
        assert_eq!((&p, &q), (&point(8, 1), &point(1, 0)));

        let mut o = Point::Identity;
        curve.conditional_swap(&mut p, &mut o, Choice::from(1));
        assert!(p.is_identity());
        assert_eq!(o, point(8, 1));
    }

    #[test]
    fn reducible_modulus_reports_non_invertible() {
        // z^4 + 1 = (z + 1)^4
        let field = Gf2mField::new(&[4, 0]).unwrap();
        let curve = BinaryCurve::new(field.clone(), field.zero(), field.one()).unwrap();
        let p = Point::new(
            field.element_from_u64(0b11).unwrap(),
            field.element_from_u64(1).unwrap(),
        );
        assert_eq!(curve.double(&p), Err(Error::NonInvertibleElement));
    }

    #[test]
    fn coordinate_encoding() {
        let curve = curve();
        assert_eq!(curve.coordinate_from_be_bytes(&[0x0f]), Ok(element(15)));
        assert_eq!(
            curve.coordinate_from_be_bytes(&[0x10]),
            Err(Error::InvalidCoordinate)
        );
        assert_eq!(curve.coordinate_to_be_bytes(&element(9)), [9]);
    }
}
