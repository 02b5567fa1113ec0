//! Development-related functionality.

/// Implement group law tests for a [`NamedCurve`](crate::named::NamedCurve).
///
/// `$named` is an expression producing the curve, `$add_vectors` holds the
/// affine coordinates of `k·G` for `k = 1, 2, ...` and `$mul_vectors` holds
/// `(k, x, y)` triples with `k·G = (x, y)`.
#[macro_export]
macro_rules! test_curve_arithmetic {
    ($named:expr, $add_vectors:expr, $mul_vectors:expr) => {
        /// Assert that the provided point matches the given test vector.
        macro_rules! assert_point_eq {
            ($curve:expr, $actual:expr, $expected:expr) => {
                let (expected_x, expected_y) = $expected;
                let (actual_x, actual_y) = $actual.coordinates().expect("finite point");

                assert_eq!(
                    $curve.coordinate_to_be_bytes(actual_x).as_slice(),
                    &expected_x[..]
                );
                assert_eq!(
                    $curve.coordinate_to_be_bytes(actual_y).as_slice(),
                    &expected_y[..]
                );
            };
        }

        #[test]
        fn generator_matches_first_vector() {
            use $crate::CurveArithmetic;

            let named = $named;
            assert!(named.curve.contains(&named.generator));
            assert_point_eq!(named.curve, named.generator, $add_vectors[0]);

            let (x, y) = $add_vectors[0];
            assert_eq!(
                named.curve.point_from_be_bytes(&x, &y).unwrap(),
                named.generator
            );
        }

        #[test]
        fn test_vector_double_generator() {
            use $crate::CurveArithmetic;

            let named = $named;
            let doubled = named.curve.double(&named.generator).unwrap();
            assert_point_eq!(named.curve, doubled, $add_vectors[1]);
        }

        #[test]
        fn test_vector_repeated_add() {
            use $crate::CurveArithmetic;

            let named = $named;
            let curve = &named.curve;
            let generator = &named.generator;
            let mut p = curve.double(generator).unwrap();

            for i in 1..$add_vectors.len() {
                assert_point_eq!(curve, p, $add_vectors[i]);
                assert!(curve.contains(&p));
                p = curve.add(&p, generator).unwrap();
            }
        }

        #[test]
        fn add_rejects_equal_points() {
            use $crate::CurveArithmetic;

            let named = $named;
            assert_eq!(
                named.curve.add(&named.generator, &named.generator),
                Err($crate::Error::InvalidRoutingPrecondition)
            );
        }

        #[test]
        fn add_and_negate() {
            use $crate::CurveArithmetic;

            let named = $named;
            let curve = &named.curve;
            let generator = &named.generator;
            let doubled = curve.double(generator).unwrap();
            let neg = curve.negate(generator);

            assert!(curve.contains(&neg));
            assert_eq!(curve.add(generator, &neg), Ok($crate::Point::Identity));
            assert_eq!(curve.add(&doubled, &neg).as_ref(), Ok(generator));
        }

        #[test]
        fn test_vector_scalar_mult() {
            use $crate::CurveArithmetic;

            let named = $named;
            let curve = &named.curve;

            for (k, coords) in $add_vectors.iter().enumerate() {
                let k = $crate::BigUint::from(k + 1);
                let p = curve.mul(&named.generator, &k).unwrap();
                assert_point_eq!(curve, p, *coords);
            }

            for (k, x, y) in $mul_vectors.iter() {
                let k = $crate::BigUint::from_bytes_be(k);
                let p = curve.mul(&named.generator, &k).unwrap();
                assert_point_eq!(curve, p, (*x, *y));

                let q = curve
                    .mul_with::<$crate::UniformLadder>(&named.generator, &k)
                    .unwrap();
                assert_eq!(p, q);
            }
        }

        #[test]
        fn mul_by_order_is_identity() {
            use $crate::CurveArithmetic;

            let named = $named;
            let curve = &named.curve;
            let generator = &named.generator;
            let order = &named.order;

            assert_eq!(curve.mul(generator, order), Ok($crate::Point::Identity));
            assert_eq!(
                curve.mul(generator, &(order - 1u32)),
                Ok(curve.negate(generator))
            );
            assert_eq!(
                curve.mul(generator, &(order + 1u32)).as_ref(),
                Ok(generator)
            );
        }

        #[test]
        fn mul_by_zero_is_rejected() {
            use $crate::CurveArithmetic;

            let named = $named;
            assert_eq!(
                named.curve.mul(&named.generator, &$crate::BigUint::default()),
                Err($crate::Error::InvalidRoutingPrecondition)
            );
        }
    };
}
