//! Development-related functionality.

/// Write a series of `criterion`-based benchmarks for a binary field.
///
/// `$field` is a [`Gf2mField`](crate::Gf2mField); `$fe_a` and `$fe_b` are
/// elements of it.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $field:expr, $fe_a:expr, $fe_b:expr } => {
        fn $name(c: &mut ::criterion::Criterion) {
            let field = $field;
            let x = $fe_a;
            let y = $fe_b;

            let mut group = c.benchmark_group($desc);
            group.bench_function("add", |b| {
                b.iter(|| field.add(core::hint::black_box(&x), core::hint::black_box(&y)))
            });
            group.bench_function("mul", |b| {
                b.iter(|| field.mul(core::hint::black_box(&x), core::hint::black_box(&y)))
            });
            group.bench_function("square", |b| {
                b.iter(|| field.square(core::hint::black_box(&x)))
            });
            group.bench_function("invert", |b| {
                b.iter(|| field.invert(core::hint::black_box(&x)))
            });
            group.finish();
        }
    };
}

/// Implement all tests for a [`Gf2mField`](crate::Gf2mField) constructed by
/// `$field`.
#[macro_export]
macro_rules! test_binary_field {
    ($field:expr) => {
        $crate::test_field_identity!($field);
        $crate::test_field_invert!($field);
        $crate::test_field_modulus!($field);
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($field:expr) => {
        #[test]
        fn zero_is_additive_identity() {
            let field = $field;
            let zero = field.zero();
            let one = field.one();
            assert_eq!(field.add(&zero, &zero), zero);
            assert_eq!(field.add(&one, &zero), one);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let field = $field;
            let one = field.one();
            assert_eq!(field.mul(&one, &one), one);
        }

        #[test]
        fn every_element_is_its_own_negation() {
            let field = $field;
            let one = field.one();
            assert!(bool::from(field.add(&one, &one).is_zero()));
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($field:expr) => {
        #[test]
        fn invert() {
            let field = $field;
            let one = field.one();
            assert_eq!(field.invert(&one), Some(one.clone()));
            assert_eq!(field.invert(&field.zero()), None);

            // z + 1
            let three = field.element_from_u64(3).unwrap();
            let inv_three = field.invert(&three).unwrap();
            assert_eq!(field.mul(&three, &inv_three), one);
            assert_eq!(field.invert(&inv_three), Some(three));
        }
    };
}

/// Implement tests that multiplication wraps through the defining polynomial.
#[macro_export]
macro_rules! test_field_modulus {
    ($field:expr) => {
        #[test]
        fn z_to_the_m_is_reduced() {
            let field = $field;
            let z = field.element_from_u64(2).unwrap();

            let mut z_m = field.one();
            for _ in 0..field.degree() {
                z_m = field.mul(&z_m, &z);
            }

            // z^m ≡ f(z) - z^m
            let mut expected = field.modulus().to_vec();
            let top = field.degree();
            expected[top / 64] &= !(1u64 << (top % 64));
            expected.truncate(field.limbs());
            assert_eq!(z_m.as_limbs(), expected.as_slice());
        }
    };
}
