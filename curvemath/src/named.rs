//! Standard curves by name.
//!
//! Prime curves are the NIST curves from FIPS 186-4 §D.1.2 together with
//! secp256k1 from SEC 2. Binary curves are the NIST Koblitz and random curves
//! over GF(2^163) and GF(2^233) from FIPS 186-4 §D.1.3.
//!
//! Names are matched ASCII case-insensitively against both the NIST and the
//! SEC 2 spelling, e.g. `"P-256"`, `"P256"`, `"secp256r1"` or `"prime256v1"`.

use crate::{BinaryCurve, CurveArithmetic, Error, Point, PrimeCurve, Result};
use gf2m::Gf2mField;
use hex_literal::hex;
use num_bigint::BigUint;

/// A curve together with its standard base point and the order of the
/// subgroup that base point generates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedCurve<C: CurveArithmetic> {
    /// Canonical name of the curve.
    pub name: &'static str,

    /// Curve parameters.
    pub curve: C,

    /// Base point `G`.
    pub generator: Point<C::Element>,

    /// Order `n` of `G`.
    pub order: BigUint,
}

/// Names of every prime curve accepted by [`prime_curve`].
pub const PRIME_CURVE_NAMES: &[&str] = &[
    "P-192",
    "P-224",
    "P-256",
    "P-384",
    "P-521",
    "secp256k1",
];

/// Names of every binary curve accepted by [`binary_curve`].
pub const BINARY_CURVE_NAMES: &[&str] = &["K-163", "B-163", "K-233", "B-233"];

struct PrimeParams {
    name: &'static str,
    aliases: &'static [&'static str],
    p: &'static [u8],
    a: &'static [u8],
    b: &'static [u8],
    gx: &'static [u8],
    gy: &'static [u8],
    n: &'static [u8],
}

struct BinaryParams {
    name: &'static str,
    aliases: &'static [&'static str],
    /// Exponents of the nonzero terms of the defining polynomial.
    modulus: &'static [usize],
    a: &'static [u8],
    b: &'static [u8],
    gx: &'static [u8],
    gy: &'static [u8],
    n: &'static [u8],
}

const PRIME_CURVES: &[PrimeParams] = &[
    PrimeParams {
        name: "P-192",
        aliases: &["P192", "secp192r1", "prime192v1"],
        p: &hex!("fffffffffffffffffffffffffffffffeffffffffffffffff"),
        a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffc"),
        b: &hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
        gx: &hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
        gy: &hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
        n: &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
    },
    PrimeParams {
        name: "P-224",
        aliases: &["P224", "secp224r1"],
        p: &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
        a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
        b: &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
        gx: &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        gy: &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
        n: &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
    },
    PrimeParams {
        name: "P-256",
        aliases: &["P256", "secp256r1", "prime256v1"],
        p: &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        a: &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
        b: &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        gx: &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        gy: &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        n: &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
    },
    PrimeParams {
        name: "P-384",
        aliases: &["P384", "secp384r1"],
        p: &hex!(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe
             ffffffff0000000000000000ffffffff"
        ),
        a: &hex!(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe
             ffffffff0000000000000000fffffffc"
        ),
        b: &hex!(
            "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a
             c656398d8a2ed19d2a85c8edd3ec2aef"
        ),
        gx: &hex!(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38
             5502f25dbf55296c3a545e3872760ab7"
        ),
        gy: &hex!(
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0
             0a60b1ce1d7e819d7a431d7c90ea0e5f"
        ),
        n: &hex!(
            "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf
             581a0db248b0a77aecec196accc52973"
        ),
    },
    PrimeParams {
        name: "P-521",
        aliases: &["P521", "secp521r1"],
        p: &hex!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff
             ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff
             ffff"
        ),
        a: &hex!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff
             ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff
             fffc"
        ),
        b: &hex!(
            "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1
             09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50
             3f00"
        ),
        gx: &hex!(
            "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d
             3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5
             bd66"
        ),
        gy: &hex!(
            "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e
             662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1
             6650"
        ),
        n: &hex!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff
             fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138
             6409"
        ),
    },
    PrimeParams {
        name: "secp256k1",
        aliases: &["K-256", "K256"],
        p: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
        a: &hex!("00"),
        b: &hex!("07"),
        gx: &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        gy: &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        n: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
    },
];

const BINARY_CURVES: &[BinaryParams] = &[
    BinaryParams {
        name: "K-163",
        aliases: &["K163", "sect163k1"],
        modulus: &[163, 7, 6, 3, 0],
        a: &hex!("01"),
        b: &hex!("01"),
        gx: &hex!("02fe13c0537bbc11acaa07d793de4e6d5e5c94eee8"),
        gy: &hex!("0289070fb05d38ff58321f2e800536d538ccdaa3d9"),
        n: &hex!("04000000000000000000020108a2e0cc0d99f8a5ef"),
    },
    BinaryParams {
        name: "B-163",
        aliases: &["B163", "sect163r2"],
        modulus: &[163, 7, 6, 3, 0],
        a: &hex!("01"),
        b: &hex!("020a601907b8c953ca1481eb10512f78744a3205fd"),
        gx: &hex!("03f0eba16286a2d57ea0991168d4994637e8343e36"),
        gy: &hex!("00d51fbc6c71a0094fa2cdd545b11c5c0c797324f1"),
        n: &hex!("040000000000000000000292fe77e70c12a4234c33"),
    },
    BinaryParams {
        name: "K-233",
        aliases: &["K233", "sect233k1"],
        modulus: &[233, 74, 0],
        a: &hex!("00"),
        b: &hex!("01"),
        gx: &hex!("017232ba853a7e731af129f22ff4149563a419c26bf50a4c9d6eefad6126"),
        gy: &hex!("01db537dece819b7f70f555a67c427a8cd9bf18aeb9b56e0c11056fae6a3"),
        n: &hex!("8000000000000000000000000000069d5bb915bcd46efb1ad5f173abdf"),
    },
    BinaryParams {
        name: "B-233",
        aliases: &["B233", "sect233r1"],
        modulus: &[233, 74, 0],
        a: &hex!("01"),
        b: &hex!("0066647ede6c332c7f8c0923bb58213b333b20e9ce4281fe115f7d8f90ad"),
        gx: &hex!("00fac9dfcbac8313bb2139f1bb755fef65bc391f8b36f8f8eb7371fd558b"),
        gy: &hex!("01006a08a41903350678e58528bebf8a0beff867a7ca36716f7e01f81052"),
        n: &hex!("01000000000000000000000000000013e974e72f8a6922031d2603cfe0d7"),
    },
];

/// Look up a prime curve by name.
pub fn prime_curve(name: &str) -> Result<NamedCurve<PrimeCurve>> {
    let params = PRIME_CURVES
        .iter()
        .find(|params| matches_name(name, params.name, params.aliases))
        .ok_or(Error::UnknownCurveName)?;

    let curve = PrimeCurve::new(
        BigUint::from_bytes_be(params.p),
        BigUint::from_bytes_be(params.a),
        BigUint::from_bytes_be(params.b),
    )?;
    let generator = curve.point_from_be_bytes(params.gx, params.gy)?;

    Ok(NamedCurve {
        name: params.name,
        curve,
        generator,
        order: BigUint::from_bytes_be(params.n),
    })
}

/// Look up a binary curve by name.
pub fn binary_curve(name: &str) -> Result<NamedCurve<BinaryCurve>> {
    let params = BINARY_CURVES
        .iter()
        .find(|params| matches_name(name, params.name, params.aliases))
        .ok_or(Error::UnknownCurveName)?;

    let field = Gf2mField::new(params.modulus).map_err(|_| Error::InvalidModulus)?;
    let a = field.element_from_be_bytes(params.a)?;
    let b = field.element_from_be_bytes(params.b)?;
    let curve = BinaryCurve::new(field, a, b)?;
    let generator = curve.point_from_be_bytes(params.gx, params.gy)?;

    Ok(NamedCurve {
        name: params.name,
        curve,
        generator,
        order: BigUint::from_bytes_be(params.n),
    })
}

fn matches_name(name: &str, canonical: &str, aliases: &[&str]) -> bool {
    core::iter::once(&canonical)
        .chain(aliases)
        .any(|candidate| candidate.eq_ignore_ascii_case(name))
}
