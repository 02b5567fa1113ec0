//! Error types.

use core::fmt;

/// Error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A denominator shares a factor with the modulus or defining polynomial.
    NonInvertibleElement,

    /// The operands fall outside the domain of the requested formula, e.g.
    /// adding a point to itself or multiplying by a zero scalar.
    InvalidRoutingPrecondition,

    /// No curve is known under the requested name.
    UnknownCurveName,

    /// An encoded coordinate is not an element of the curve's base field.
    InvalidCoordinate,

    /// The prime modulus or defining polynomial cannot define a field.
    InvalidModulus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::NonInvertibleElement => "field element is not invertible",
            Error::InvalidRoutingPrecondition => {
                "operands outside the domain of the point formula"
            }
            Error::UnknownCurveName => "unknown curve name",
            Error::InvalidCoordinate => "coordinate out of range for the base field",
            Error::InvalidModulus => "invalid field modulus",
        })
    }
}

impl From<gf2m::Error> for Error {
    fn from(_: gf2m::Error) -> Error {
        Error::InvalidCoordinate
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
