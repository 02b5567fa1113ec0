//! Affine points with an explicit identity.

/// Point on an elliptic curve in affine coordinates, or the point at infinity.
///
/// `E` is the base field element type of the curve the point belongs to. A
/// point carries no reference to its curve; it is only meaningful together
/// with the curve it was produced by.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Point<E> {
    /// Additive identity of the curve group (the point at infinity).
    Identity,

    /// Finite point `(x, y)`.
    Affine {
        /// x-coordinate
        x: E,
        /// y-coordinate
        y: E,
    },
}

impl<E> Point<E> {
    /// Create a finite point from its coordinates.
    pub const fn new(x: E, y: E) -> Self {
        Point::Affine { x, y }
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Borrow the affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&E, &E)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Affine x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&E> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Affine y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&E> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl<E> Default for Point<E> {
    fn default() -> Self {
        Point::Identity
    }
}

impl<E> From<(E, E)> for Point<E> {
    fn from((x, y): (E, E)) -> Self {
        Point::new(x, y)
    }
}
