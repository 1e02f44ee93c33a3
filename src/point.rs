// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use std::fmt;

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// A point of a short-Weierstrass curve: either the point at infinity or an
/// affine pair reduced modulo the curve prime.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Point {
    Infinity,
    Affine { x: BigInt, y: BigInt },
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Point::Affine { x, y }
    }

    pub fn infinity() -> Self {
        Point::Infinity
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The x coordinate; [`Error::PointAtInfinity`] for the identity.
    pub fn x(&self) -> Result<&BigInt> {
        match self {
            Point::Affine { x, .. } => Ok(x),
            Point::Infinity => Err(Error::PointAtInfinity),
        }
    }

    /// The y coordinate; [`Error::PointAtInfinity`] for the identity.
    pub fn y(&self) -> Result<&BigInt> {
        match self {
            Point::Affine { y, .. } => Ok(y),
            Point::Infinity => Err(Error::PointAtInfinity),
        }
    }

    pub fn coordinates(&self) -> Result<(&BigInt, &BigInt)> {
        match self {
            Point::Affine { x, y } => Ok((x, y)),
            Point::Infinity => Err(Error::PointAtInfinity),
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::Infinity
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => f.write_str("infinity"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affine_coordinates() {
        let p = Point::new(BigInt::from(2u64), BigInt::from(12u64));
        assert!(!p.is_infinity());
        assert_eq!(p.x().unwrap(), &BigInt::from(2u64));
        assert_eq!(p.y().unwrap(), &BigInt::from(12u64));
        assert_eq!(p.to_string(), "(0x02, 0x0c)");
    }

    #[test]
    fn test_infinity_coordinates_are_a_logic_violation() {
        let o = Point::infinity();
        assert!(o.is_infinity());
        assert_eq!(o.x(), Err(Error::PointAtInfinity));
        assert_eq!(o.y(), Err(Error::PointAtInfinity));
        assert!(o.coordinates().is_err());
        assert_eq!(Point::default(), o);
        assert_eq!(o.to_string(), "infinity");
    }
}
