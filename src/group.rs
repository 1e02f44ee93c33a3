// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Cryptographic group abstraction for commitments and share verification.
//!
//! The trait gives one interface over two backends:
//! - **Elliptic curve additive groups**: `exp(P, k) = k * P` (scalar
//!   multiplication) and `mul(P, Q) = P + Q` (point addition)
//! - **MODP multiplicative groups**: `exp(g, k) = g^k mod p` and
//!   `mul(a, b) = a * b mod p`
//!
//! so verifiable secret sharing can be written once and run over either.

use std::fmt;

use crate::bigint::BigInt;
use crate::curve::EllipticCurve;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::random::random_nonzero_below;

/// A cyclic group of prime order `n` with a distinguished generator `G`.
///
/// Scalars are always [`BigInt`] values taken modulo [`Group::order`].
pub trait Group: Send + Sync {
    /// Group element type (Point for EC, BigInt for MODP)
    type Element: Clone + Eq + fmt::Debug + fmt::Display + Send + Sync;

    /// Identity element (point at infinity for EC, 1 for MODP)
    fn identity(&self) -> Self::Element;

    /// Generator `G`. Fails if the group has not been given one.
    fn generator(&self) -> Result<Self::Element>;

    /// Order `n` of the generator.
    fn order(&self) -> Result<BigInt>;

    /// Group exponentiation/scalar multiplication: base^k (MODP) or k*base (EC)
    ///
    /// Used for:
    /// - Public key generation: y = G^u or u*G
    /// - Commitment computation: v_j = G^a_j or a_j*G
    fn exp(&self, base: &Self::Element, scalar: &BigInt) -> Result<Self::Element>;

    /// Group operation: A * B (MODP) or A + B (EC)
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element>;

    /// Membership test.
    fn is_element(&self, element: &Self::Element) -> Result<bool>;

    /// Random private key in `[1, n - 1]`.
    fn generate_private_key(&self) -> Result<BigInt> {
        random_nonzero_below(&self.order()?)
    }

    /// Public key `G^k` (MODP) or `k*G` (EC).
    fn generate_public_key(&self, private_key: &BigInt) -> Result<Self::Element> {
        self.exp(&self.generator()?, private_key)
    }
}

impl Group for EllipticCurve {
    type Element = Point;

    fn identity(&self) -> Point {
        EllipticCurve::identity(self)
    }

    fn generator(&self) -> Result<Point> {
        EllipticCurve::generator(self)
            .cloned()
            .ok_or_else(|| Error::InvalidArgument("curve has no generator".to_string()))
    }

    fn order(&self) -> Result<BigInt> {
        EllipticCurve::order(self)
            .cloned()
            .ok_or_else(|| Error::InvalidArgument("curve has no generator order".to_string()))
    }

    fn exp(&self, base: &Point, scalar: &BigInt) -> Result<Point> {
        self.multiply(base, scalar)
    }

    fn mul(&self, a: &Point, b: &Point) -> Result<Point> {
        self.add(a, b)
    }

    fn is_element(&self, element: &Point) -> Result<bool> {
        self.is_on_curve(element)
    }
}
