// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Short-Weierstrass elliptic curves `y^2 = x^3 + ax + b` over a prime field.
//!
//! The group law is written directly in terms of [`BigInt`] modular
//! arithmetic. Generator and order discovery are exhaustive searches and are
//! only usable for small demonstration fields; a real deployment pins a named
//! curve and installs its generator with [`EllipticCurve::set_generator`] and
//! [`EllipticCurve::set_order`].

use log::debug;

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::primality::is_prime;
use crate::util::Util;

/// An elliptic curve over `Z_p` together with an optional generator `G` and
/// the order `n` of that generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EllipticCurve {
    p: BigInt,
    a: BigInt,
    b: BigInt,
    identity: Point,
    generator: Option<Point>,
    order: Option<BigInt>,
}

impl EllipticCurve {
    /// Creates the curve `y^2 = x^3 + ax + b (mod p)`.
    ///
    /// Fails with [`Error::NotPrime`] if `p` is not prime. The coefficients
    /// are reduced modulo `p`. No generator or order is set.
    ///
    /// ```rust
    /// use threshold_ecc::{BigInt, EllipticCurve, Point};
    ///
    /// let curve = EllipticCurve::new(
    ///     BigInt::from(43u64),
    ///     BigInt::from(0u64),
    ///     BigInt::from(7u64),
    /// )
    /// .unwrap();
    /// let p = Point::new(BigInt::from(2u64), BigInt::from(12u64));
    /// assert!(curve.is_on_curve(&p).unwrap());
    /// ```
    pub fn new(p: BigInt, a: BigInt, b: BigInt) -> Result<Self> {
        if !is_prime(&p)? {
            return Err(Error::NotPrime(p.to_hex()));
        }
        let a = a.checked_rem(&p)?;
        let b = b.checked_rem(&p)?;
        Ok(EllipticCurve {
            p,
            a,
            b,
            identity: Point::Infinity,
            generator: None,
            order: None,
        })
    }

    pub fn p(&self) -> &BigInt {
        &self.p
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    pub fn identity(&self) -> Point {
        self.identity.clone()
    }

    pub fn generator(&self) -> Option<&Point> {
        self.generator.as_ref()
    }

    /// Order of the generator, when it has been discovered or assigned.
    pub fn order(&self) -> Option<&BigInt> {
        self.order.as_ref()
    }

    fn reduce(&self, v: &BigInt) -> Result<BigInt> {
        v.checked_rem(&self.p)
    }

    // (x - y) mod p without leaving the non-negative integers
    fn sub_mod(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        let y = self.reduce(y)?;
        self.reduce(&(x + &self.p.checked_sub(&y)?))
    }

    fn mul_mod(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        self.reduce(&(x * y))
    }

    /// True for the point at infinity; otherwise requires both coordinates
    /// to be reduced below `p` and checks `y^2 ≡ x^3 + ax + b (mod p)`.
    pub fn is_on_curve(&self, point: &Point) -> Result<bool> {
        let (x, y) = match point {
            Point::Infinity => return Ok(true),
            Point::Affine { x, y } => (x, y),
        };
        if *x >= self.p || *y >= self.p {
            return Ok(false);
        }
        let left = self.mul_mod(y, y)?;
        let right = self.reduce(&(&(&(x * x) * x) + &(&(&self.a * x) + &self.b)))?;
        Ok(left == right)
    }

    /// `k^(p-2) mod p`, the inverse of `k` in the field.
    ///
    /// Relies on `p` being prime, which [`EllipticCurve::new`] guarantees.
    /// Fails with [`Error::NotInvertible`] when `k ≡ 0 (mod p)`.
    pub fn inverse_mod(&self, k: &BigInt) -> Result<BigInt> {
        Util::mod_inverse_prime(k, &self.p)
    }

    /// Two finite points with equal coordinates. False if either is the
    /// point at infinity.
    pub fn coincide(&self, p: &Point, q: &Point) -> bool {
        match (p, q) {
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                x1 == x2 && y1 == y2
            }
            _ => false,
        }
    }

    /// The group law.
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point> {
        let (x1, y1) = match p {
            Point::Infinity => return Ok(q.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match q {
            Point::Infinity => return Ok(p.clone()),
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 && y1 != y2 {
            return Ok(self.identity());
        }

        let s = if self.coincide(p, q) {
            // tangent at a point of order two is vertical
            if self.reduce(y1)?.is_zero() {
                return Ok(self.identity());
            }
            let numerator = &(&BigInt::from(3u64) * &self.mul_mod(x1, x1)?) + &self.a;
            let denominator = self.inverse_mod(&(&BigInt::from(2u64) * y1))?;
            self.mul_mod(&numerator, &denominator)?
        } else {
            let numerator = self.sub_mod(y2, y1)?;
            let denominator = self.inverse_mod(&self.sub_mod(x2, x1)?)?;
            self.mul_mod(&numerator, &denominator)?
        };

        let x3 = self.sub_mod(&self.sub_mod(&self.mul_mod(&s, &s)?, x1)?, x2)?;
        let y3 = self.sub_mod(&self.mul_mod(&s, &self.sub_mod(x1, &x3)?)?, y1)?;
        Ok(Point::new(x3, y3))
    }

    /// `-P`, the reflection `(x, p - y)`.
    pub fn negate(&self, point: &Point) -> Result<Point> {
        match point {
            Point::Infinity => Ok(Point::Infinity),
            Point::Affine { x, y } => Ok(Point::new(x.clone(), self.sub_mod(&BigInt::zero(), y)?)),
        }
    }

    /// Scalar multiplication `k * P` by double-and-add.
    ///
    /// `k` is first reduced modulo the generator order when one has been
    /// established. Scalars are unsigned, so there is no negative case.
    pub fn multiply(&self, point: &Point, k: &BigInt) -> Result<Point> {
        if point.is_infinity() {
            return Ok(self.identity());
        }
        match &self.order {
            Some(order) => self.double_and_add(point, &k.checked_rem(order)?),
            None => self.double_and_add(point, k),
        }
    }

    fn double_and_add(&self, point: &Point, k: &BigInt) -> Result<Point> {
        let mut result = self.identity();
        let mut addend = point.clone();
        let bits = k.bit_length();
        for i in 0..bits {
            if k.test_bit(i) {
                result = self.add(&result, &addend)?;
            }
            if i + 1 < bits {
                addend = self.add(&addend, &addend)?;
            }
        }
        Ok(result)
    }

    /// Exhaustively searches `[0, p)^2` for the first curve point of prime
    /// order and installs it as the generator along with its order.
    ///
    /// Reference algorithm for small fields only: the search visits `p^2`
    /// candidates. Fails with [`Error::GeneratorNotFound`] if no point of
    /// prime order exists.
    pub fn find_generator(&mut self) -> Result<Point> {
        let one = BigInt::one();
        let mut x = BigInt::zero();
        while x < self.p {
            let rhs = self.reduce(&(&(&(&x * &x) * &x) + &(&(&self.a * &x) + &self.b)))?;
            let mut y = BigInt::zero();
            while y < self.p {
                if self.mul_mod(&y, &y)? == rhs {
                    let candidate = Point::new(x.clone(), y.clone());
                    let order = self.find_order(&candidate)?;
                    if is_prime(&order)? {
                        debug!("found generator {} of order {}", candidate, order);
                        self.generator = Some(candidate.clone());
                        self.order = Some(order);
                        return Ok(candidate);
                    }
                }
                y = &y + &one;
            }
            x = &x + &one;
        }
        Err(Error::GeneratorNotFound)
    }

    /// The smallest `n >= 1` with `n * P = O`, by repeated addition.
    ///
    /// Fails with [`Error::NotOnCurve`] for foreign points and with
    /// [`Error::OrderBoundExceeded`] once the count passes `p + 1`.
    pub fn find_order(&self, point: &Point) -> Result<BigInt> {
        if !self.is_on_curve(point)? {
            return Err(Error::NotOnCurve);
        }
        let one = BigInt::one();
        let bound = &self.p + &one;
        let mut order = one.clone();
        let mut q = point.clone();
        while !q.is_infinity() {
            q = self.add(&q, point)?;
            order = &order + &one;
            if order > bound {
                return Err(Error::OrderBoundExceeded(bound.to_hex()));
            }
        }
        Ok(order)
    }

    /// Whether `P` has a (nonzero) order, i.e. whether the order search
    /// terminates within its bound.
    pub fn is_generator(&self, point: &Point) -> Result<bool> {
        Ok(!self.find_order(point)?.is_zero())
    }

    /// Installs `G` as the generator after checking curve membership.
    ///
    /// Any previously established order is cleared; use
    /// [`EllipticCurve::set_order`] to establish the new one. Until then
    /// [`EllipticCurve::multiply`] does not reduce its scalar.
    pub fn set_generator(&mut self, generator: Point) -> Result<()> {
        if generator.is_infinity() {
            return Err(Error::InvalidArgument(
                "the point at infinity cannot be a generator".to_string(),
            ));
        }
        if !self.is_on_curve(&generator)? {
            return Err(Error::NotOnCurve);
        }
        debug!("generator set to {}", generator);
        self.generator = Some(generator);
        self.order = None;
        Ok(())
    }

    /// Records `n` as the generator order after checking `n * G = O` with an
    /// unreduced scalar.
    pub fn set_order(&mut self, order: BigInt) -> Result<()> {
        let generator = self.generator.as_ref().ok_or_else(|| {
            Error::InvalidArgument("curve has no generator to take the order of".to_string())
        })?;
        if order.is_zero() {
            return Err(Error::InvalidArgument("order must be nonzero".to_string()));
        }
        if !self.double_and_add(generator, &order)?.is_infinity() {
            return Err(Error::InvalidArgument(format!(
                "{} is not a multiple of the generator order",
                order
            )));
        }
        debug!("generator order set to {}", order);
        self.order = Some(order);
        Ok(())
    }

    /// Left fold of [`EllipticCurve::add`] starting from the identity.
    pub fn sum_points(&self, points: &[Point]) -> Result<Point> {
        points
            .iter()
            .try_fold(self.identity(), |acc, point| self.add(&acc, point))
    }
}
