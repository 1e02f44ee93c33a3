// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Shamir secret sharing over `Z_q`.
//!
//! A secret `s` is the constant term of a polynomial
//! `p(t) = s + a_1*t + ... + a_(k-1)*t^(k-1) mod q`; participant `i` holds
//! `p(i)`. Any `k` shares recover `s = p(0)` by Lagrange interpolation.

use std::collections::{BTreeMap, BTreeSet};

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::util::Util;

/// Evaluates `coefficients[0] + coefficients[1]*x + ... mod q` by Horner's rule.
///
/// ```rust
/// use threshold_ecc::BigInt;
/// use threshold_ecc::shamir::shamir_share;
///
/// let coefficients = [BigInt::from(12u64), BigInt::from(5u64)];
/// let share = shamir_share(&BigInt::from(2u64), &coefficients, &BigInt::from(31u64)).unwrap();
/// assert_eq!(share, BigInt::from(22u64));
/// ```
pub fn shamir_share(x: &BigInt, coefficients: &[BigInt], q: &BigInt) -> Result<BigInt> {
    let x = x.checked_rem(q)?;
    coefficients
        .iter()
        .rev()
        .try_fold(BigInt::zero(), |acc, coefficient| {
            (&(&acc * &x) + coefficient).checked_rem(q)
        })
}

/// Outcome of a reconstruction: the secret and, in the order the indices
/// were given, each Lagrange coefficient and weighted share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LagrangeResult {
    pub secret: BigInt,
    pub indices: Vec<u64>,
    /// `lambda_i = prod_{j != i} j / (j - i) mod q`
    pub lambdas: Vec<BigInt>,
    /// `omega_i = lambda_i * share_i mod q`
    pub omegas: Vec<BigInt>,
}

/// Reconstructs `p(0)` from the shares of the listed participants.
///
/// Only the shares named by `indices` take part. Fails with
/// [`Error::InvalidArgument`] when `indices` is empty, contains zero or a
/// duplicate, or names a participant without a share, and with
/// [`Error::NotInvertible`] when two indices collide modulo `q`.
pub fn lagrange_interpolation(
    shares: &BTreeMap<u64, BigInt>,
    indices: &[u64],
    q: &BigInt,
) -> Result<LagrangeResult> {
    if indices.is_empty() {
        return Err(Error::InvalidArgument(
            "at least one share index is required".to_string(),
        ));
    }
    let mut seen = BTreeSet::new();
    for &i in indices {
        if i == 0 {
            return Err(Error::InvalidArgument(
                "share index 0 would reveal the secret".to_string(),
            ));
        }
        if !seen.insert(i) {
            return Err(Error::InvalidArgument(format!("duplicate share index {}", i)));
        }
        if !shares.contains_key(&i) {
            return Err(Error::InvalidArgument(format!("no share for index {}", i)));
        }
    }

    let mut lambdas = Vec::with_capacity(indices.len());
    let mut omegas = Vec::with_capacity(indices.len());
    let mut secret = BigInt::zero();
    for &i in indices {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();
        for &j in indices.iter().filter(|&&j| j != i) {
            numerator = (&numerator * &BigInt::from(j)).checked_rem(q)?;
            let diff = if j > i {
                BigInt::from(j - i).checked_rem(q)?
            } else {
                // j - i < 0, taken as q - (i - j)
                let back = BigInt::from(i - j).checked_rem(q)?;
                q.checked_sub(&back)?.checked_rem(q)?
            };
            denominator = (&denominator * &diff).checked_rem(q)?;
        }
        let lambda = (&numerator * &Util::mod_inverse(&denominator, q)?).checked_rem(q)?;
        let share = shares
            .get(&i)
            .ok_or_else(|| Error::InvalidArgument(format!("no share for index {}", i)))?;
        let omega = (&lambda * share).checked_rem(q)?;
        secret = (&secret + &omega).checked_rem(q)?;
        lambdas.push(lambda);
        omegas.push(omega);
    }

    Ok(LagrangeResult {
        secret,
        indices: indices.to_vec(),
        lambdas,
        omegas,
    })
}
