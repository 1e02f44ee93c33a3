// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Feldman-style verifiable secret sharing.
//!
//! The dealer publishes `v_j = G^{a_j}` for every polynomial coefficient.
//! A share `sigma_i = p(i)` is then checked by
//! `G^{sigma_i} == prod_j v_j^{i^j}` without learning anything about the
//! other coefficients.

use std::collections::BTreeMap;

use log::warn;
use rayon::prelude::*;

use crate::bigint::BigInt;
use crate::error::Result;
use crate::group::Group;

/// Public commitments `v_j = G^{a_j}`, one per coefficient.
pub fn commitments<G: Group>(group: &G, coefficients: &[BigInt]) -> Result<Vec<G::Element>> {
    let generator = group.generator()?;
    coefficients
        .iter()
        .map(|coefficient| group.exp(&generator, coefficient))
        .collect()
}

/// Checks the share `sigma` of participant `id` against the commitments.
///
/// Fails with [`crate::Error::InvalidArgument`] when the group has no
/// generator or no generator order.
///
/// ```rust
/// use threshold_ecc::{vss, BigInt, EllipticCurve};
/// use threshold_ecc::shamir::shamir_share;
///
/// let mut curve = EllipticCurve::new(
///     BigInt::from(43u64),
///     BigInt::from(0u64),
///     BigInt::from(7u64),
/// )
/// .unwrap();
/// curve.find_generator().unwrap();
/// let q = curve.order().unwrap().clone();
///
/// let coefficients = [BigInt::from(9u64), BigInt::from(4u64)];
/// let v = vss::commitments(&curve, &coefficients).unwrap();
/// let id = BigInt::from(3u64);
/// let sigma = shamir_share(&id, &coefficients, &q).unwrap();
/// assert!(vss::verify(&v, &sigma, &id, &curve).unwrap());
/// ```
pub fn verify<G: Group>(
    commitments: &[G::Element],
    sigma: &BigInt,
    id: &BigInt,
    group: &G,
) -> Result<bool> {
    let order = group.order()?;
    let left = group.exp(&group.generator()?, sigma)?;

    let mut right = group.identity();
    let mut power = BigInt::one().checked_rem(&order)?;
    let id = id.checked_rem(&order)?;
    for v in commitments {
        right = group.mul(&right, &group.exp(v, &power)?)?;
        power = (&power * &id).checked_rem(&order)?;
    }
    Ok(left == right)
}

/// Verifies every share in parallel and returns the ids whose share does not
/// match the commitments, in ascending order.
pub fn verify_all<G: Group>(
    commitments: &[G::Element],
    shares: &BTreeMap<u64, BigInt>,
    group: &G,
) -> Result<Vec<u64>> {
    let results: Result<Vec<(u64, bool)>> = shares
        .par_iter()
        .map(|(&id, sigma)| -> Result<(u64, bool)> {
            Ok((id, verify(commitments, sigma, &BigInt::from(id), group)?))
        })
        .collect();

    let mut failed: Vec<u64> = results?
        .into_iter()
        .filter(|(_, valid)| !valid)
        .map(|(id, _)| id)
        .collect();
    failed.sort_unstable();
    if !failed.is_empty() {
        warn!("{} of {} shares failed verification: {:?}", failed.len(), shares.len(), failed);
    }
    Ok(failed)
}
