// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Prime-order subgroup of `Z_p*` for a safe prime `p = 2q + 1`.

use log::debug;

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::group::Group;
use crate::primality::is_prime;
use crate::util::Util;

/// The subgroup of quadratic residues modulo a safe prime.
///
/// # Group Parameters
/// - `p`: Safe prime (group modulus)
/// - `q`: Sophie Germain prime `(p - 1) / 2` (subgroup order)
/// - `g`: Generator of the order-`q` subgroup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModpGroup {
    p: BigInt,
    q: BigInt,
    g: BigInt,
}

impl ModpGroup {
    /// Validates `p` as a safe prime and `g` as an element of order `q`.
    ///
    /// ```rust
    /// use threshold_ecc::BigInt;
    /// use threshold_ecc::groups::ModpGroup;
    ///
    /// let group = ModpGroup::new(BigInt::from(23u64), BigInt::from(4u64)).unwrap();
    /// assert_eq!(group.subgroup_order(), &BigInt::from(11u64));
    /// ```
    pub fn new(p: BigInt, g: BigInt) -> Result<Self> {
        if !is_prime(&p)? {
            return Err(Error::NotPrime(p.to_hex()));
        }
        let q = p.checked_sub(&BigInt::one())?.checked_div(&BigInt::from(2u64))?;
        if !is_prime(&q)? {
            return Err(Error::InvalidArgument(format!(
                "{} is not a safe prime",
                p
            )));
        }
        let g = g.checked_rem(&p)?;
        if g.is_zero() || g.is_one() || !Util::pow_mod(&g, &q, &p)?.is_one() {
            return Err(Error::InvalidArgument(format!(
                "{} does not generate the order {} subgroup",
                g, q
            )));
        }
        debug!("modp group with p = {}, q = {}, g = {}", p, q, g);
        Ok(ModpGroup { p, q, g })
    }

    /// Get the safe prime modulus p
    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    /// Get the subgroup order q (Sophie Germain prime)
    pub fn subgroup_order(&self) -> &BigInt {
        &self.q
    }
}

impl Group for ModpGroup {
    type Element = BigInt;

    fn identity(&self) -> BigInt {
        BigInt::one()
    }

    fn generator(&self) -> Result<BigInt> {
        Ok(self.g.clone())
    }

    fn order(&self) -> Result<BigInt> {
        Ok(self.q.clone())
    }

    fn exp(&self, base: &BigInt, scalar: &BigInt) -> Result<BigInt> {
        Util::pow_mod(base, &scalar.checked_rem(&self.q)?, &self.p)
    }

    fn mul(&self, a: &BigInt, b: &BigInt) -> Result<BigInt> {
        (a * b).checked_rem(&self.p)
    }

    fn is_element(&self, element: &BigInt) -> Result<bool> {
        if element.is_zero() || *element >= self.p {
            return Ok(false);
        }
        Ok(Util::pow_mod(element, &self.q, &self.p)?.is_one())
    }
}
