// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use std::vec::Vec;

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::group::Group;
use crate::random::secure_random;
use crate::shamir::shamir_share;
use crate::vss;

/// Secret Shares on Polynomial, (k,n) threshold scheme
/// P(x) = a_0*x^0 + a_1*x^1 + a_2*x^2 + ... + a_(k-1)*x^(k-1) mod q
/// degree is k - 1
/// s = P(0) = a_0
/// s_i = P(i)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    pub coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Create null Polynomial instance
    pub fn new() -> Self {
        Polynomial {
            coefficients: Vec::new(),
        }
    }

    pub fn init_coefficients(&mut self, coefficients: Vec<BigInt>) {
        self.coefficients = coefficients;
    }

    /// Sets `a_0 = secret` and draws `a_1..=a_degree` uniformly from `[0, q-1]`.
    pub fn init(&mut self, degree: usize, secret: &BigInt, q: &BigInt) -> Result<()> {
        if secret >= q {
            return Err(Error::InvalidArgument(format!(
                "secret must be below the modulus {}",
                q
            )));
        }
        let high = q.checked_sub(&BigInt::one())?;
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(secret.clone());
        // [1,degree] not [1,degree)
        for _ in 1..=degree {
            coefficients.push(secure_random(&BigInt::zero(), &high)?);
        }
        self.init_coefficients(coefficients);
        Ok(())
    }

    pub fn random(degree: usize, secret: &BigInt, q: &BigInt) -> Result<Self> {
        let mut polynomial = Polynomial::new();
        polynomial.init(degree, secret, q)?;
        Ok(polynomial)
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Get P(x) mod q
    pub fn get_value(&self, x: &BigInt, q: &BigInt) -> Result<BigInt> {
        shamir_share(x, &self.coefficients, q)
    }

    /// Commitments `G^{a_j}` to every coefficient.
    pub fn commitments<G: Group>(&self, group: &G) -> Result<Vec<G::Element>> {
        vss::commitments(group, &self.coefficients)
    }
}
