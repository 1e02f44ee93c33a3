// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Miller–Rabin probabilistic primality test.

use rand::{CryptoRng, RngCore};

use crate::bigint::BigInt;
use crate::error::Result;
use crate::random::secure_random_with;
use crate::util::Util;

/// Rounds used by [`is_prime`]; a composite survives with probability at
/// most `4^-25`.
pub const DEFAULT_MILLER_RABIN_ROUNDS: usize = 25;

/// Miller–Rabin with [`DEFAULT_MILLER_RABIN_ROUNDS`] random witnesses.
///
/// ```rust
/// use threshold_ecc::BigInt;
/// use threshold_ecc::primality::is_prime;
///
/// assert!(is_prime(&BigInt::from(97u64)).unwrap());
/// assert!(!is_prime(&BigInt::from(100u64)).unwrap());
/// ```
pub fn is_prime(n: &BigInt) -> Result<bool> {
    is_prime_with_rounds(n, DEFAULT_MILLER_RABIN_ROUNDS)
}

pub fn is_prime_with_rounds(n: &BigInt, rounds: usize) -> Result<bool> {
    let mut rng = rand::thread_rng();
    is_prime_with(&mut rng, n, rounds)
}

/// Miller–Rabin drawing its witnesses from `rng`.
pub fn is_prime_with<R>(rng: &mut R, n: &BigInt, rounds: usize) -> Result<bool>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let one = BigInt::one();
    let two = BigInt::from(2u64);
    let three = BigInt::from(3u64);

    if *n <= one {
        return Ok(false);
    }
    if *n == two || *n == three {
        return Ok(true);
    }
    if n.is_even() {
        return Ok(false);
    }

    // n - 1 = 2^r * d with d odd
    let n_minus_one = n.checked_sub(&one)?;
    let n_minus_two = n.checked_sub(&two)?;
    let mut d = n_minus_one.clone();
    let mut r = 0usize;
    while d.is_even() {
        d = d.checked_div(&two)?;
        r += 1;
    }

    'witness: for _ in 0..rounds {
        let a = secure_random_with(rng, &two, &n_minus_two)?;
        let mut x = Util::pow_mod(&a, &d, n)?;
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..r {
            x = Util::pow_mod(&x, &two, n)?;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return Ok(false);
    }
    Ok(true)
}
