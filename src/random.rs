// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Unbiased random integers in a closed range.
//!
//! The byte source is any `RngCore + CryptoRng`; the convenience functions use
//! `rand::thread_rng()`, which is a cryptographically secure generator seeded
//! from the operating system.

use log::trace;
use rand::{CryptoRng, RngCore};

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// Uniform random integer in `[low, high]` from the thread-local CSPRNG.
///
/// ```rust
/// use threshold_ecc::BigInt;
/// use threshold_ecc::random::secure_random;
///
/// let low = BigInt::from(10u64);
/// let high = BigInt::from(20u64);
/// let n = secure_random(&low, &high).unwrap();
/// assert!(n >= low && n <= high);
/// ```
pub fn secure_random(low: &BigInt, high: &BigInt) -> Result<BigInt> {
    let mut rng = rand::thread_rng();
    secure_random_with(&mut rng, low, high)
}

/// Uniform random integer in `[low, high]` drawn from `rng`.
///
/// Draws just enough bytes to cover `high - low + 1`, masks the unused top
/// bits and redraws until the sample falls inside the range. Fails with
/// [`Error::EmptyRange`] when `low >= high`.
pub fn secure_random_with<R>(rng: &mut R, low: &BigInt, high: &BigInt) -> Result<BigInt>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if low >= high {
        return Err(Error::EmptyRange);
    }
    let range = &high.checked_sub(low)? + &BigInt::one();
    let bits = range.bit_length();
    let len = (bits + 7) / 8;
    let extra_bits = len * 8 - bits;

    let mut buf = vec![0u8; len];
    loop {
        rng.fill_bytes(&mut buf);
        if extra_bits > 0 {
            buf[0] &= 0xff >> extra_bits;
        }
        let sample = BigInt::from_bytes(&buf)?;
        if sample < range {
            return Ok(low + &sample);
        }
        trace!("rejected sample {} for range {}", sample, range);
    }
}

/// Uniform random integer in `[1, q - 1]`, the usual choice for a private
/// scalar. Fails when `q < 3`.
pub fn random_nonzero_below(q: &BigInt) -> Result<BigInt> {
    let mut rng = rand::thread_rng();
    random_nonzero_below_with(&mut rng, q)
}

pub fn random_nonzero_below_with<R>(rng: &mut R, q: &BigInt) -> Result<BigInt>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if q.is_zero() {
        return Err(Error::EmptyRange);
    }
    let high = q.checked_sub(&BigInt::one())?;
    secure_random_with(rng, &BigInt::one(), &high)
}
