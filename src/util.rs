// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use crate::bigint::BigInt;
use crate::error::{Error, Result};

pub struct Util {}

impl Util {
    /// Computes `base^exp mod modular` by square-and-multiply.
    ///
    /// `base` is reduced first; the bits of `exp` are walked from least to
    /// most significant. Fails with [`Error::DivisionByZero`] when the
    /// modulus is zero.
    pub fn pow_mod(base: &BigInt, exp: &BigInt, modular: &BigInt) -> Result<BigInt> {
        let mut result = BigInt::one().checked_rem(modular)?;
        let mut base = base.checked_rem(modular)?;
        let bits = exp.bit_length();
        for i in 0..bits {
            if exp.test_bit(i) {
                result = (&result * &base).checked_rem(modular)?;
            }
            if i + 1 < bits {
                base = (&base * &base).checked_rem(modular)?;
            }
        }
        Ok(result)
    }

    /// Greatest common divisor by the recursive Euclidean algorithm.
    pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
        match a.checked_rem(b) {
            Ok(r) => Util::gcd(b, &r),
            // b == 0
            Err(_) => a.clone(),
        }
    }

    /// Finds `g = gcd(a, modular)` and a coefficient `x` such that
    /// `a * x ≡ g (mod modular)`.
    ///
    /// This is the [extended Euclidean
    /// algorithm](https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm)
    /// with the Bézout coefficient of `a` tracked modulo `modular`, so no
    /// negative intermediate ever appears.
    pub fn extend_gcd(a: &BigInt, modular: &BigInt) -> Result<(BigInt, BigInt)> {
        let mut old_r = a.checked_rem(modular)?;
        let mut r = modular.clone();
        let mut old_s = BigInt::one().checked_rem(modular)?;
        let mut s = BigInt::zero();

        while !r.is_zero() {
            let (q, rem) = old_r.div_rem(&r)?;
            old_r = std::mem::replace(&mut r, rem);

            // old_s - q * s (mod modular)
            let qs = (&q * &s).checked_rem(modular)?;
            let next = (&old_s + &modular.checked_sub(&qs)?).checked_rem(modular)?;
            old_s = std::mem::replace(&mut s, next);
        }
        Ok((old_r, old_s))
    }

    /// Calculates the [modular multiplicative
    /// inverse](https://en.wikipedia.org/wiki/Modular_multiplicative_inverse) `x`
    /// of `a` such that `a * x ≡ 1 (mod modular)`, for any modulus coprime to
    /// `a`.
    ///
    /// Fails with [`Error::NotInvertible`] when `a ≡ 0` or
    /// `gcd(a, modular) != 1`, and with [`Error::InvalidArgument`] when the
    /// modulus is below 2.
    ///
    /// ```rust
    /// use threshold_ecc::BigInt;
    /// use threshold_ecc::util::Util;
    ///
    /// let inv = Util::mod_inverse(&BigInt::from(3u64), &BigInt::from(26u64)).unwrap();
    /// assert_eq!(inv, BigInt::from(9u64));
    /// assert!(Util::mod_inverse(&BigInt::from(4u64), &BigInt::from(32u64)).is_err());
    /// ```
    pub fn mod_inverse(a: &BigInt, modular: &BigInt) -> Result<BigInt> {
        if *modular < BigInt::from(2u64) {
            return Err(Error::InvalidArgument(format!(
                "modulus {} must be at least 2",
                modular
            )));
        }
        if a.checked_rem(modular)?.is_zero() {
            return Err(Error::NotInvertible(a.to_hex()));
        }
        let (g, x) = Util::extend_gcd(a, modular)?;
        if !g.is_one() {
            return Err(Error::NotInvertible(a.to_hex()));
        }
        Ok(x)
    }

    /// Inverse of `a` modulo a **prime** `p` via Fermat's little theorem,
    /// `a^(p-2) mod p`.
    ///
    /// The result is only meaningful when `p` is prime; this function does not
    /// check that. Callers without that guarantee must use
    /// [`Util::mod_inverse`].
    pub fn mod_inverse_prime(a: &BigInt, p: &BigInt) -> Result<BigInt> {
        let two = BigInt::from(2u64);
        if *p < two {
            return Err(Error::InvalidArgument(format!(
                "modulus {} must be at least 2",
                p
            )));
        }
        let reduced = a.checked_rem(p)?;
        if reduced.is_zero() {
            return Err(Error::NotInvertible(a.to_hex()));
        }
        Util::pow_mod(&reduced, &p.checked_sub(&two)?, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::{BigUint, RandBigInt};
    use num_integer::Integer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn big(n: u64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_pow_mod() {
        assert_eq!(Util::pow_mod(&big(4), &big(13), &big(497)).unwrap(), big(445));
        assert_eq!(Util::pow_mod(&big(43), &big(555), &big(7)).unwrap(), big(1));
        assert_eq!(Util::pow_mod(&big(5), &BigInt::zero(), &big(7)).unwrap(), big(1));
        assert_eq!(Util::pow_mod(&big(5), &big(3), &BigInt::one()).unwrap(), BigInt::zero());
        assert_eq!(
            Util::pow_mod(&big(5), &big(3), &BigInt::zero()),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_pow_mod_matches_num_bigint() {
        let mut rng = StdRng::from_seed([21u8; 32]);
        for _ in 0..10 {
            let b = rng.gen_biguint(96);
            let e = rng.gen_biguint(64);
            let m = rng.gen_biguint(80) + BigUint::from(2u32);
            let ours = Util::pow_mod(&BigInt::from(&b), &BigInt::from(&e), &BigInt::from(&m))
                .unwrap();
            assert_eq!(BigUint::from(&ours), b.modpow(&e, &m));
        }
    }

    #[test]
    fn test_gcd() {
        assert_eq!(Util::gcd(&big(48), &big(18)), big(6));
        assert_eq!(Util::gcd(&big(17), &big(5)), big(1));
        assert_eq!(Util::gcd(&big(0), &big(9)), big(9));
        assert_eq!(Util::gcd(&big(9), &big(0)), big(9));

        let mut rng = StdRng::from_seed([9u8; 32]);
        for _ in 0..10 {
            let a = rng.gen_biguint(120);
            let b = rng.gen_biguint(90);
            let ours = Util::gcd(&BigInt::from(&a), &BigInt::from(&b));
            assert_eq!(BigUint::from(&ours), a.gcd(&b));
        }
    }

    #[test]
    fn test_extend_gcd() {
        let (g, x) = Util::extend_gcd(&big(26), &big(3)).unwrap();
        assert_eq!(g, big(1));
        // 26 * 2 = 52 = 17 * 3 + 1
        assert_eq!(x, big(2));

        let (g, x) = Util::extend_gcd(&big(12), &big(18)).unwrap();
        assert_eq!(g, big(6));
        assert_eq!((&big(12) * &x).checked_rem(&big(18)).unwrap(), big(6));
    }

    #[test]
    fn test_mod_inverse() {
        // 3*inverse = 1 mod 26
        assert_eq!(Util::mod_inverse(&big(3), &big(26)).unwrap(), big(9));
        // 4*inverse = 1 mod 32 does not exist
        assert_eq!(
            Util::mod_inverse(&big(4), &big(32)),
            Err(Error::NotInvertible("0x04".to_string()))
        );
        assert!(Util::mod_inverse(&big(0), &big(7)).is_err());
        assert!(Util::mod_inverse(&big(14), &big(7)).is_err());
        assert!(Util::mod_inverse(&big(3), &big(1)).is_err());
        // reduces its input first
        assert_eq!(Util::mod_inverse(&big(29), &big(26)).unwrap(), big(9));
    }

    #[test]
    fn test_inverse_routes_agree_for_prime_modulus() {
        let p = big(1_000_003);
        for k in [1u64, 2, 3, 12345, 999_999, 1_000_002] {
            let euclid = Util::mod_inverse(&big(k), &p).unwrap();
            let fermat = Util::mod_inverse_prime(&big(k), &p).unwrap();
            assert_eq!(euclid, fermat);
            assert_eq!((&big(k) * &euclid).checked_rem(&p).unwrap(), big(1));
        }
        assert!(Util::mod_inverse_prime(&p, &p).is_err());
        // the error names the caller's value, not its residue
        assert_eq!(
            Util::mod_inverse_prime(&big(14), &big(7)),
            Err(Error::NotInvertible("0x0e".to_string()))
        );
    }
}
