// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use std::ops::{Add, AddAssign, Mul, MulAssign};

use num_traits::identities::{One, Zero};

use super::BigInt;
use crate::error::{Error, Result};

impl BigInt {
    /// `self - rhs`, failing with [`Error::Underflow`] when `rhs > self`.
    pub fn checked_sub(&self, rhs: &BigInt) -> Result<BigInt> {
        if self < rhs {
            return Err(Error::Underflow);
        }
        if rhs.is_zero() {
            return Ok(self.clone());
        }

        let mut out = Vec::with_capacity(self.bytes.len());
        let mut borrow = 0i16;
        let mut j = rhs.bytes.len();
        for &byte in self.bytes.iter().rev() {
            let sub = if j > 0 {
                j -= 1;
                rhs.bytes[j] as i16
            } else {
                0
            };
            let mut diff = byte as i16 - sub - borrow;
            if diff < 0 {
                diff += 256;
                borrow = 1;
            } else {
                borrow = 0;
            }
            out.push(diff as u8);
        }
        out.reverse();
        Ok(BigInt::from_vec(out))
    }

    /// Quotient of binary long division; fails on a zero divisor.
    ///
    /// The dividend's bits are consumed from most to least significant. The
    /// running remainder is doubled with the next bit appended, and whenever
    /// it reaches the divisor the divisor is subtracted and the matching
    /// quotient bit is set.
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self < divisor {
            return Ok(BigInt::zero());
        }
        if self == divisor {
            return Ok(BigInt::one());
        }
        if divisor.is_one() {
            return Ok(self.clone());
        }

        let total_bits = self.bit_length();
        let mut quotient = vec![0u8; self.bytes.len()];
        let mut remainder = BigInt::zero();
        for i in (0..total_bits).rev() {
            remainder = remainder.double_with_bit(self.test_bit(i));
            if remainder >= *divisor {
                remainder = remainder.checked_sub(divisor)?;
                let idx = quotient.len() - 1 - i / 8;
                quotient[idx] |= 1 << (i % 8);
            }
        }
        Ok(BigInt::from_vec(quotient))
    }

    /// `self - (self / divisor) * divisor`; fails on a zero divisor.
    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        let quotient = self.checked_div(divisor)?;
        self.checked_sub(&(&quotient * divisor))
    }

    /// Quotient and remainder of the same division.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let quotient = self.checked_div(divisor)?;
        let remainder = self.checked_sub(&(&quotient * divisor))?;
        Ok((quotient, remainder))
    }

    /// `self -= rhs`; on failure `self` is left untouched.
    pub fn checked_sub_assign(&mut self, rhs: &BigInt) -> Result<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    /// `self /= rhs`; on failure `self` is left untouched.
    pub fn checked_div_assign(&mut self, rhs: &BigInt) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    /// `self %= rhs`; on failure `self` is left untouched.
    pub fn checked_rem_assign(&mut self, rhs: &BigInt) -> Result<()> {
        *self = self.checked_rem(rhs)?;
        Ok(())
    }

    // 2 * self + bit
    fn double_with_bit(&self, bit: bool) -> BigInt {
        let mut out = Vec::with_capacity(self.bytes.len() + 1);
        let mut carry = bit as u8;
        for &byte in self.bytes.iter().rev() {
            out.push((byte << 1) | carry);
            carry = byte >> 7;
        }
        out.push(carry);
        out.reverse();
        BigInt::from_vec(out)
    }
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, rhs: &'b BigInt) -> BigInt {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }

        let mut out = Vec::with_capacity(self.bytes.len().max(rhs.bytes.len()) + 1);
        let mut i = self.bytes.len();
        let mut j = rhs.bytes.len();
        let mut carry = 0u16;
        while i > 0 || j > 0 || carry != 0 {
            let a = if i > 0 {
                i -= 1;
                self.bytes[i] as u16
            } else {
                0
            };
            let b = if j > 0 {
                j -= 1;
                rhs.bytes[j] as u16
            } else {
                0
            };
            let sum = a + b + carry;
            carry = sum >> 8;
            out.push(sum as u8);
        }
        out.reverse();
        BigInt::from_vec(out)
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Schoolbook multiplication into a buffer of `len(a) + len(b)` bytes.
    fn mul(self, rhs: &'b BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        if rhs.is_one() {
            return self.clone();
        }
        if self.is_one() {
            return rhs.clone();
        }

        let n = self.bytes.len() + rhs.bytes.len();
        let mut acc = vec![0u8; n];
        for (i, &a) in self.bytes.iter().rev().enumerate() {
            let mut carry = 0u32;
            for (j, &b) in rhs.bytes.iter().rev().enumerate() {
                let pos = n - 1 - (i + j);
                let product = a as u32 * b as u32 + acc[pos] as u32 + carry;
                acc[pos] = product as u8;
                carry = product >> 8;
            }
            let mut pos = n - 1 - (i + rhs.bytes.len());
            while carry != 0 {
                let sum = acc[pos] as u32 + carry;
                acc[pos] = sum as u8;
                carry = sum >> 8;
                if pos == 0 {
                    break;
                }
                pos -= 1;
            }
        }
        BigInt::from_vec(acc)
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &'a BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Mul, mul);

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

impl AddAssign<BigInt> for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        *self = &*self + &rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

impl MulAssign<BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self = &*self * &rhs;
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::zero()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::{BigUint, RandBigInt};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn big(n: u64) -> BigInt {
        BigInt::from(n)
    }

    fn random_pair(rng: &mut StdRng, bits: usize) -> (BigUint, BigUint) {
        (rng.gen_biguint(bits), rng.gen_biguint(bits / 2 + 1))
    }

    #[test]
    fn test_add() {
        assert_eq!(big(0xff) + big(1), big(0x100));
        assert_eq!(big(0xffff_ffff) + big(0xffff_ffff), big(0x1_ffff_fffe));
        assert_eq!(&big(5) + &BigInt::zero(), big(5));
        assert_eq!(BigInt::zero() + big(5), big(5));
        assert_eq!(big(3) + big(4), big(4) + big(3));
        assert_eq!((big(3) + big(4)) + big(5), big(3) + (big(4) + big(5)));
    }

    #[test]
    fn test_sub() {
        assert_eq!(big(0x100).checked_sub(&big(1)).unwrap(), big(0xff));
        assert_eq!(big(0x10000).checked_sub(&big(0xffff)).unwrap(), big(1));
        assert_eq!(big(42).checked_sub(&big(42)).unwrap(), BigInt::zero());
        assert_eq!(big(1).checked_sub(&big(2)), Err(Error::Underflow));
    }

    #[test]
    fn test_mul() {
        assert_eq!(big(0xff) * big(0xff), big(0xfe01));
        assert_eq!(big(123_456_789) * big(987_654_321), big(121_932_631_112_635_269));
        assert_eq!(big(77) * BigInt::one(), big(77));
        assert_eq!(BigInt::one() * big(77), big(77));
        assert_eq!(big(77) * BigInt::zero(), BigInt::zero());
    }

    #[test]
    fn test_div_rem() {
        let nine = BigInt::from_hex("0x09").unwrap();
        let two = BigInt::from_hex("0x02").unwrap();
        assert_eq!(nine.checked_div(&two).unwrap(), BigInt::from_hex("0x04").unwrap());
        assert_eq!(nine.checked_rem(&two).unwrap(), BigInt::from_hex("0x01").unwrap());
        assert_eq!(big(3).checked_div(&big(7)).unwrap(), BigInt::zero());
        assert_eq!(big(7).checked_div(&big(7)).unwrap(), BigInt::one());
        assert_eq!(big(7).checked_div(&BigInt::one()).unwrap(), big(7));
        assert_eq!(big(1000).div_rem(&big(7)).unwrap(), (big(142), big(6)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(big(9).checked_div(&BigInt::zero()), Err(Error::DivisionByZero));
        assert_eq!(big(9).checked_rem(&BigInt::zero()), Err(Error::DivisionByZero));
        assert_eq!(BigInt::zero().checked_div(&BigInt::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_compound_assignment() {
        let mut n = big(10);
        n += big(5);
        assert_eq!(n, big(15));
        n *= &big(4);
        assert_eq!(n, big(60));
        n.checked_sub_assign(&big(18)).unwrap();
        assert_eq!(n, big(42));
        n.checked_div_assign(&big(5)).unwrap();
        assert_eq!(n, big(8));
        n.checked_rem_assign(&big(5)).unwrap();
        assert_eq!(n, big(3));

        assert!(n.checked_sub_assign(&big(4)).is_err());
        assert!(n.checked_div_assign(&BigInt::zero()).is_err());
        assert_eq!(n, big(3));
    }

    #[test]
    fn test_identities() {
        let mut rng = StdRng::from_seed([7u8; 32]);
        for _ in 0..50 {
            let (a, b) = random_pair(&mut rng, 160);
            let a = BigInt::from(&a);
            let b = BigInt::from(&b);
            assert_eq!(&a + &BigInt::zero(), a);
            assert_eq!(&a * &BigInt::one(), a);
            assert_eq!(&a * &BigInt::zero(), BigInt::zero());
            let (hi, lo) = if a >= b { (&a, &b) } else { (&b, &a) };
            assert_eq!(&hi.checked_sub(lo).unwrap() + lo, *hi);
        }
    }

    #[test]
    fn test_division_contract() {
        let mut rng = StdRng::from_seed([11u8; 32]);
        for _ in 0..50 {
            let (a, d) = random_pair(&mut rng, 200);
            if d == BigUint::from(0u32) {
                continue;
            }
            let a = BigInt::from(&a);
            let d = BigInt::from(&d);
            let (q, r) = a.div_rem(&d).unwrap();
            assert!(r < d);
            assert_eq!(&q * &d + &r, a);
        }
    }

    #[test]
    fn test_matches_num_bigint() {
        let mut rng = StdRng::from_seed([3u8; 32]);
        for bits in [8usize, 63, 64, 65, 128, 257] {
            let (x, y) = random_pair(&mut rng, bits);
            let y = y + BigUint::from(1u32);
            let a = BigInt::from(&x);
            let b = BigInt::from(&y);

            assert_eq!(BigUint::from(&(&a + &b)), &x + &y);
            assert_eq!(BigUint::from(&(&a * &b)), &x * &y);
            assert_eq!(BigUint::from(&a.checked_div(&b).unwrap()), &x / &y);
            assert_eq!(BigUint::from(&a.checked_rem(&b).unwrap()), &x % &y);
            if x >= y {
                assert_eq!(BigUint::from(&a.checked_sub(&b).unwrap()), &x - &y);
            }
            assert_eq!(a.cmp(&b), x.cmp(&y));
            assert_eq!(a.bit_length(), x.bits());
        }
    }

    #[test]
    fn test_num_traits_identities() {
        assert!(<BigInt as Zero>::zero().is_zero());
        assert_eq!(<BigInt as One>::one(), big(1));
    }
}
