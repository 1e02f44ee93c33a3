// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use std::convert::TryFrom;

use num_bigint::BigUint;

use super::BigInt;
use crate::error::Error;

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt::from_vec(value.to_be_bytes().to_vec())
    }
}

impl From<&BigUint> for BigInt {
    fn from(value: &BigUint) -> Self {
        BigInt::from_vec(value.to_bytes_be())
    }
}

impl From<BigUint> for BigInt {
    fn from(value: BigUint) -> Self {
        BigInt::from(&value)
    }
}

impl From<&BigInt> for BigUint {
    fn from(value: &BigInt) -> Self {
        BigUint::from_bytes_be(value.as_bytes())
    }
}

impl From<BigInt> for BigUint {
    fn from(value: BigInt) -> Self {
        BigUint::from(&value)
    }
}

impl TryFrom<&BigInt> for u64 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let bytes = value.as_bytes();
        if bytes.len() > 8 {
            return Err(Error::InvalidArgument(format!(
                "{} does not fit in 64 bits",
                value
            )));
        }
        Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }
}
