// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Arbitrary-precision non-negative integers.
//!
//! A [`BigInt`] is stored as big-endian bytes in canonical form: the byte
//! vector is never empty and carries no leading zero byte unless the value is
//! exactly zero, in which case it is the single byte `0x00`. Equality,
//! ordering and the hex encoding are all defined over this canonical form.
//!
//! Values are immutable. Every arithmetic operation returns a fresh value and
//! there is no accessor that hands out a mutable view of the byte storage, so
//! the canonical form cannot be broken from outside the module.
//!
//! Operations that can fail for some inputs (subtraction below zero, division
//! or modulo by zero) are exposed as `checked_*` methods returning
//! [`Result`]; only the total operations `+` and `*` are operator traits.

mod convert;
mod ops;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Immutable arbitrary-precision unsigned integer, big-endian bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    bytes: Vec<u8>,
}

impl BigInt {
    /// Builds a value from a byte vector that may carry leading zeros.
    pub(crate) fn from_vec(mut bytes: Vec<u8>) -> Self {
        let leading = bytes.iter().take_while(|&&b| b == 0).count();
        if leading == bytes.len() {
            bytes.clear();
            bytes.push(0);
        } else if leading > 0 {
            bytes.drain(..leading);
        }
        BigInt { bytes }
    }

    pub fn zero() -> Self {
        BigInt { bytes: vec![0] }
    }

    pub fn one() -> Self {
        BigInt { bytes: vec![1] }
    }

    /// Parses a `0x`/`0X` prefixed hex string with an even number of digits.
    ///
    /// Each pair of digits is one byte, most significant first. Digits are
    /// case-insensitive.
    ///
    /// ```rust
    /// use threshold_ecc::BigInt;
    ///
    /// let n = BigInt::from_hex("0x0102").unwrap();
    /// assert_eq!(n, BigInt::from(258u64));
    /// assert!(BigInt::from_hex("0x123").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(digits) => digits,
            None => {
                return Err(Error::InvalidHex(
                    "hex string must start with '0x' or '0X'".to_string(),
                ))
            }
        };
        if digits.is_empty() {
            return Err(Error::InvalidHex(
                "hex string after '0x' must not be empty".to_string(),
            ));
        }
        let bytes = hex::decode(digits).map_err(|e| Error::InvalidHex(e.to_string()))?;
        Ok(BigInt::from_vec(bytes))
    }

    /// Copies a big-endian byte slice, stripping leading zero bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyBytes);
        }
        Ok(BigInt::from_vec(bytes.to_vec()))
    }

    /// `0x` followed by two lowercase hex digits per byte. Zero is `0x00`.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.bytes))
    }

    /// Canonical big-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Number of bytes in the canonical representation.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Number of significant bits; 0 for zero.
    pub fn bit_length(&self) -> usize {
        let top = self.bytes[0];
        if top == 0 {
            return 0;
        }
        (self.bytes.len() - 1) * 8 + (8 - top.leading_zeros() as usize)
    }

    /// Bit `pos`, counting from the least significant bit.
    ///
    /// Positions past the most significant byte read as `false`.
    pub fn test_bit(&self, pos: usize) -> bool {
        let from_end = pos / 8;
        if from_end >= self.bytes.len() {
            return false;
        }
        let byte = self.bytes[self.bytes.len() - 1 - from_end];
        (byte >> (pos % 8)) & 1 == 1
    }

    pub fn is_zero(&self) -> bool {
        self.bytes == [0]
    }

    pub fn is_one(&self) -> bool {
        self.bytes == [1]
    }

    pub fn is_even(&self) -> bool {
        !self.test_bit(0)
    }

    pub fn is_odd(&self) -> bool {
        self.test_bit(0)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes
            .len()
            .cmp(&other.bytes.len())
            .then_with(|| self.bytes.cmp(&other.bytes))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self.to_hex())
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_hex(s)
    }
}
