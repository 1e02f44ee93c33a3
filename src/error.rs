// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Error type shared by every module of the crate.
//!
//! Every failure is reported synchronously through [`Result`]; nothing in the
//! library panics on bad input or retries on its own.

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value that violates an operation's precondition.
    InvalidArgument,
    /// The caller used a value in a way its type forbids (e.g. reading the
    /// coordinates of the point at infinity).
    LogicViolation,
    /// A search exhausted its bound; the curve parameters are inconsistent.
    Fatal,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    #[error("byte input cannot be empty")]
    EmptyBytes,
    #[error("cannot subtract a larger number from a smaller one")]
    Underflow,
    #[error("division by zero")]
    DivisionByZero,
    #[error("empty range: low must be strictly less than high")]
    EmptyRange,
    #[error("{0} has no modular inverse")]
    NotInvertible(String),
    #[error("{0} is not prime")]
    NotPrime(String),
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("cannot access the coordinates of the point at infinity")]
    PointAtInfinity,
    #[error("no point of prime order exists in the field")]
    GeneratorNotFound,
    #[error("order search exceeded the iteration bound {0}")]
    OrderBoundExceeded(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PointAtInfinity => ErrorKind::LogicViolation,
            Error::GeneratorNotFound | Error::OrderBoundExceeded(_) => ErrorKind::Fatal,
            _ => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

pub type Result<T> = std::result::Result<T, Error>;
