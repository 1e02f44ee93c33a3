// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Big integers, prime-field elliptic curves and threshold secret sharing
//! built on top of them.

pub mod bigint;
pub mod curve;
pub mod error;
pub mod group;
pub mod groups;
pub mod hash;
pub mod participant;
pub mod point;
pub mod polynomial;
pub mod primality;
pub mod random;
pub mod shamir;
pub mod sharebox;
pub mod util;
pub mod vss;

pub use bigint::BigInt;
pub use curve::EllipticCurve;
pub use error::{Error, ErrorKind, Result};
pub use group::Group;
pub use participant::Participant;
pub use point::Point;
pub use shamir::LagrangeResult;
pub use sharebox::{DistributionSharesBox, ShareBox};
