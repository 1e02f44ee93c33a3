// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Group implementations beyond the elliptic curve itself.
//!
//! - `modp`: order-q subgroup of `Z_p*` for a caller-supplied safe prime

pub mod modp;

// Re-export commonly used types
pub use modp::ModpGroup;
