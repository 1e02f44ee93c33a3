// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use sha2::{Digest, Sha256};

use crate::point::Point;

/// Helper function to compute SHA-256 hash of multiple byte sequences
pub fn hash_multiple(inputs: &[&[u8]]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().to_vec()
}

/// Binding commitment to a curve point: SHA-256 of its display form.
pub fn commit_point(point: &Point) -> Vec<u8> {
    hash_multiple(&[point.to_string().as_bytes()])
}
