// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use std::collections::BTreeMap;
use std::vec::Vec;

use crate::bigint::BigInt;
use crate::point::Point;

/// A single participant's share `p(id) mod n`, as handed to the others at
/// reconstruction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareBox {
    pub id: u64,
    pub share: BigInt,
}

impl ShareBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, id: u64, share: BigInt) {
        self.id = id;
        self.share = share;
    }
}

/// Everything a dealer publishes: the threshold, the commitments
/// `v_j = a_j * G` and the share of every participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionSharesBox {
    pub threshold: usize,
    pub commitments: Vec<Point>,
    pub shares: BTreeMap<u64, BigInt>,
}

impl DistributionSharesBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(
        &mut self,
        threshold: usize,
        commitments: &[Point],
        shares: BTreeMap<u64, BigInt>,
    ) {
        self.threshold = threshold;
        self.commitments = commitments.to_vec();
        self.shares = shares;
    }

    /// Ids of the participants holding a share, ascending.
    pub fn participant_ids(&self) -> Vec<u64> {
        self.shares.keys().copied().collect()
    }
}
