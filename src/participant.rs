// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::bigint::BigInt;
use crate::curve::EllipticCurve;
use crate::error::{Error, Result};
use crate::group::Group;
use crate::hash::commit_point;
use crate::point::Point;
use crate::polynomial::Polynomial;
use crate::shamir::lagrange_interpolation;
use crate::sharebox::{DistributionSharesBox, ShareBox};
use crate::vss;

/// A participant represents one party in the threshold scheme. The participant can share a secret among a group of other participants and it is then called the "dealer".
/// The receiving participants hold one share each and collaborate to reconstruct the secret once at least `threshold` of them exchange their shares.
#[derive(Debug, Clone, Default)]
pub struct Participant {
    pub id: u64,
    pub privatekey: BigInt,
    pub publickey: Point,
}

impl Participant {
    /// Create a participant with the given share index. Index 0 is reserved
    /// for the secret itself and is rejected when dealing.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use threshold_ecc::Participant;
    /// let dealer = Participant::new(1);
    /// ```
    pub fn new(id: u64) -> Self {
        Participant {
            id,
            privatekey: BigInt::zero(),
            publickey: Point::Infinity,
        }
    }

    /// Draws a private key `u` in `[1, n-1]` and sets the public key `u*G`.
    ///
    /// Requires a curve with a generator and an established order.
    pub fn initialize(&mut self, curve: &EllipticCurve) -> Result<()> {
        self.privatekey = curve.generate_private_key()?;
        self.publickey = curve.generate_public_key(&self.privatekey)?;
        Ok(())
    }

    /// SHA-256 commitment to the public key.
    pub fn commit(&self) -> Vec<u8> {
        commit_point(&self.publickey)
    }

    /// Sum of all public keys, the joint public key of the group.
    pub fn aggregate_public_key(curve: &EllipticCurve, participants: &[Participant]) -> Result<Point> {
        let publickeys: Vec<Point> = participants.iter().map(|p| p.publickey.clone()).collect();
        curve.sum_points(&publickeys)
    }

    /// Takes a secret as input and returns the distribution shares box which is going to be submitted to all the participants the secret is going to be shared with.
    /// Those participants are specified by their ids. They use the commitments in the box to verify that their share is correct
    /// without learning anything about the other coefficients of the sharing polynomial.
    ///
    /// - Parameters:
    ///   - secret: The value that is going to be shared, below the generator order.
    ///   - ids: The share index of each participant the secret is to be shared with.
    ///   - threshold: The number of shares that is needed in order to reconstruct the secret. It must not be greater than the total number of participants.
    /// - Returns: The distribution shares box.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use threshold_ecc::{BigInt, EllipticCurve, Participant};
    ///
    /// let mut curve = EllipticCurve::new(
    ///     BigInt::from(43u64),
    ///     BigInt::from(0u64),
    ///     BigInt::from(7u64),
    /// )
    /// .unwrap();
    /// curve.find_generator().unwrap();
    ///
    /// let mut dealer = Participant::new(0);
    /// dealer.initialize(&curve).unwrap();
    /// let distribute_shares_box = dealer
    ///     .distribute_secret(&curve, &BigInt::from(20u64), &[1, 2, 3], 2)
    ///     .unwrap();
    /// assert_eq!(distribute_shares_box.shares.len(), 3);
    /// ```
    pub fn distribute_secret(
        &self,
        curve: &EllipticCurve,
        secret: &BigInt,
        ids: &[u64],
        threshold: usize,
    ) -> Result<DistributionSharesBox> {
        if ids.is_empty() {
            return Err(Error::InvalidArgument("no participants to share with".to_string()));
        }
        if threshold == 0 || threshold > ids.len() {
            return Err(Error::InvalidArgument(format!(
                "threshold {} must be between 1 and {}",
                threshold,
                ids.len()
            )));
        }
        let mut seen = BTreeSet::new();
        for &id in ids {
            if id == 0 || !seen.insert(id) {
                return Err(Error::InvalidArgument(format!("invalid participant id {}", id)));
            }
        }

        let q = Group::order(curve)?;
        let polynomial = Polynomial::random(threshold - 1, secret, &q)?;
        // v_j = a_j * G, 0 <= j < threshold
        let commitments = polynomial.commitments(curve)?;

        let mut shares = BTreeMap::new();
        for &id in ids {
            shares.insert(id, polynomial.get_value(&BigInt::from(id), &q)?);
        }
        debug!(
            "participant {} dealt {} shares with threshold {}",
            self.id,
            shares.len(),
            threshold
        );

        let mut shares_box = DistributionSharesBox::new();
        shares_box.init(threshold, &commitments, shares);
        Ok(shares_box)
    }

    /// Extracts the share from a given distribution shares box that is addressed to the calling participant.
    ///
    /// Return `None` if the distribution shares box does not contain a share for the participant.
    pub fn extract_share(&self, shares_box: &DistributionSharesBox) -> Option<ShareBox> {
        shares_box.shares.get(&self.id).map(|share| {
            let mut share_box = ShareBox::new();
            share_box.init(self.id, share.clone());
            share_box
        })
    }

    /// Verifies a single share against the commitments of the distribution shares box.
    pub fn verify_share(
        &self,
        curve: &EllipticCurve,
        shares_box: &DistributionSharesBox,
        share_box: &ShareBox,
    ) -> Result<bool> {
        vss::verify(
            &shares_box.commitments,
            &share_box.share,
            &BigInt::from(share_box.id),
            curve,
        )
    }

    /// Verifies that the shares the distribution shares box consists of are consistent so that they can be used to reconstruct the secret later.
    ///
    /// Returns `false` when the number of commitments does not match the threshold or any share fails.
    pub fn verify_distribution_shares(
        &self,
        curve: &EllipticCurve,
        shares_box: &DistributionSharesBox,
    ) -> Result<bool> {
        if shares_box.commitments.len() != shares_box.threshold {
            return Ok(false);
        }
        let failed = vss::verify_all(&shares_box.commitments, &shares_box.shares, curve)?;
        Ok(failed.is_empty())
    }

    /// Reconstructs the secret from the share boxes of other participants.
    ///
    /// Shares that do not verify against the distribution shares box are
    /// dropped. Fails with [`Error::InvalidArgument`] when fewer than
    /// `threshold` valid shares remain.
    pub fn reconstruct(
        &self,
        curve: &EllipticCurve,
        shares_box: &DistributionSharesBox,
        share_boxes: &[ShareBox],
    ) -> Result<BigInt> {
        let mut shares = BTreeMap::new();
        let mut indices = Vec::with_capacity(share_boxes.len());
        for share_box in share_boxes {
            if !self.verify_share(curve, shares_box, share_box)? {
                warn!("dropping invalid share from participant {}", share_box.id);
                continue;
            }
            if shares.insert(share_box.id, share_box.share.clone()).is_none() {
                indices.push(share_box.id);
            }
        }
        if indices.len() < shares_box.threshold {
            return Err(Error::InvalidArgument(format!(
                "{} valid shares, {} needed",
                indices.len(),
                shares_box.threshold
            )));
        }

        let q = Group::order(curve)?;
        let result = lagrange_interpolation(&shares, &indices, &q)?;
        Ok(result.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> EllipticCurve {
        let mut curve = EllipticCurve::new(
            BigInt::from(43u64),
            BigInt::from(0u64),
            BigInt::from(7u64),
        )
        .unwrap();
        curve.find_generator().unwrap();
        curve
    }

    fn participants(curve: &EllipticCurve, n: u64) -> Vec<Participant> {
        (1..=n)
            .map(|id| {
                let mut p = Participant::new(id);
                p.initialize(curve).unwrap();
                p
            })
            .collect()
    }

    #[test]
    fn test_initialize() {
        let curve = setup();
        let mut p = Participant::new(1);
        assert!(p.publickey.is_infinity());
        p.initialize(&curve).unwrap();
        assert!(!p.privatekey.is_zero());
        assert!(p.privatekey < BigInt::from(31u64));
        assert_eq!(
            p.publickey,
            curve
                .multiply(curve.generator().unwrap(), &p.privatekey)
                .unwrap()
        );
        assert_eq!(p.commit().len(), 32);

        let bare = EllipticCurve::new(
            BigInt::from(43u64),
            BigInt::from(0u64),
            BigInt::from(7u64),
        )
        .unwrap();
        assert!(Participant::new(2).initialize(&bare).is_err());
    }

    #[test]
    fn test_aggregate_public_key() {
        let curve = setup();
        let ps = participants(&curve, 3);
        let total = ps
            .iter()
            .fold(BigInt::zero(), |acc, p| &acc + &p.privatekey);
        assert_eq!(
            Participant::aggregate_public_key(&curve, &ps).unwrap(),
            curve.multiply(curve.generator().unwrap(), &total).unwrap()
        );
    }

    #[test]
    fn test_distribute_rejects_bad_arguments() {
        let curve = setup();
        let dealer = Participant::new(9);
        let secret = BigInt::from(20u64);
        assert!(dealer.distribute_secret(&curve, &secret, &[], 1).is_err());
        assert!(dealer.distribute_secret(&curve, &secret, &[1, 2], 0).is_err());
        assert!(dealer.distribute_secret(&curve, &secret, &[1, 2], 3).is_err());
        assert!(dealer.distribute_secret(&curve, &secret, &[1, 1], 2).is_err());
        assert!(dealer.distribute_secret(&curve, &secret, &[0, 1], 2).is_err());
        assert!(dealer
            .distribute_secret(&curve, &BigInt::from(31u64), &[1, 2], 2)
            .is_err());
    }

    #[test]
    fn test_distribute_verify_reconstruct() {
        let curve = setup();
        let dealer = Participant::new(0);
        let ps = participants(&curve, 5);
        let ids: Vec<u64> = ps.iter().map(|p| p.id).collect();
        let secret = BigInt::from(20u64);

        let shares_box = dealer.distribute_secret(&curve, &secret, &ids, 3).unwrap();
        assert_eq!(shares_box.commitments.len(), 3);
        assert_eq!(shares_box.participant_ids(), ids);

        for p in &ps {
            assert!(p.verify_distribution_shares(&curve, &shares_box).unwrap());
        }

        let share_boxes: Vec<ShareBox> = ps
            .iter()
            .map(|p| p.extract_share(&shares_box).unwrap())
            .collect();
        for share_box in &share_boxes {
            assert!(ps[0].verify_share(&curve, &shares_box, share_box).unwrap());
        }

        let r = ps[0]
            .reconstruct(&curve, &shares_box, &share_boxes[1..4])
            .unwrap();
        assert_eq!(r, secret);
        let r = ps[4].reconstruct(&curve, &shares_box, &share_boxes).unwrap();
        assert_eq!(r, secret);
    }

    #[test]
    fn test_extract_share_for_outsider() {
        let curve = setup();
        let dealer = Participant::new(0);
        let shares_box = dealer
            .distribute_secret(&curve, &BigInt::from(7u64), &[1, 2], 2)
            .unwrap();
        assert!(Participant::new(3).extract_share(&shares_box).is_none());
        assert_eq!(
            Participant::new(2).extract_share(&shares_box).unwrap().id,
            2
        );
    }

    #[test]
    fn test_reconstruct_drops_tampered_shares() {
        let curve = setup();
        let dealer = Participant::new(0);
        let ps = participants(&curve, 4);
        let secret = BigInt::from(11u64);
        let shares_box = dealer
            .distribute_secret(&curve, &secret, &[1, 2, 3, 4], 2)
            .unwrap();
        let mut share_boxes: Vec<ShareBox> = ps
            .iter()
            .map(|p| p.extract_share(&shares_box).unwrap())
            .collect();

        let q = BigInt::from(31u64);
        share_boxes[0].share = (&share_boxes[0].share + &BigInt::one())
            .checked_rem(&q)
            .unwrap();
        assert!(!ps[1]
            .verify_share(&curve, &shares_box, &share_boxes[0])
            .unwrap());

        // three honest shares remain
        let r = ps[1].reconstruct(&curve, &shares_box, &share_boxes).unwrap();
        assert_eq!(r, secret);
        // only one honest share remains
        assert!(ps[1]
            .reconstruct(&curve, &shares_box, &share_boxes[0..2])
            .is_err());
    }

    #[test]
    fn test_tampered_distribution_box() {
        let curve = setup();
        let dealer = Participant::new(0);
        let p = Participant::new(1);
        let mut shares_box = dealer
            .distribute_secret(&curve, &BigInt::from(5u64), &[1, 2, 3], 2)
            .unwrap();
        assert!(p.verify_distribution_shares(&curve, &shares_box).unwrap());

        let mut short = shares_box.clone();
        short.commitments.pop();
        assert!(!p.verify_distribution_shares(&curve, &short).unwrap());

        let wrong = shares_box.shares[&3].clone();
        let wrong = (&wrong + &BigInt::from(3u64))
            .checked_rem(&BigInt::from(31u64))
            .unwrap();
        shares_box.shares.insert(3, wrong);
        assert!(!p.verify_distribution_shares(&curve, &shares_box).unwrap());
    }
}
