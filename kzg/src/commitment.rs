use std::ops::{Add, Mul, Neg, Sub};

use ark_bls12_381::Fr;
use ark_ec::AffineRepr;

use crate::types::G1Point;

/// Commitment to a single polynomial.
///
/// An opaque G1 point: callers compare commitments for equality and combine
/// them with the group operations below, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KzgCommitment(pub G1Point);

impl KzgCommitment {
    /// A reference to the inner `G1Point` contained within the commitment.
    pub fn inner(&self) -> &G1Point {
        &self.0
    }

    /// The identity element, the combination of an empty set of commitments.
    pub fn identity() -> Self {
        Self(G1Point::zero())
    }
}

impl Add for KzgCommitment {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let commitment = self.0 + rhs.0;
        Self(commitment.into())
    }
}

impl Sub for KzgCommitment {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::add(self, -rhs)
    }
}

impl Mul<Fr> for KzgCommitment {
    type Output = Self;

    fn mul(self, rhs: Fr) -> Self::Output {
        let element = self.0.mul(rhs);
        Self(element.into())
    }
}

impl Mul<Fr> for &KzgCommitment {
    type Output = KzgCommitment;

    fn mul(self, rhs: Fr) -> Self::Output {
        let element = self.0.mul(rhs);
        KzgCommitment(element.into())
    }
}

impl Neg for KzgCommitment {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let point = self.0;
        Self(-point)
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Mul;

    use ark_bls12_381::Fr;
    use ark_ec::{AffineRepr, CurveGroup};

    use super::KzgCommitment;
    use crate::types::G1Point;

    #[test]
    fn scalar_mul_matches_group_mul() {
        let point = G1Point::generator().mul(Fr::from(5)).into_affine();
        let commitment = KzgCommitment(point);
        let factor = Fr::from(9);
        let expected = G1Point::generator().mul(Fr::from(45)).into_affine();
        assert_eq!((commitment * factor).0, expected);
    }

    #[test]
    fn identity_is_additive_neutral() {
        let point = G1Point::generator().mul(Fr::from(3)).into_affine();
        let commitment = KzgCommitment(point);
        let sum = commitment.clone() + KzgCommitment::identity();
        assert_eq!(sum, commitment);
    }

    #[test]
    fn sub_cancels_add() {
        let a = KzgCommitment(G1Point::generator().mul(Fr::from(11)).into_affine());
        let b = KzgCommitment(G1Point::generator().mul(Fr::from(4)).into_affine());
        let round = (a.clone() + b.clone()) - b;
        assert_eq!(round, a);
    }
}
