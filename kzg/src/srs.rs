use std::ops::Mul;

use ark_bls12_381::Fr;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::One;
use ark_ff::UniformRand;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::errors::KzgError;
use crate::types::{G1Point, G2Point};

/// Structured reference string.
///
/// Immutable after construction; every commit, open and verify call borrows
/// the same loaded instance, so it can be shared freely across threads.
#[derive(Debug, Clone, CanonicalSerialize, CanonicalDeserialize)]
pub struct Srs {
    /// G1 times the secret's powers
    g1_points: Vec<G1Point>,
    /// generator on G2
    g2: G2Point,
    /// generator on G2 times the secret
    g2s_point: G2Point,
}

impl Srs {
    /// Generates a reference string for polynomials up to `max_degree` from
    /// a fresh random secret.
    ///
    /// The secret is toxic waste; this constructor is for tests and demos,
    /// production deployments load a published string with [`Srs::from_bytes`].
    pub fn new(max_degree: usize) -> Self {
        let s = Fr::rand(&mut rand::thread_rng());
        Self::new_from_secret(s, max_degree)
    }

    /// only use it for testing purposes
    pub fn new_from_secret(secret: Fr, max_degree: usize) -> Self {
        let g1 = G1Point::generator();

        let mut cur = Fr::one();
        let g1_points = (0..max_degree + 3)
            .map(|_| {
                let res = g1.mul(cur).into_affine();
                cur *= secret;
                res
            })
            .collect::<Vec<_>>();

        let g2 = G2Point::generator();
        let g2s_point = g2.mul(secret).into();
        Self {
            g1_points,
            g2,
            g2s_point,
        }
    }

    /// Decodes a reference string from its canonical compressed byte layout.
    ///
    /// Truncated or non-canonical input fails with [`KzgError::SrsLoad`];
    /// there is no fallback to freshly generated parameters.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KzgError> {
        Self::deserialize_compressed(bytes).map_err(KzgError::SrsLoad)
    }

    /// Canonical compressed byte layout, suitable for publishing.
    pub fn to_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = Vec::new();
        self.serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }

    /// Largest polynomial degree this reference string can commit to.
    pub fn max_degree(&self) -> usize {
        self.g1_points.len() - 1
    }
}

impl Srs {
    pub fn g1_points(&self) -> &[G1Point] {
        &self.g1_points
    }

    pub fn g2(&self) -> G2Point {
        self.g2
    }

    pub fn g2s(&self) -> G2Point {
        self.g2s_point
    }
}

#[cfg(test)]
mod tests {
    use ark_bls12_381::Fr;

    use super::Srs;
    use crate::errors::KzgError;

    #[test]
    fn bytes_round_trip() {
        let srs = Srs::new_from_secret(Fr::from(42), 8);
        let bytes = srs.to_bytes().unwrap();
        let restored = Srs::from_bytes(&bytes).unwrap();
        assert_eq!(srs.g1_points(), restored.g1_points());
        assert_eq!(srs.g2(), restored.g2());
        assert_eq!(srs.g2s(), restored.g2s());
    }

    #[test]
    fn truncated_bytes_rejected() {
        let srs = Srs::new_from_secret(Fr::from(42), 8);
        let bytes = srs.to_bytes().unwrap();
        let result = Srs::from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(KzgError::SrsLoad(_))));
    }

    #[test]
    fn max_degree_matches_requested() {
        let srs = Srs::new_from_secret(Fr::from(7), 10);
        assert!(srs.max_degree() >= 10);
    }
}
