use std::ops::{Mul, Sub};

use ark_bls12_381::{Bls12_381, Fr};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_poly::{DenseUVPolynomial, Polynomial};

use crate::commitment::KzgCommitment;
use crate::errors::KzgError;
use crate::opening::KzgOpening;
use crate::srs::Srs;
use crate::types::{G1Point, G1Projective, Poly};

/// Implements the KZG polynomial commitment scheme.
///
/// The `KzgScheme` struct provides methods for committing to polynomials,
/// opening commitments, and verifying openings. It borrows a shared [`Srs`],
/// so any number of schemes can work against one loaded reference string.
pub struct KzgScheme<'a>(&'a Srs);

impl<'a> KzgScheme<'a> {
    /// Creates a new instance of `KzgScheme` over the given structured
    /// reference string (SRS).
    pub fn new(srs: &'a Srs) -> Self {
        Self(srs)
    }

    /// Commits to a polynomial.
    ///
    /// # Parameters
    ///
    /// - `polynomial`: The polynomial to be committed to.
    ///
    /// # Returns
    ///
    /// The commitment, or [`KzgError::SrsTooSmall`] when the polynomial has
    /// more coefficients than the reference string supports.
    pub fn commit(&self, polynomial: &Poly) -> Result<KzgCommitment, KzgError> {
        let commitment = self.evaluate_in_s(polynomial)?;
        Ok(KzgCommitment(commitment))
    }

    fn evaluate_in_s(&self, polynomial: &Poly) -> Result<G1Point, KzgError> {
        let g1_points = self.0.g1_points();
        if polynomial.coeffs.len() > g1_points.len() {
            return Err(KzgError::SrsTooSmall {
                required: polynomial.coeffs.len(),
                supported: g1_points.len(),
            });
        }
        let bases = &g1_points[..polynomial.coeffs.len()];
        let point = G1Projective::msm_unchecked(bases, &polynomial.coeffs);
        Ok(point.into_affine())
    }

    /// Opens a polynomial at a specified point.
    ///
    /// # Parameters
    ///
    /// - `polynomial`: The polynomial to be opened.
    /// - `z`: The point at which the polynomial is opened.
    ///
    /// # Returns
    ///
    /// The opening at the specified point: the quotient witness and the
    /// evaluation.
    pub fn open(&self, polynomial: &Poly, z: Fr) -> Result<KzgOpening, KzgError> {
        if polynomial.coeffs.is_empty() {
            return Err(KzgError::EmptyPolynomial);
        }
        let evaluation_at_z = polynomial.evaluate(&z);
        let mut numerator = polynomial.clone();
        numerator.coeffs[0] -= evaluation_at_z;
        let root = Poly::from_coefficients_slice(&[-z, 1.into()]);
        let quotient = &numerator / &root;
        let opening = self.evaluate_in_s(&quotient)?;

        Ok(KzgOpening(opening, evaluation_at_z))
    }

    /// Verifies the correctness of an opening.
    ///
    /// Checks `e(W, [s - z]₂) == e(C - [y]₁, [1]₂)`.
    ///
    /// # Parameters
    ///
    /// - `commitment`: The commitment to be verified.
    /// - `opening`: The opening to be verified.
    /// - `z`: The point at which the polynomial was opened.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the opening is valid, [`KzgError::InvalidOpening`]
    /// otherwise.
    pub fn verify(
        &self,
        commitment: &KzgCommitment,
        opening: &KzgOpening,
        z: Fr,
    ) -> Result<(), KzgError> {
        let y = opening.1;
        let g2s = self.0.g2s();
        let g2 = self.0.g2();
        let a = g2s.sub(g2.mul(z).into_affine());
        let b = commitment.0.sub(G1Point::generator().mul(y).into_affine());
        let pairing1 = Bls12_381::pairing(opening.0, a);
        let pairing2 = Bls12_381::pairing(b, g2);
        if pairing1 == pairing2 {
            Ok(())
        } else {
            Err(KzgError::InvalidOpening)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Mul;

    use ark_bls12_381::Fr;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::One;
    use ark_poly::{DenseUVPolynomial, Polynomial};

    use crate::errors::KzgError;
    use crate::scheme::KzgScheme;
    use crate::srs::Srs;
    use crate::types::{G1Point, Poly};

    #[test]
    /// Commits to a polynomial, opens the commitment and verifies the
    /// opening.
    fn commit_open_verify() {
        let secret = Fr::from(2);
        let srs = Srs::new_from_secret(secret, 10);
        let scheme = KzgScheme::new(&srs);
        let poly = Poly::from_coefficients_slice(&[1.into(), 2.into(), 3.into()]);
        let commitment = scheme.commit(&poly).unwrap();
        let d = Fr::one();

        assert_eq!(poly.evaluate(&d), 6.into());

        assert_eq!(
            commitment.0,
            G1Point::generator()
                .mul(poly.evaluate(&secret))
                .into_affine()
        );
        let opening = scheme.open(&poly, d).unwrap();
        assert!(scheme.verify(&commitment, &opening, d).is_ok());
    }

    #[test]
    fn tampered_claim_rejected() {
        let srs = Srs::new_from_secret(Fr::from(13), 10);
        let scheme = KzgScheme::new(&srs);
        let poly = Poly::from_coefficients_slice(&[5.into(), 7.into(), 11.into()]);
        let commitment = scheme.commit(&poly).unwrap();
        let z = Fr::from(3);
        let mut opening = scheme.open(&poly, z).unwrap();
        opening.1 += Fr::one();
        assert!(matches!(
            scheme.verify(&commitment, &opening, z),
            Err(KzgError::InvalidOpening)
        ));
    }

    #[test]
    fn oversized_polynomial_rejected() {
        let srs = Srs::new_from_secret(Fr::from(3), 1);
        let scheme = KzgScheme::new(&srs);
        let coeffs = vec![Fr::from(1); srs.g1_points().len() + 1];
        let poly = Poly::from_coefficients_vec(coeffs);
        assert!(matches!(
            scheme.commit(&poly),
            Err(KzgError::SrsTooSmall { .. })
        ));
    }

    #[test]
    fn empty_polynomial_cannot_be_opened() {
        let srs = Srs::new_from_secret(Fr::from(3), 4);
        let scheme = KzgScheme::new(&srs);
        let poly = Poly::from_coefficients_vec(Vec::new());
        assert!(matches!(
            scheme.open(&poly, Fr::from(1)),
            Err(KzgError::EmptyPolynomial)
        ));
    }
}
