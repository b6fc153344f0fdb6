use ark_bls12_381::{Bls12_381, Fr};
use ark_ec::pairing::Pairing;
use ark_poly::univariate::DensePolynomial;

pub type G1Point = <Bls12_381 as Pairing>::G1Affine;
pub type G2Point = <Bls12_381 as Pairing>::G2Affine;
/// Projective G1, the form multi-scalar combinations are accumulated in.
pub type G1Projective = <Bls12_381 as Pairing>::G1;
pub type Poly = DensePolynomial<Fr>;
