use ark_bls12_381::Fr;

use crate::types::G1Point;

/// Opening proof together with the evaluation it claims.
///
/// The `G1Point` is the quotient witness, the `Fr` the claimed value of the
/// opened polynomial at the evaluation point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KzgOpening(pub G1Point, pub Fr);

impl KzgOpening {
    /// The quotient witness point.
    pub fn witness(&self) -> &G1Point {
        &self.0
    }

    /// The claimed evaluation.
    pub fn eval(&self) -> Fr {
        self.1
    }
}
