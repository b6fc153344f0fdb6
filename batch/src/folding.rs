use ark_bls12_381::Fr;
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::Zero;
use kzg::types::G1Projective;
use kzg::KzgCommitment;

use crate::challenge::derive_challenge_range;
use crate::errors::BatchError;

/// Folds a batch of coefficient vectors into one, weighting item `i` with
/// the challenge for absolute index `i`.
///
/// Shorthand for [`fold_polynomials_from`] with the window starting at 0,
/// which is how full batches are proven.
pub fn fold_polynomials(polynomials: &[Vec<Fr>], seed: &Fr) -> Result<Vec<Fr>, BatchError> {
    fold_polynomials_from(polynomials, seed, 0)
}

/// Folds a window of a larger batch whose first item sits at absolute index
/// `from`.
///
/// Computes `result[j] = Σᵢ Challenge(seed, from + i) · polynomials[i][j]`.
/// The weights are always recomputed from `(seed, window)` here rather than
/// accepted from the caller, so prover and verifier cannot disagree on them.
/// Weighting by absolute index keeps a sub-range fold equal to what the
/// matching sub-range commitment fold commits to.
///
/// The result has the length of the longest item; shorter items count as
/// zero beyond their own length. Fails with [`BatchError::EmptyBatch`] on a
/// zero-item batch.
pub fn fold_polynomials_from(
    polynomials: &[Vec<Fr>],
    seed: &Fr,
    from: u64,
) -> Result<Vec<Fr>, BatchError> {
    if polynomials.is_empty() {
        return Err(BatchError::EmptyBatch);
    }
    let to = from + polynomials.len() as u64;
    let weights = derive_challenge_range(seed, from, to);

    let longest = polynomials.iter().map(Vec::len).max().unwrap_or(0);
    let mut folded = vec![Fr::zero(); longest];
    for (polynomial, weight) in polynomials.iter().zip(&weights) {
        for (acc, coeff) in folded.iter_mut().zip(polynomial) {
            *acc += *weight * coeff;
        }
    }
    Ok(folded)
}

/// Multi-scalar fold of the half-open window `commitments[from..to]`, each
/// entry weighted with the challenge for its absolute index:
/// `Σ_{i ∈ [from, to)} Challenge(seed, i) · commitments[i]`.
///
/// `from == to` returns the group identity without touching the list.
/// Fails with [`BatchError::InvalidRange`] when `from > to` or `to` runs
/// past the end of the list.
pub fn fold_commitments(
    commitments: &[KzgCommitment],
    seed: &Fr,
    from: u64,
    to: u64,
) -> Result<KzgCommitment, BatchError> {
    if from > to || to > commitments.len() as u64 {
        return Err(BatchError::InvalidRange {
            from,
            to,
            len: commitments.len(),
        });
    }
    if from == to {
        return Ok(KzgCommitment::identity());
    }
    let weights = derive_challenge_range(seed, from, to);
    let bases = commitments[from as usize..to as usize]
        .iter()
        .map(|commitment| *commitment.inner())
        .collect::<Vec<_>>();
    let folded = G1Projective::msm_unchecked(&bases, &weights);
    Ok(KzgCommitment(folded.into_affine()))
}
