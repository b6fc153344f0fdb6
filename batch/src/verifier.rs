use ark_bls12_381::Fr;
use kzg::{KzgCommitment, KzgOpening, KzgScheme, Srs};

use crate::errors::BatchError;
use crate::folding::fold_commitments;

/// Checks one opening proof against the fold of the full commitment list.
pub fn verify_batch(
    commitments: &[KzgCommitment],
    proof: &KzgOpening,
    open_point: Fr,
    seed: Fr,
    srs: &Srs,
) -> Result<(), BatchError> {
    verify_batch_range(
        commitments,
        proof,
        open_point,
        seed,
        0,
        commitments.len() as u64,
        srs,
    )
}

/// Checks one opening proof against the fold of `commitments[from..to]`.
///
/// The aggregated commitment is recomputed here from `(seed, window)`,
/// never taken from the caller. Soundness rests on prover and verifier
/// using the same seed, window, hash and open point; any divergence,
/// including a commitment omitted from the window, makes the pairing
/// check reject.
pub fn verify_batch_range(
    commitments: &[KzgCommitment],
    proof: &KzgOpening,
    open_point: Fr,
    seed: Fr,
    from: u64,
    to: u64,
    srs: &Srs,
) -> Result<(), BatchError> {
    let folded = fold_commitments(commitments, &seed, from, to)?;
    let scheme = KzgScheme::new(srs);
    scheme.verify(&folded, proof, open_point)?;
    Ok(())
}
