use ark_bls12_381::Fr;
use ark_poly::univariate::DensePolynomial;
use ark_poly::DenseUVPolynomial;
use kzg::{KzgOpening, KzgScheme, Srs};

use crate::encoder::bytes_to_polynomial;
use crate::errors::BatchError;
use crate::folding::fold_polynomials;
use crate::uint::Uint256;

/// Folds the batch and opens the folded polynomial at `open_point`.
///
/// The returned opening covers every item at once: a verifier folding the
/// matching commitments with the same seed checks this single proof against
/// the aggregated commitment. Engine failures (for instance an SRS too
/// small for the folded degree) propagate unchanged.
pub fn prove_batch(
    polynomials: &[Vec<Fr>],
    open_point: Fr,
    seed: Fr,
    srs: &Srs,
) -> Result<KzgOpening, BatchError> {
    let folded = fold_polynomials(polynomials, &seed)?;
    let scheme = KzgScheme::new(srs);
    let opening = scheme.open(&DensePolynomial::from_coefficients_vec(folded), open_point)?;
    Ok(opening)
}

/// Encodes each byte blob with the chunk encoder, then proves the batch.
///
/// Every blob must be non-empty: an empty blob has no polynomial to fold
/// and fails with [`BatchError::EmptyData`] before any folding happens.
pub fn prove_batch_data(
    blobs: &[impl AsRef<[u8]>],
    open_point: Fr,
    seed: Fr,
    srs: &Srs,
) -> Result<KzgOpening, BatchError> {
    let polynomials = blobs
        .iter()
        .map(|blob| {
            let blob = blob.as_ref();
            if blob.is_empty() {
                return Err(BatchError::EmptyData);
            }
            Ok(bytes_to_polynomial(blob))
        })
        .collect::<Result<Vec<_>, _>>()?;
    prove_batch(&polynomials, open_point, seed, srs)
}

/// Proving entry point over fixed-width big-endian integers.
///
/// Every limb goes through the range-checked conversion; a value at or
/// above the field modulus fails with [`BatchError::NonCanonicalScalar`]
/// rather than being reduced.
pub fn prove_batch_uints(
    polynomials: &[Vec<Uint256>],
    open_point: &Uint256,
    seed: &Uint256,
    srs: &Srs,
) -> Result<KzgOpening, BatchError> {
    let polynomials = polynomials
        .iter()
        .map(|coefficients| {
            coefficients
                .iter()
                .map(Fr::try_from)
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    prove_batch(
        &polynomials,
        Fr::try_from(open_point)?,
        Fr::try_from(seed)?,
        srs,
    )
}
