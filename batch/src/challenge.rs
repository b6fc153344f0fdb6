use ark_bls12_381::Fr;
use ark_ff::{BigInteger, PrimeField};
use sha3::{Digest, Keccak256};

/// Derives the folding weight for one batched item.
///
/// The weight is `Keccak256(seed_be32 || index_be32)` reduced into the
/// scalar field by big-endian interpretation modulo the field order, where
/// `seed_be32` is the canonical 32-byte big-endian encoding of the seed and
/// `index_be32` is the index written big-endian into the last 8 bytes of a
/// zeroed 32-byte buffer. Both encodings are fixed-width so independently
/// written provers and verifiers hash identical transcripts.
///
/// Pure: identical inputs yield an identical output across processes and
/// over time. Swapping the hash is a breaking protocol change.
pub fn derive_challenge(seed: &Fr, index: u64) -> Fr {
    let mut hasher = Keccak256::new();
    hasher.update(seed.into_bigint().to_bytes_be());
    let mut index_bytes = [0u8; 32];
    index_bytes[24..].copy_from_slice(&index.to_be_bytes());
    hasher.update(index_bytes);
    let digest = hasher.finalize();
    Fr::from_be_bytes_mod_order(&digest)
}

/// Challenges for every index in `[from, to)`, ascending.
///
/// Entry `i` carries the challenge for **absolute** index `from + i`, never
/// for a position relative to the caller's local list; this keeps sub-range
/// folds consistent with full-range folds.
pub fn derive_challenge_range(seed: &Fr, from: u64, to: u64) -> Vec<Fr> {
    (from..to).map(|index| derive_challenge(seed, index)).collect()
}
