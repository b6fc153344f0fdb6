use ark_bls12_381::Fr;
use ark_ff::{BigInteger, PrimeField};

use crate::errors::BatchError;

/// Fixed-width 256-bit unsigned integer, big-endian.
///
/// The wire representation for on-chain-compatible callers. Deliberately a
/// distinct type from the scalar field: converting back into the field is
/// range-checked, so a value at or above the field modulus fails instead of
/// silently reducing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl From<u64> for Uint256 {
    fn from(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }
}

impl From<Fr> for Uint256 {
    /// Canonical 32-byte big-endian encoding of a field element; total,
    /// since every field element fits.
    fn from(value: Fr) -> Self {
        let bytes = value.into_bigint().to_bytes_be();
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Self(out)
    }
}

impl TryFrom<&Uint256> for Fr {
    type Error = BatchError;

    /// Fails with [`BatchError::NonCanonicalScalar`] for values at or above
    /// the field modulus.
    fn try_from(value: &Uint256) -> Result<Self, Self::Error> {
        let element = Fr::from_be_bytes_mod_order(&value.0);
        // the canonical encoding is unique, so a round-trip mismatch means
        // the input was out of range
        if element.into_bigint().to_bytes_be() == value.0 {
            Ok(element)
        } else {
            Err(BatchError::NonCanonicalScalar)
        }
    }
}

impl TryFrom<Uint256> for Fr {
    type Error = BatchError;

    fn try_from(value: Uint256) -> Result<Self, Self::Error> {
        Fr::try_from(&value)
    }
}
