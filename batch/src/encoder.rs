use ark_bls12_381::Fr;
use ark_ff::PrimeField;

/// Bytes packed into one coefficient.
///
/// Strictly below the 32-byte scalar width, so every chunk read as a
/// big-endian integer is already below the field modulus and no rejection
/// sampling is needed.
pub const CHUNK_SIZE: usize = 30;

/// Packs raw bytes into polynomial coefficients, one chunk per coefficient.
///
/// Each [`CHUNK_SIZE`] window of `data` becomes one coefficient by
/// big-endian unsigned interpretation; the trailing chunk is encoded from
/// its own (fewer) bytes. The output has `ceil(len / CHUNK_SIZE)`
/// coefficients and empty input yields an empty vector. Deterministic, no
/// failure modes.
pub fn bytes_to_polynomial(data: &[u8]) -> Vec<Fr> {
    data.chunks(CHUNK_SIZE)
        .map(Fr::from_be_bytes_mod_order)
        .collect()
}

#[cfg(test)]
mod tests {
    use ark_bls12_381::Fr;

    use super::{bytes_to_polynomial, CHUNK_SIZE};

    #[test]
    fn forty_nine_bytes_give_two_coefficients() {
        let data = b"The sampling party generates n+1 distinct points.";
        assert_eq!(data.len(), 49);
        assert_eq!(bytes_to_polynomial(data).len(), 2);
    }

    #[test]
    fn chunk_boundaries() {
        assert!(bytes_to_polynomial(&[]).is_empty());
        assert_eq!(bytes_to_polynomial(&[1u8; CHUNK_SIZE]).len(), 1);
        assert_eq!(bytes_to_polynomial(&[1u8; CHUNK_SIZE + 1]).len(), 2);
        assert_eq!(bytes_to_polynomial(&[1u8; 2 * CHUNK_SIZE]).len(), 2);
        assert_eq!(bytes_to_polynomial(&[1u8; 2 * CHUNK_SIZE + 1]).len(), 3);
    }

    #[test]
    fn chunks_are_big_endian_integers() {
        let poly = bytes_to_polynomial(b"ab");
        assert_eq!(poly, vec![Fr::from(0x6162u64)]);

        // full chunk followed by a short trailing chunk
        let mut data = vec![0u8; CHUNK_SIZE];
        data[CHUNK_SIZE - 1] = 7;
        data.push(0x12);
        data.push(0x34);
        let poly = bytes_to_polynomial(&data);
        assert_eq!(poly, vec![Fr::from(7u64), Fr::from(0x1234u64)]);
    }

    #[test]
    fn encoding_is_deterministic() {
        let data = b"Broadcast nodes calculate the values of sampling points";
        assert_eq!(bytes_to_polynomial(data), bytes_to_polynomial(data));
    }
}
