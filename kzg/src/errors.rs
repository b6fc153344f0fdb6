use ark_serialize::SerializationError;

/// Failures surfaced by the commitment engine.
///
/// All of them are deterministic: retrying the same call with the same
/// inputs fails the same way. Callers fix the input (for instance load a
/// larger reference string) and resubmit.
#[derive(Debug)]
pub enum KzgError {
    /// The polynomial needs more G1 powers than the reference string holds.
    SrsTooSmall { required: usize, supported: usize },
    /// Opening a polynomial with no coefficients.
    EmptyPolynomial,
    /// The reference string bytes were truncated or non-canonical.
    SrsLoad(SerializationError),
    /// The pairing check rejected the opening.
    InvalidOpening,
}

impl std::fmt::Display for KzgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &*self {
            KzgError::SrsTooSmall {
                required,
                supported,
            } => {
                write!(
                    f,
                    "srs supports {} coefficients but the polynomial has {}",
                    supported, required
                )
            }
            KzgError::EmptyPolynomial => {
                write!(f, "cannot open a polynomial with no coefficients")
            }
            KzgError::SrsLoad(e) => write!(f, "failed to decode srs bytes: {}", e),
            KzgError::InvalidOpening => write!(f, "opening proof rejected by pairing check"),
        }
    }
}

impl std::error::Error for KzgError {}

impl From<SerializationError> for KzgError {
    fn from(e: SerializationError) -> Self {
        Self::SrsLoad(e)
    }
}
