use kzg::KzgError;

/// Failure surface of the batching layer.
///
/// The local variants are deterministic input-validation failures, returned
/// immediately and never retried. `Engine` carries a commitment-engine
/// failure through unchanged.
#[derive(Debug)]
pub enum BatchError {
    /// Fold requested over zero items.
    EmptyBatch,
    /// A byte blob that would encode to an empty polynomial.
    EmptyData,
    /// `[from, to)` does not address a window of the commitment list.
    InvalidRange { from: u64, to: u64, len: usize },
    /// A fixed-width integer does not encode a canonical field element.
    NonCanonicalScalar,
    /// Propagated from the commitment engine.
    Engine(KzgError),
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &*self {
            BatchError::EmptyBatch => write!(f, "cannot fold an empty batch"),
            BatchError::EmptyData => write!(f, "data encodes to an empty polynomial"),
            BatchError::InvalidRange { from, to, len } => {
                write!(
                    f,
                    "window [{}, {}) is invalid for {} commitments",
                    from, to, len
                )
            }
            BatchError::NonCanonicalScalar => {
                write!(f, "value is not a canonical scalar field element")
            }
            BatchError::Engine(e) => write!(f, "commitment engine: {}", e),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self {
            BatchError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KzgError> for BatchError {
    fn from(e: KzgError) -> Self {
        Self::Engine(e)
    }
}
