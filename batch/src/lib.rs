pub mod challenge;
pub mod encoder;
pub mod errors;
pub mod folding;
pub mod prover;
pub mod uint;
pub mod verifier;

pub use errors::BatchError;
pub use uint::Uint256;
