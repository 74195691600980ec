/// Unified error type for all primitives operations.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    /// A hash value had the wrong length or was otherwise malformed.
    #[error("invalid hash: {0}")]
    InvalidHash(String),

    /// A hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
