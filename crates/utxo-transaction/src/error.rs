/// Error types for transaction operations.
///
/// Covers input index validation, sighash flag decoding, and errors
/// propagated from the primitives crate.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The signed input index does not exist in the transaction.
    #[error("input index {index} out of range (tx has {input_count} inputs)")]
    InputIndexOutOfRange {
        /// The requested input index.
        index: usize,
        /// The number of inputs in the transaction.
        input_count: usize,
    },

    /// The packed sighash flag byte does not encode a known base type.
    #[error("invalid sighash type: {0:#04x}")]
    InvalidSigHashType(u8),

    /// Error from primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] utxo_primitives::PrimitivesError),
}
