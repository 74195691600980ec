use crate::profile::AddressKind;

/// Error types for address encoding and decoding.
///
/// Covers payload validation, character-level decoding failures,
/// checksum verification, and version byte classification problems.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AddressError {
    /// Payload byte length does not match any version entry for the chain.
    #[error("invalid payload length: {0} bytes")]
    InvalidPayloadLength(usize),

    /// A character outside the base32 alphabet was encountered.
    #[error("invalid character: '{0}'")]
    InvalidCharacter(char),

    /// The address mixes uppercase and lowercase letters.
    #[error("address uses mixed case")]
    MixedCaseAddress,

    /// The checksum over the expanded prefix and data did not verify.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Leftover bits after converting 5-bit groups to bytes were non-zero.
    #[error("non-zero padding bits")]
    NonZeroPadding,

    /// The version byte does not appear in the chain's version table.
    #[error("unknown address type: {0:#04x}")]
    UnknownAddressType(u8),

    /// The decoded prefix does not match the expected chain prefix.
    #[error("prefix mismatch: expected '{expected}', got '{got}'")]
    PrefixMismatch {
        /// The prefix required by the chain profile.
        expected: String,
        /// The prefix found in the address string.
        got: String,
    },

    /// The address kind has no version entry on the target chain.
    #[error("address type {0:?} not supported on this chain")]
    UnsupportedAddressType(AddressKind),
}
