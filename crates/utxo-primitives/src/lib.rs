/// UTXO SDK - Hash primitives and binary serialization helpers.
///
/// This crate provides the foundational building blocks shared by the
/// address and transaction crates:
/// - Hash functions (SHA-256, keyed BLAKE2b-256 with a domain key)
/// - Chain hash type for transaction identification
/// - Little-endian byte writer for digest preimage assembly

pub mod hash;
pub mod chainhash;
pub mod util;

mod error;
pub use error::PrimitivesError;
