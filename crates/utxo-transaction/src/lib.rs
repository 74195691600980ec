/// Kaspa transaction model, transaction IDs and signing hash computation.
///
/// Provides the transaction, input and output types, keyed BLAKE2b
/// transaction IDs, and the per-input signing hashes for Schnorr and
/// ECDSA signatures.
pub mod input;
pub mod output;
pub mod sighash;
pub mod transaction;

mod error;

pub use error::TransactionError;
pub use input::{Outpoint, TransactionInput};
pub use output::TransactionOutput;
pub use sighash::{
    signature_hash_ecdsa, signature_hash_schnorr, SigHashBase, SigHashReusedValues, SigHashType,
};
pub use transaction::Transaction;

#[cfg(test)]
mod tests;
