//! Transaction inputs.

use utxo_primitives::chainhash::Hash;

use crate::TransactionError;

/// A reference to an output of a previous transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outpoint {
    /// The ID of the transaction holding the output being spent.
    pub transaction_id: Hash,
    /// The index of the output within that transaction.
    pub index: u32,
}

impl Outpoint {
    /// Create a new outpoint.
    pub fn new(transaction_id: Hash, index: u32) -> Self {
        Outpoint {
            transaction_id,
            index,
        }
    }

    /// Create an outpoint from a hex-encoded transaction ID.
    ///
    /// # Arguments
    /// * `transaction_id_hex` - 64 hex characters naming the transaction.
    /// * `index` - The output index.
    pub fn from_hex(transaction_id_hex: &str, index: u32) -> Result<Self, TransactionError> {
        Ok(Outpoint {
            transaction_id: Hash::from_hex(transaction_id_hex)?,
            index,
        })
    }
}

/// A transaction input spending a previous output.
///
/// Signature scripts are not carried here: the signing hash covers the
/// connected script of the output being spent, supplied at signing time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    /// The output being spent.
    pub previous_outpoint: Outpoint,
    /// The input sequence number.
    pub sequence: u64,
}

impl TransactionInput {
    /// Create a new input with the given outpoint and a zero sequence.
    pub fn new(previous_outpoint: Outpoint) -> Self {
        TransactionInput {
            previous_outpoint,
            sequence: 0,
        }
    }
}
