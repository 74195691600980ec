//! Kaspa transaction model and transaction ID computation.

use utxo_primitives::chainhash::Hash;
use utxo_primitives::hash::blake2b_256_keyed;
use utxo_primitives::util::ByteWriter;

use crate::input::TransactionInput;
use crate::output::TransactionOutput;

/// Size of the subnetwork ID field in bytes.
pub const SUBNETWORK_ID_SIZE: usize = 20;

/// Keyed BLAKE2b domain for transaction IDs.
const TRANSACTION_ID_DOMAIN: &[u8] = b"TransactionID";

/// A Kaspa transaction.
///
/// Only the native subnetwork is modelled: the subnetwork ID is all
/// zeros, gas is zero, and the payload is empty. Signature scripts are
/// not carried on inputs; the ID and the signing hashes never commit
/// to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// The transaction version.
    pub version: u16,
    /// The transaction inputs.
    pub inputs: Vec<TransactionInput>,
    /// The transaction outputs.
    pub outputs: Vec<TransactionOutput>,
    /// The transaction lock time.
    pub lock_time: u64,
}

impl Transaction {
    /// Create a new empty transaction with version 0 and lock time 0.
    pub fn new() -> Self {
        Transaction {
            version: 0,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    /// Add an input to the transaction.
    pub fn add_input(&mut self, input: TransactionInput) {
        self.inputs.push(input);
    }

    /// Add an output to the transaction.
    pub fn add_output(&mut self, output: TransactionOutput) {
        self.outputs.push(output);
    }

    /// Compute the transaction ID.
    ///
    /// The ID is a keyed BLAKE2b-256 over the serialized transaction
    /// with signature scripts and sequence numbers blanked, so it is
    /// stable across signing.
    ///
    /// # Returns
    /// The 32-byte transaction ID.
    pub fn id(&self) -> Hash {
        let mut writer = ByteWriter::with_capacity(256);

        writer.write_u16_le(self.version);

        writer.write_u64_le(self.inputs.len() as u64);
        for input in &self.inputs {
            writer.write_bytes(input.previous_outpoint.transaction_id.as_bytes());
            writer.write_u32_le(input.previous_outpoint.index);
            // Blanked signature script length and sequence.
            writer.write_u64_le(0);
            writer.write_u64_le(0);
        }

        writer.write_u64_le(self.outputs.len() as u64);
        for output in &self.outputs {
            output.write_for_digest(&mut writer);
        }

        writer.write_u64_le(self.lock_time);
        writer.write_bytes(&[0u8; SUBNETWORK_ID_SIZE]);
        writer.write_u64_le(0); // gas
        writer.write_u64_le(0); // payload length

        Hash::new(blake2b_256_keyed(TRANSACTION_ID_DOMAIN, writer.as_bytes()))
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}
