//! Transaction outputs.

use utxo_primitives::util::ByteWriter;

/// A transaction output carrying a value and a script public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionOutput {
    /// The output value in sompi.
    pub value: u64,
    /// The script public key version.
    pub script_version: u16,
    /// The script public key bytes.
    pub script_public_key: Vec<u8>,
}

impl TransactionOutput {
    /// Create a new output with script version 0.
    ///
    /// # Arguments
    /// * `value` - The output value in sompi.
    /// * `script_public_key` - The script public key bytes.
    pub fn new(value: u64, script_public_key: Vec<u8>) -> Self {
        TransactionOutput {
            value,
            script_version: 0,
            script_public_key,
        }
    }

    /// Serialize the output for digest computation: value (8 bytes LE),
    /// script version (2 bytes LE), script length (8 bytes LE), script.
    pub fn write_for_digest(&self, writer: &mut ByteWriter) {
        writer.write_u64_le(self.value);
        writer.write_u16_le(self.script_version);
        writer.write_u64_le(self.script_public_key.len() as u64);
        writer.write_bytes(&self.script_public_key);
    }
}
