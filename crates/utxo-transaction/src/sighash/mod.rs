//! Signing hash computation for transaction inputs.
//!
//! Computes the per-input digest that is signed to authorize spending.
//! Kaspa uses a BIP-143-style layout over a keyed BLAKE2b-256 hash:
//! the preimage commits to the value being spent, the connected script
//! of the output being spent, and aggregate hashes over the outpoints,
//! sequences, signature operation counts and outputs. Schnorr
//! signatures sign the keyed BLAKE2b digest directly; ECDSA signatures
//! sign an additional SHA-256 over a domain-separated wrapper.

use utxo_primitives::hash::{blake2b_256_keyed, sha256};
use utxo_primitives::util::ByteWriter;

use crate::transaction::{Transaction, SUBNETWORK_ID_SIZE};
use crate::TransactionError;

/// Keyed BLAKE2b domain for signing hashes.
const TRANSACTION_SIGNING_DOMAIN: &[u8] = b"TransactionSigningHash";

/// Domain string hashed into the ECDSA wrapper digest.
const TRANSACTION_SIGNING_ECDSA_DOMAIN: &[u8] = b"TransactionSigningHashECDSA";

/// Flag bit marking a sighash as ANYONECANPAY.
const SIGHASH_ANYONE_CAN_PAY_FLAG: u8 = 0x80;

// -----------------------------------------------------------------------
// Sighash flags
// -----------------------------------------------------------------------

/// The base sighash type: which outputs the signature commits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SigHashBase {
    /// Commit to all outputs.
    All,
    /// Commit to no outputs.
    None,
    /// Commit to the output at the same index as the signed input.
    Single,
}

/// A sighash type: a base type plus the ANYONECANPAY flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SigHashType {
    /// The base type.
    pub base: SigHashBase,
    /// When set, the signature commits only to the input being signed.
    pub anyone_can_pay: bool,
}

impl SigHashType {
    /// The default sighash type: ALL without ANYONECANPAY.
    pub const ALL: SigHashType = SigHashType {
        base: SigHashBase::All,
        anyone_can_pay: false,
    };

    /// Pack the sighash type into its wire byte.
    ///
    /// ALL is 0x01, NONE is 0x02, SINGLE is 0x03; ANYONECANPAY sets the
    /// high bit.
    pub fn to_byte(self) -> u8 {
        let base = match self.base {
            SigHashBase::All => 0x01,
            SigHashBase::None => 0x02,
            SigHashBase::Single => 0x03,
        };
        if self.anyone_can_pay {
            base | SIGHASH_ANYONE_CAN_PAY_FLAG
        } else {
            base
        }
    }

    /// Decode a sighash type from its wire byte.
    ///
    /// # Arguments
    /// * `byte` - The packed flag byte.
    ///
    /// # Returns
    /// The decoded type, or `InvalidSigHashType` if the base bits do not
    /// name ALL, NONE or SINGLE.
    pub fn from_byte(byte: u8) -> Result<Self, TransactionError> {
        let base = match byte & !SIGHASH_ANYONE_CAN_PAY_FLAG {
            0x01 => SigHashBase::All,
            0x02 => SigHashBase::None,
            0x03 => SigHashBase::Single,
            _ => return Err(TransactionError::InvalidSigHashType(byte)),
        };
        Ok(SigHashType {
            base,
            anyone_can_pay: byte & SIGHASH_ANYONE_CAN_PAY_FLAG != 0,
        })
    }
}

// -----------------------------------------------------------------------
// Reused aggregate hashes
// -----------------------------------------------------------------------

/// Cache for the aggregate hashes shared between inputs.
///
/// When signing several inputs of the same transaction, the outpoint,
/// sequence and sig op count hashes are identical for every input.
/// Pass one instance across all `*_reused` calls to compute them once.
#[derive(Debug, Default)]
pub struct SigHashReusedValues {
    previous_outputs: Option<[u8; 32]>,
    sequences: Option<[u8; 32]>,
    sig_op_counts: Option<[u8; 32]>,
}

impl SigHashReusedValues {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn previous_outputs(&mut self, tx: &Transaction) -> [u8; 32] {
        *self
            .previous_outputs
            .get_or_insert_with(|| previous_outputs_hash(tx))
    }

    fn sequences(&mut self, tx: &Transaction) -> [u8; 32] {
        *self.sequences.get_or_insert_with(|| sequences_hash(tx))
    }

    fn sig_op_counts(&mut self, tx: &Transaction) -> [u8; 32] {
        *self
            .sig_op_counts
            .get_or_insert_with(|| sig_op_counts_hash(tx))
    }
}

// -----------------------------------------------------------------------
// Signing hash entry points
// -----------------------------------------------------------------------

/// Compute the Schnorr signing hash for one input.
///
/// # Arguments
/// * `tx` - The transaction being signed.
/// * `input_index` - Index of the input being signed.
/// * `connected_script` - Script public key of the output being spent.
/// * `prev_value` - Value of the output being spent, in sompi.
/// * `hash_type` - The sighash type.
///
/// # Returns
/// The 32-byte keyed BLAKE2b digest to be signed with Schnorr.
pub fn signature_hash_schnorr(
    tx: &Transaction,
    input_index: usize,
    connected_script: &[u8],
    prev_value: u64,
    hash_type: SigHashType,
) -> Result<[u8; 32], TransactionError> {
    let mut reused = SigHashReusedValues::new();
    signature_hash_schnorr_reused(tx, input_index, connected_script, prev_value, hash_type, &mut reused)
}

/// Compute the Schnorr signing hash for one input, reusing cached
/// aggregate hashes across inputs of the same transaction.
pub fn signature_hash_schnorr_reused(
    tx: &Transaction,
    input_index: usize,
    connected_script: &[u8],
    prev_value: u64,
    hash_type: SigHashType,
    reused: &mut SigHashReusedValues,
) -> Result<[u8; 32], TransactionError> {
    let preimage = calc_preimage(tx, input_index, connected_script, prev_value, hash_type, reused)?;
    Ok(blake2b_256_keyed(TRANSACTION_SIGNING_DOMAIN, &preimage))
}

/// Compute the ECDSA signing hash for one input.
///
/// The ECDSA digest wraps the Schnorr digest: it is the SHA-256 of
/// SHA-256("TransactionSigningHashECDSA") followed by the keyed BLAKE2b
/// signing hash.
///
/// # Arguments
/// * `tx` - The transaction being signed.
/// * `input_index` - Index of the input being signed.
/// * `connected_script` - Script public key of the output being spent.
/// * `prev_value` - Value of the output being spent, in sompi.
/// * `hash_type` - The sighash type.
///
/// # Returns
/// The 32-byte SHA-256 digest to be signed with ECDSA.
pub fn signature_hash_ecdsa(
    tx: &Transaction,
    input_index: usize,
    connected_script: &[u8],
    prev_value: u64,
    hash_type: SigHashType,
) -> Result<[u8; 32], TransactionError> {
    let mut reused = SigHashReusedValues::new();
    signature_hash_ecdsa_reused(tx, input_index, connected_script, prev_value, hash_type, &mut reused)
}

/// Compute the ECDSA signing hash for one input, reusing cached
/// aggregate hashes across inputs of the same transaction.
pub fn signature_hash_ecdsa_reused(
    tx: &Transaction,
    input_index: usize,
    connected_script: &[u8],
    prev_value: u64,
    hash_type: SigHashType,
    reused: &mut SigHashReusedValues,
) -> Result<[u8; 32], TransactionError> {
    let blake_hash =
        signature_hash_schnorr_reused(tx, input_index, connected_script, prev_value, hash_type, reused)?;

    let mut writer = ByteWriter::with_capacity(64);
    writer.write_bytes(&sha256(TRANSACTION_SIGNING_ECDSA_DOMAIN));
    writer.write_bytes(&blake_hash);
    Ok(sha256(writer.as_bytes()))
}

/// Compute the preimage bytes hashed by the signing hash.
///
/// The preimage consists of:
/// 1. version (2 bytes LE)
/// 2. previousOutputsHash (32 bytes) - zeros under ANYONECANPAY
/// 3. sequencesHash (32 bytes) - zeros under ANYONECANPAY, SINGLE or NONE
/// 4. sigOpCountsHash (32 bytes) - zeros under ANYONECANPAY
/// 5. outpoint (32+4 bytes) - txid + index of the input being signed
/// 6. script version (2 bytes LE, zero)
/// 7. connected script (8-byte LE length + script)
/// 8. value (8 bytes LE) - sompi of the output being spent
/// 9. sequence (8 bytes LE) - sequence of the input being signed
/// 10. sig op count (1 byte, always 1)
/// 11. outputsHash (32 bytes) - all outputs, one output, or zeros
/// 12. lock time (8 bytes LE)
/// 13. subnetwork ID (20 zero bytes), gas (8 zero bytes), payload hash (32 zero bytes)
/// 14. sighash type (1 byte)
fn calc_preimage(
    tx: &Transaction,
    input_index: usize,
    connected_script: &[u8],
    prev_value: u64,
    hash_type: SigHashType,
    reused: &mut SigHashReusedValues,
) -> Result<Vec<u8>, TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InputIndexOutOfRange {
            index: input_index,
            input_count: tx.inputs.len(),
        });
    }
    let input = &tx.inputs[input_index];

    let hash_previous_outputs = if hash_type.anyone_can_pay {
        [0u8; 32]
    } else {
        reused.previous_outputs(tx)
    };

    let hash_sequences = if hash_type.anyone_can_pay || hash_type.base != SigHashBase::All {
        [0u8; 32]
    } else {
        reused.sequences(tx)
    };

    let hash_sig_op_counts = if hash_type.anyone_can_pay {
        [0u8; 32]
    } else {
        reused.sig_op_counts(tx)
    };

    let hash_outputs = match hash_type.base {
        SigHashBase::All => outputs_hash(tx, None),
        SigHashBase::Single if input_index < tx.outputs.len() => {
            outputs_hash(tx, Some(input_index))
        }
        _ => [0u8; 32],
    };

    let mut writer = ByteWriter::with_capacity(256);

    writer.write_u16_le(tx.version);
    writer.write_bytes(&hash_previous_outputs);
    writer.write_bytes(&hash_sequences);
    writer.write_bytes(&hash_sig_op_counts);

    writer.write_bytes(input.previous_outpoint.transaction_id.as_bytes());
    writer.write_u32_le(input.previous_outpoint.index);

    writer.write_u16_le(0); // script version
    writer.write_u64_le(connected_script.len() as u64);
    writer.write_bytes(connected_script);

    writer.write_u64_le(prev_value);
    writer.write_u64_le(input.sequence);
    writer.write_u8(1); // sig op count

    writer.write_bytes(&hash_outputs);

    writer.write_u64_le(tx.lock_time);
    writer.write_bytes(&[0u8; SUBNETWORK_ID_SIZE]);
    writer.write_u64_le(0); // gas
    writer.write_bytes(&[0u8; 32]); // payload hash

    writer.write_u8(hash_type.to_byte());

    Ok(writer.into_bytes())
}

// -----------------------------------------------------------------------
// Aggregate hashes
// -----------------------------------------------------------------------

/// Hash all input outpoints: txid (32 bytes) + index (4 bytes LE) each.
fn previous_outputs_hash(tx: &Transaction) -> [u8; 32] {
    let mut writer = ByteWriter::with_capacity(tx.inputs.len() * 36);
    for input in &tx.inputs {
        writer.write_bytes(input.previous_outpoint.transaction_id.as_bytes());
        writer.write_u32_le(input.previous_outpoint.index);
    }
    blake2b_256_keyed(TRANSACTION_SIGNING_DOMAIN, writer.as_bytes())
}

/// Hash the input sequences.
///
/// The digest commits to an 8-byte zero per input rather than the real
/// sequence values. The per-input preimage still carries the real
/// sequence of the input being signed.
fn sequences_hash(tx: &Transaction) -> [u8; 32] {
    let mut writer = ByteWriter::with_capacity(tx.inputs.len() * 8);
    for _ in &tx.inputs {
        writer.write_u64_le(0);
    }
    blake2b_256_keyed(TRANSACTION_SIGNING_DOMAIN, writer.as_bytes())
}

/// Hash the signature operation counts: one byte of 1 per input.
fn sig_op_counts_hash(tx: &Transaction) -> [u8; 32] {
    let mut writer = ByteWriter::with_capacity(tx.inputs.len());
    for _ in &tx.inputs {
        writer.write_u8(1);
    }
    blake2b_256_keyed(TRANSACTION_SIGNING_DOMAIN, writer.as_bytes())
}

/// Hash serialized outputs: all of them, or a single one for SINGLE.
fn outputs_hash(tx: &Transaction, single: Option<usize>) -> [u8; 32] {
    let mut writer = ByteWriter::new();
    match single {
        Some(n) => tx.outputs[n].write_for_digest(&mut writer),
        None => {
            for output in &tx.outputs {
                output.write_for_digest(&mut writer);
            }
        }
    }
    blake2b_256_keyed(TRANSACTION_SIGNING_DOMAIN, writer.as_bytes())
}
