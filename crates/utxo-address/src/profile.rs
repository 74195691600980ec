/// Chain profiles for checksummed addresses.
///
/// Each supported chain is described by a `ChainProfile`: its canonical
/// lowercase prefix and a table mapping version bytes to address kinds
/// and expected payload lengths. All chains in the family share the same
/// base32 alphabet and checksum generator; they differ only in prefix
/// and version table.
use crate::AddressError;

/// The base32 alphabet shared by all chains in the family.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Generator constants for the 40-bit BCH checksum.
pub const GENERATOR: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// The role a decoded address payload plays on its chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Pay to public key hash (20 to 64 byte hash).
    P2pkh,
    /// Pay to script hash.
    P2sh,
    /// Pay to a Schnorr public key (32-byte x-only key).
    P2pkSchnorr,
    /// Pay to an ECDSA public key (33-byte compressed key).
    P2pkEcdsa,
    /// Raw script payload.
    Script,
    /// Script template payload.
    Template,
    /// Group (token) identifier payload.
    Group,
}

/// One row of a chain's version table: a version byte together with the
/// address kind it encodes and the payload length it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionEntry {
    /// The version byte placed in front of the payload.
    pub version_byte: u8,
    /// The address kind this version byte encodes.
    pub kind: AddressKind,
    /// The exact payload length in bytes for this version.
    pub payload_len: usize,
}

/// Static description of one chain's address format.
#[derive(Debug)]
pub struct ChainProfile {
    /// Canonical lowercase prefix, without the ':' separator.
    pub prefix: &'static str,
    /// Version byte table for this chain.
    pub versions: &'static [VersionEntry],
}

impl ChainProfile {
    /// Look up the version entry for a version byte.
    ///
    /// # Arguments
    /// * `version_byte` - The first payload byte of a decoded address.
    ///
    /// # Returns
    /// The matching entry, or `UnknownAddressType` if the byte is not
    /// in this chain's table.
    pub fn entry_for_version(&self, version_byte: u8) -> Result<&VersionEntry, AddressError> {
        self.versions
            .iter()
            .find(|e| e.version_byte == version_byte)
            .ok_or(AddressError::UnknownAddressType(version_byte))
    }

    /// Look up the version entry for an address kind and payload length.
    ///
    /// # Arguments
    /// * `kind` - The desired address kind.
    /// * `payload_len` - The payload length in bytes.
    ///
    /// # Returns
    /// The matching entry. Returns `UnsupportedAddressType` when the chain
    /// has no entry for the kind at all, or `InvalidPayloadLength` when the
    /// kind exists but not at this length.
    pub fn entry_for_kind(
        &self,
        kind: AddressKind,
        payload_len: usize,
    ) -> Result<&VersionEntry, AddressError> {
        let mut kind_seen = false;
        for entry in self.versions {
            if entry.kind == kind {
                kind_seen = true;
                if entry.payload_len == payload_len {
                    return Ok(entry);
                }
            }
        }
        if kind_seen {
            Err(AddressError::InvalidPayloadLength(payload_len))
        } else {
            Err(AddressError::UnsupportedAddressType(kind))
        }
    }
}

// ---------------------------------------------------------------------
// Bitcoin Cash
// ---------------------------------------------------------------------

// Bitcoin Cash encodes hash size in the low three version bits: 160, 192,
// 224, 256, 320, 384, 448 and 512 bit hashes. Type bits 0 (P2PKH) and
// 1 (P2SH) occupy bits 3..7.
const BITCOIN_CASH_VERSIONS: &[VersionEntry] = &[
    VersionEntry { version_byte: 0x00, kind: AddressKind::P2pkh, payload_len: 20 },
    VersionEntry { version_byte: 0x01, kind: AddressKind::P2pkh, payload_len: 24 },
    VersionEntry { version_byte: 0x02, kind: AddressKind::P2pkh, payload_len: 28 },
    VersionEntry { version_byte: 0x03, kind: AddressKind::P2pkh, payload_len: 32 },
    VersionEntry { version_byte: 0x04, kind: AddressKind::P2pkh, payload_len: 40 },
    VersionEntry { version_byte: 0x05, kind: AddressKind::P2pkh, payload_len: 48 },
    VersionEntry { version_byte: 0x06, kind: AddressKind::P2pkh, payload_len: 56 },
    VersionEntry { version_byte: 0x07, kind: AddressKind::P2pkh, payload_len: 64 },
    VersionEntry { version_byte: 0x08, kind: AddressKind::P2sh, payload_len: 20 },
    VersionEntry { version_byte: 0x09, kind: AddressKind::P2sh, payload_len: 24 },
    VersionEntry { version_byte: 0x0a, kind: AddressKind::P2sh, payload_len: 28 },
    VersionEntry { version_byte: 0x0b, kind: AddressKind::P2sh, payload_len: 32 },
    VersionEntry { version_byte: 0x0c, kind: AddressKind::P2sh, payload_len: 40 },
    VersionEntry { version_byte: 0x0d, kind: AddressKind::P2sh, payload_len: 48 },
    VersionEntry { version_byte: 0x0e, kind: AddressKind::P2sh, payload_len: 56 },
    VersionEntry { version_byte: 0x0f, kind: AddressKind::P2sh, payload_len: 64 },
];

/// Bitcoin Cash mainnet profile ("bitcoincash" prefix).
pub const BITCOIN_CASH: ChainProfile = ChainProfile {
    prefix: "bitcoincash",
    versions: BITCOIN_CASH_VERSIONS,
};

/// Bitcoin Cash testnet profile ("bchtest" prefix).
pub const BITCOIN_CASH_TESTNET: ChainProfile = ChainProfile {
    prefix: "bchtest",
    versions: BITCOIN_CASH_VERSIONS,
};

// ---------------------------------------------------------------------
// Kaspa
// ---------------------------------------------------------------------

// Kaspa version bytes do not encode payload size: version 0 carries a
// 32-byte Schnorr x-only key, version 1 a 33-byte compressed ECDSA key,
// and version 8 a 32-byte script hash.
const KASPA_VERSIONS: &[VersionEntry] = &[
    VersionEntry { version_byte: 0x00, kind: AddressKind::P2pkSchnorr, payload_len: 32 },
    VersionEntry { version_byte: 0x01, kind: AddressKind::P2pkEcdsa, payload_len: 33 },
    VersionEntry { version_byte: 0x08, kind: AddressKind::P2sh, payload_len: 32 },
];

/// Kaspa mainnet profile ("kaspa" prefix).
pub const KASPA: ChainProfile = ChainProfile {
    prefix: "kaspa",
    versions: KASPA_VERSIONS,
};

/// Kaspa testnet profile ("kaspatest" prefix).
pub const KASPA_TESTNET: ChainProfile = ChainProfile {
    prefix: "kaspatest",
    versions: KASPA_VERSIONS,
};

// ---------------------------------------------------------------------
// Nexa
// ---------------------------------------------------------------------

const NEXA_VERSIONS: &[VersionEntry] = &[
    VersionEntry { version_byte: 0x00, kind: AddressKind::P2pkh, payload_len: 20 },
    VersionEntry { version_byte: 0x08, kind: AddressKind::Script, payload_len: 20 },
    VersionEntry { version_byte: 0x58, kind: AddressKind::Group, payload_len: 32 },
    VersionEntry { version_byte: 0x98, kind: AddressKind::Template, payload_len: 24 },
];

/// Nexa mainnet profile ("nexa" prefix).
pub const NEXA: ChainProfile = ChainProfile {
    prefix: "nexa",
    versions: NEXA_VERSIONS,
};

/// Nexa testnet profile ("nexatest" prefix).
pub const NEXA_TESTNET: ChainProfile = ChainProfile {
    prefix: "nexatest",
    versions: NEXA_VERSIONS,
};
