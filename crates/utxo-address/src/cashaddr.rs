/// Checksummed base32 address encoding and decoding.
///
/// Implements the CashAddr-family format shared by Bitcoin Cash, Kaspa
/// and Nexa: a lowercase prefix, a ':' separator, and a base32 data part
/// consisting of a version byte, the payload repacked into 5-bit groups,
/// and a 40-bit BCH checksum computed over the expanded prefix and data.
use crate::profile::{AddressKind, ChainProfile, CHARSET, GENERATOR};
use crate::AddressError;

/// Number of trailing checksum symbols in the data part.
const CHECKSUM_LEN: usize = 8;

/// A successfully decoded address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedAddress {
    /// The lowercase prefix the address was decoded under.
    pub prefix: String,
    /// The address kind derived from the version byte.
    pub kind: AddressKind,
    /// The raw payload bytes (version byte stripped).
    pub payload: Vec<u8>,
}

/// Compute the 40-bit BCH checksum state over a sequence of 5-bit values.
///
/// The state starts at 1; a final state of 1 over an expanded prefix,
/// payload and checksum means the checksum verifies.
fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07ffffffff) << 5) ^ u64::from(d);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= gen;
            }
        }
    }
    c
}

/// Expand a prefix for checksum computation: the low five bits of each
/// character, followed by a single zero separator.
fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + 1);
    for c in prefix.bytes() {
        out.push(c & 0x1f);
    }
    out.push(0);
    out
}

/// Repack bytes into 5-bit groups, MSB first, zero-padding the tail.
fn convert_to_five_bit(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((data.len() * 8 + 4) / 5);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &b in data {
        acc = (acc << 8) | u32::from(b);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

/// Repack 5-bit groups into bytes, MSB first.
///
/// Strict: fewer than five leftover bits may remain and they must all be
/// zero, otherwise the address carries information in its padding.
fn convert_from_five_bit(data: &[u8]) -> Result<Vec<u8>, AddressError> {
    let mut out = Vec::with_capacity(data.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &d in data {
        acc = (acc << 5) | u32::from(d);
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }
    if bits >= 5 || acc & ((1 << bits) - 1) != 0 {
        return Err(AddressError::NonZeroPadding);
    }
    Ok(out)
}

/// Encode a payload as a checksummed address for a chain.
///
/// The version byte is looked up from the chain's version table using
/// the address kind and payload length.
///
/// # Arguments
/// * `profile` - The target chain profile.
/// * `kind` - The address kind to encode.
/// * `payload` - The raw payload bytes (hash or public key).
///
/// # Returns
/// The full lowercase address string including the prefix, or an error
/// if the chain has no version entry for the kind and length.
pub fn encode(
    profile: &ChainProfile,
    kind: AddressKind,
    payload: &[u8],
) -> Result<String, AddressError> {
    let entry = profile.entry_for_kind(kind, payload.len())?;

    let mut versioned = Vec::with_capacity(payload.len() + 1);
    versioned.push(entry.version_byte);
    versioned.extend_from_slice(payload);
    let data = convert_to_five_bit(&versioned);

    // Checksum input: expanded prefix, data, eight zero placeholders.
    let mut checksum_input = expand_prefix(profile.prefix);
    checksum_input.extend_from_slice(&data);
    checksum_input.extend_from_slice(&[0u8; CHECKSUM_LEN]);
    let checksum = polymod(&checksum_input) ^ 1;

    let mut out = String::with_capacity(profile.prefix.len() + 1 + data.len() + CHECKSUM_LEN);
    out.push_str(profile.prefix);
    out.push(':');
    for d in data {
        out.push(CHARSET[d as usize] as char);
    }
    for i in 0..CHECKSUM_LEN {
        let d = (checksum >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f;
        out.push(CHARSET[d as usize] as char);
    }
    Ok(out)
}

/// Decode a checksummed address string for a chain.
///
/// The address may be all-lowercase or all-uppercase; mixed case is
/// rejected. A missing prefix is assumed to be the chain's own prefix.
///
/// # Arguments
/// * `profile` - The chain profile to decode against.
/// * `address` - The address string.
///
/// # Returns
/// The decoded prefix, kind and payload, or an error describing the
/// first validation failure.
pub fn decode(profile: &ChainProfile, address: &str) -> Result<DecodedAddress, AddressError> {
    let mut has_lower = false;
    let mut has_upper = false;
    for c in address.chars() {
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        }
    }
    if has_lower && has_upper {
        return Err(AddressError::MixedCaseAddress);
    }
    let address = address.to_ascii_lowercase();

    let (prefix, data_part) = match address.rfind(':') {
        Some(pos) => (&address[..pos], &address[pos + 1..]),
        None => (profile.prefix, address.as_str()),
    };
    if prefix != profile.prefix {
        return Err(AddressError::PrefixMismatch {
            expected: profile.prefix.to_string(),
            got: prefix.to_string(),
        });
    }

    let mut values = Vec::with_capacity(data_part.len());
    for c in data_part.chars() {
        let idx = CHARSET
            .iter()
            .position(|&b| b as char == c)
            .ok_or(AddressError::InvalidCharacter(c))?;
        values.push(idx as u8);
    }
    if values.len() < CHECKSUM_LEN {
        return Err(AddressError::ChecksumMismatch);
    }

    let mut checksum_input = expand_prefix(prefix);
    checksum_input.extend_from_slice(&values);
    if polymod(&checksum_input) != 1 {
        return Err(AddressError::ChecksumMismatch);
    }

    let versioned = convert_from_five_bit(&values[..values.len() - CHECKSUM_LEN])?;
    let (version_byte, payload) = match versioned.split_first() {
        Some((v, payload)) if !payload.is_empty() => (*v, payload),
        _ => return Err(AddressError::InvalidPayloadLength(0)),
    };

    let entry = profile.entry_for_version(version_byte)?;
    if payload.len() != entry.payload_len {
        return Err(AddressError::InvalidPayloadLength(payload.len()));
    }

    Ok(DecodedAddress {
        prefix: prefix.to_string(),
        kind: entry.kind,
        payload: payload.to_vec(),
    })
}
