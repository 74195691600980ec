//! Hash function primitives for the UTXO SDK.
//!
//! Provides SHA-256 and keyed BLAKE2b-256. The keyed BLAKE2b variant is
//! the domain-separated digest used for transaction signing hashes and
//! transaction IDs: each purpose supplies a distinct ASCII key so that
//! digests computed for different roles can never collide.

use blake2::Blake2bMac;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute keyed BLAKE2b with a 32-byte output.
///
/// The key acts as a domain separator: the same data hashed under two
/// different keys yields unrelated digests. Keys may be at most 64
/// bytes, which every domain string used by this SDK satisfies.
///
/// # Arguments
/// * `key` - The domain key (1 to 64 bytes).
/// * `data` - The message bytes to hash.
///
/// # Returns
/// A 32-byte keyed BLAKE2b digest.
pub fn blake2b_256_keyed(key: &[u8], data: &[u8]) -> [u8; 32] {
    // Kept local: Update is ambiguous with Digest::update in sha256.
    use blake2::digest::consts::U32;
    use blake2::digest::{FixedOutput, KeyInit, Update};

    let mut mac = Blake2bMac::<U32>::new_from_slice(key)
        .expect("BLAKE2b accepts keys of up to 64 bytes");
    mac.update(data);
    mac.finalize_fixed().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- SHA-256 ----

    #[test]
    fn test_sha256_empty_string() {
        let hash = sha256(b"");
        assert_eq!(
            hex::encode(hash),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_string() {
        let hash = sha256(b"this is the data I want to hash");
        assert_eq!(
            hex::encode(hash),
            "f88eec7ecabf88f9a64c4100cac1e0c0c4581100492137d1b656ea626cad63e3"
        );
    }

    // ---- keyed BLAKE2b-256 ----

    #[test]
    fn test_blake2b_256_keyed_is_deterministic() {
        let a = blake2b_256_keyed(b"TransactionSigningHash", b"payload");
        let b = blake2b_256_keyed(b"TransactionSigningHash", b"payload");
        assert_eq!(a, b);
    }

    #[test]
    fn test_blake2b_256_keyed_separates_domains() {
        let a = blake2b_256_keyed(b"TransactionSigningHash", b"payload");
        let b = blake2b_256_keyed(b"TransactionID", b"payload");
        assert_ne!(a, b);
    }

    #[test]
    fn test_blake2b_256_keyed_separates_messages() {
        let a = blake2b_256_keyed(b"TransactionID", b"payload one");
        let b = blake2b_256_keyed(b"TransactionID", b"payload two");
        assert_ne!(a, b);
    }
}
