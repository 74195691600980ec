/// Checksummed address encoding for CashAddr-family UTXO chains.
///
/// Provides the shared base32 codec with a 40-bit BCH checksum and the
/// chain profiles (prefix plus version byte table) for Bitcoin Cash,
/// Kaspa and Nexa, mainnet and testnet.
pub mod cashaddr;
pub mod profile;

mod error;

pub use cashaddr::{decode, encode, DecodedAddress};
pub use error::AddressError;
pub use profile::{AddressKind, ChainProfile, VersionEntry};
