#![deny(missing_docs)]

//! UTXO chain SDK - Complete SDK.
//!
//! Re-exports all SDK components for convenient single-crate usage.

pub use utxo_address as address;
pub use utxo_primitives as primitives;
pub use utxo_transaction as transaction;
