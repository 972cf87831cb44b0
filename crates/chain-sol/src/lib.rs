//! Solana primitives for the presale client.
//!
//! Addresses, instructions, transaction compilation and the compact binary
//! wire format, implemented by hand without `solana-sdk`. Signing uses
//! `ed25519-dalek` and addresses use `bs58`.

pub mod address;
pub mod error;
pub mod transaction;

// Re-export key public types for ergonomic imports.
pub use address::{address_to_bytes, bytes_to_address, validate_address};
pub use error::SolError;
pub use transaction::{
    blockhash_from_str, compile_transaction, decode_compact_u16, encode_compact_u16,
    serialize_message, sign_transaction, split_signed_transaction, transaction_id,
    CompiledInstruction, SignedTransactionParts, SolAccountMeta, SolInstruction, SolTransaction,
    SYSTEM_PROGRAM_ID,
};
