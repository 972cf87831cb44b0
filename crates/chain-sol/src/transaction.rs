//! Solana transaction wire format and signing.
//!
//! Transactions are compiled and serialized by hand. Layout:
//!
//! ```text
//! Transaction:
//!   num_signatures          compact-u16
//!   signatures              64 bytes * num_signatures
//!   message:
//!     num_required_sigs     u8
//!     num_readonly_signed   u8
//!     num_readonly_unsigned u8
//!     num_accounts          compact-u16
//!     account_keys          32 bytes * num_accounts
//!     recent_blockhash      32 bytes
//!     num_instructions      compact-u16
//!     instructions[]        (see below)
//!
//! Instruction:
//!   program_id_index        u8
//!   num_accounts            compact-u16
//!   account_indices         u8 * num_accounts
//!   data_len                compact-u16
//!   data                    u8 * data_len
//! ```

use ed25519_dalek::Signer;
use zeroize::Zeroize;

use crate::error::SolError;

/// The System Program public key: 32 zero bytes.
/// Base58: `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: [u8; 32] = [0u8; 32];

const SIGNATURE_LEN: usize = 64;

// ---------------------------------------------------------------------------
// Compact-u16 encoding
// ---------------------------------------------------------------------------

/// Encode a `u16` value in Solana's compact-u16 format.
///
/// - Values 0..0x7f       -> 1 byte
/// - Values 0x80..0x3fff  -> 2 bytes
/// - Values 0x4000..      -> 3 bytes
pub fn encode_compact_u16(value: u16) -> Vec<u8> {
    let mut val = value as u32;
    let mut out = Vec::with_capacity(3);

    loop {
        let mut byte = (val & 0x7f) as u8;
        val >>= 7;
        if val > 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if val == 0 {
            break;
        }
    }

    out
}

/// Decode a compact-u16 value from the front of `data`.
///
/// Returns `(value, bytes_consumed)`.
pub fn decode_compact_u16(data: &[u8]) -> Result<(u16, usize), SolError> {
    let mut value: u32 = 0;
    let mut consumed = 0usize;

    loop {
        let byte = *data.get(consumed).ok_or_else(|| {
            SolError::SerializationError("unexpected end of data while decoding compact-u16".into())
        })?;
        value |= ((byte & 0x7f) as u32) << (7 * consumed);
        consumed += 1;

        if byte & 0x80 == 0 || consumed == 3 {
            break;
        }
    }

    let value = u16::try_from(value)
        .map_err(|_| SolError::SerializationError("compact-u16 value overflow".into()))?;

    Ok((value, consumed))
}

fn compact_len(len: usize, what: &str) -> Result<Vec<u8>, SolError> {
    let len = u16::try_from(len)
        .map_err(|_| SolError::SerializationError(format!("too many {what}: {len}")))?;
    Ok(encode_compact_u16(len))
}

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// A single account reference in a Solana instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolAccountMeta {
    pub pubkey: [u8; 32],
    pub is_signer: bool,
    pub is_writable: bool,
}

impl SolAccountMeta {
    /// Signing account whose balance may change.
    pub fn signer(pubkey: [u8; 32]) -> Self {
        Self {
            pubkey,
            is_signer: true,
            is_writable: true,
        }
    }

    /// Non-signing account the program writes to.
    pub fn writable(pubkey: [u8; 32]) -> Self {
        Self {
            pubkey,
            is_signer: false,
            is_writable: true,
        }
    }

    pub fn readonly(pubkey: [u8; 32]) -> Self {
        Self {
            pubkey,
            is_signer: false,
            is_writable: false,
        }
    }
}

/// A Solana instruction (before it is compiled into a transaction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolInstruction {
    pub program_id: [u8; 32],
    pub accounts: Vec<SolAccountMeta>,
    pub data: Vec<u8>,
}

/// A compiled, unsigned Solana transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolTransaction {
    /// All account keys referenced by this transaction, in canonical order:
    ///   1. writable signers (fee payer first)
    ///   2. read-only signers
    ///   3. writable non-signers
    ///   4. read-only non-signers
    pub account_keys: Vec<[u8; 32]>,

    /// Number of required signatures (first N accounts are signers).
    pub num_required_signatures: u8,
    /// How many of the signing accounts are read-only.
    pub num_readonly_signed: u8,
    /// How many of the non-signing accounts are read-only.
    pub num_readonly_unsigned: u8,

    pub recent_blockhash: [u8; 32],

    pub compiled_instructions: Vec<CompiledInstruction>,
}

impl SolTransaction {
    /// The account that pays fees; always at index 0.
    pub fn fee_payer(&self) -> Option<&[u8; 32]> {
        self.account_keys.first()
    }
}

/// A compiled instruction where account references are replaced by u8 indices
/// into the transaction's `account_keys` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledInstruction {
    pub program_id_index: u8,
    pub account_indices: Vec<u8>,
    pub data: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Transaction building
// ---------------------------------------------------------------------------

/// Decode a Base58 blockhash as returned by `getLatestBlockhash`.
pub fn blockhash_from_str(blockhash: &str) -> Result<[u8; 32], SolError> {
    let bytes = bs58::decode(blockhash.trim())
        .into_vec()
        .map_err(|e| SolError::SerializationError(format!("invalid blockhash: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::SerializationError(format!("blockhash must be 32 bytes, got {}", v.len()))
    })
}

/// Compile a set of instructions into a transaction with a single fee payer.
///
/// The fee payer is placed at index 0 and marked signer + writable. Keys
/// referenced more than once are merged, keeping the union of their
/// permission bits.
pub fn compile_transaction(
    instructions: &[SolInstruction],
    fee_payer: &[u8; 32],
    recent_blockhash: &[u8; 32],
) -> Result<SolTransaction, SolError> {
    if instructions.is_empty() {
        return Err(SolError::TransactionBuildError(
            "transaction needs at least one instruction".into(),
        ));
    }

    struct AccountEntry {
        pubkey: [u8; 32],
        is_signer: bool,
        is_writable: bool,
    }

    // Instruction account lists are tiny; a Vec keeps insertion order.
    let mut entries: Vec<AccountEntry> = Vec::new();

    let mut upsert = |pubkey: [u8; 32], signer: bool, writable: bool| {
        if let Some(entry) = entries.iter_mut().find(|e| e.pubkey == pubkey) {
            entry.is_signer |= signer;
            entry.is_writable |= writable;
        } else {
            entries.push(AccountEntry {
                pubkey,
                is_signer: signer,
                is_writable: writable,
            });
        }
    };

    upsert(*fee_payer, true, true);

    for ix in instructions {
        for meta in &ix.accounts {
            upsert(meta.pubkey, meta.is_signer, meta.is_writable);
        }
        upsert(ix.program_id, false, false);
    }

    // Stable sort: the fee payer is the first writable signer and stays at 0.
    entries.sort_by_key(|e| match (e.is_signer, e.is_writable) {
        (true, true) => 0u8,
        (true, false) => 1,
        (false, true) => 2,
        (false, false) => 3,
    });

    // Account indices and header counts are single bytes.
    if entries.len() > u8::MAX as usize {
        return Err(SolError::TransactionBuildError(format!(
            "too many accounts: {}",
            entries.len()
        )));
    }

    let num_signers = entries.iter().filter(|e| e.is_signer).count() as u8;
    let num_readonly_signed = entries
        .iter()
        .filter(|e| e.is_signer && !e.is_writable)
        .count() as u8;
    let num_readonly_unsigned = entries
        .iter()
        .filter(|e| !e.is_signer && !e.is_writable)
        .count() as u8;

    let account_keys: Vec<[u8; 32]> = entries.iter().map(|e| e.pubkey).collect();

    let index_of = |key: &[u8; 32]| -> Result<u8, SolError> {
        account_keys
            .iter()
            .position(|k| k == key)
            .map(|i| i as u8)
            .ok_or_else(|| SolError::TransactionBuildError("account not in account keys".into()))
    };

    let mut compiled = Vec::with_capacity(instructions.len());
    for ix in instructions {
        let account_indices = ix
            .accounts
            .iter()
            .map(|meta| index_of(&meta.pubkey))
            .collect::<Result<Vec<u8>, SolError>>()?;

        compiled.push(CompiledInstruction {
            program_id_index: index_of(&ix.program_id)?,
            account_indices,
            data: ix.data.clone(),
        });
    }

    Ok(SolTransaction {
        account_keys,
        num_required_signatures: num_signers,
        num_readonly_signed,
        num_readonly_unsigned,
        recent_blockhash: *recent_blockhash,
        compiled_instructions: compiled,
    })
}

/// Serialize the transaction message (the bytes that get signed).
pub fn serialize_message(tx: &SolTransaction) -> Result<Vec<u8>, SolError> {
    let mut buf = Vec::with_capacity(256);

    buf.push(tx.num_required_signatures);
    buf.push(tx.num_readonly_signed);
    buf.push(tx.num_readonly_unsigned);

    buf.extend_from_slice(&compact_len(tx.account_keys.len(), "account keys")?);
    for key in &tx.account_keys {
        buf.extend_from_slice(key);
    }

    buf.extend_from_slice(&tx.recent_blockhash);

    buf.extend_from_slice(&compact_len(tx.compiled_instructions.len(), "instructions")?);
    for ix in &tx.compiled_instructions {
        buf.push(ix.program_id_index);

        buf.extend_from_slice(&compact_len(ix.account_indices.len(), "instruction accounts")?);
        buf.extend_from_slice(&ix.account_indices);

        buf.extend_from_slice(&compact_len(ix.data.len(), "instruction data bytes")?);
        buf.extend_from_slice(&ix.data);
    }

    Ok(buf)
}

/// Sign a single-signer transaction and serialize it into wire format.
///
/// `private_key` is the 32-byte Ed25519 seed. Its public key must be the
/// transaction's fee payer and only required signer.
pub fn sign_transaction(tx: &SolTransaction, private_key: &[u8; 32]) -> Result<Vec<u8>, SolError> {
    let mut seed = *private_key;
    let signing_key = ed25519_dalek::SigningKey::from_bytes(&seed);
    seed.zeroize();

    if tx.num_required_signatures != 1 {
        return Err(SolError::SigningError(format!(
            "expected exactly one required signature, got {}",
            tx.num_required_signatures
        )));
    }
    if tx.fee_payer() != Some(&signing_key.verifying_key().to_bytes()) {
        return Err(SolError::SigningError(
            "signing key does not match the fee payer".into(),
        ));
    }

    let message_bytes = serialize_message(tx)?;
    let signature = signing_key.sign(&message_bytes);

    let mut wire = Vec::with_capacity(1 + SIGNATURE_LEN + message_bytes.len());
    wire.extend_from_slice(&encode_compact_u16(1));
    wire.extend_from_slice(&signature.to_bytes());
    wire.extend_from_slice(&message_bytes);

    Ok(wire)
}

// ---------------------------------------------------------------------------
// Signed transaction parsing
// ---------------------------------------------------------------------------

/// Signature slots and message bytes of a wire-format transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransactionParts<'a> {
    pub signatures: Vec<[u8; 64]>,
    pub message: &'a [u8],
}

/// Split a wire-format transaction into its signatures and message.
pub fn split_signed_transaction(wire: &[u8]) -> Result<SignedTransactionParts<'_>, SolError> {
    let (num_sigs, prefix_len) = decode_compact_u16(wire)?;
    let sigs_end = prefix_len + num_sigs as usize * SIGNATURE_LEN;

    if sigs_end > wire.len() {
        return Err(SolError::SerializationError(
            "transaction too short: signature slots exceed length".into(),
        ));
    }

    let signatures = wire[prefix_len..sigs_end]
        .chunks_exact(SIGNATURE_LEN)
        .map(|chunk| {
            let mut sig = [0u8; 64];
            sig.copy_from_slice(chunk);
            sig
        })
        .collect();

    let message = &wire[sigs_end..];
    if message.len() < 4 {
        return Err(SolError::SerializationError(
            "transaction message too short".into(),
        ));
    }

    Ok(SignedTransactionParts {
        signatures,
        message,
    })
}

/// The transaction id: Base58 of the first (fee payer) signature.
pub fn transaction_id(wire: &[u8]) -> Result<String, SolError> {
    let parts = split_signed_transaction(wire)?;
    let first = parts.signatures.first().ok_or_else(|| {
        SolError::SerializationError("transaction has zero signatures".into())
    })?;
    Ok(bs58::encode(first).into_string())
}
