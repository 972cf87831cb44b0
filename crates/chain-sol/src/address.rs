//! Solana address encoding.
//!
//! An address is the Base58 encoding of a raw 32-byte Ed25519 public key
//! (or of a program-owned 32-byte key). No checksum or hashing is involved.

use crate::error::SolError;

/// Decode a Solana address string to its 32-byte representation.
pub fn address_to_bytes(address: &str) -> Result<[u8; 32], SolError> {
    let bytes = bs58::decode(address.trim())
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })?;

    Ok(arr)
}

/// Encode 32 bytes as a Solana address (Base58 string).
pub fn bytes_to_address(bytes: &[u8; 32]) -> String {
    bs58::encode(bytes).into_string()
}

/// Whether `address` is Base58 that decodes to exactly 32 bytes.
pub fn validate_address(address: &str) -> bool {
    address_to_bytes(address).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_program_address() {
        assert_eq!(bytes_to_address(&[0u8; 32]), "11111111111111111111111111111111");
        assert_eq!(
            address_to_bytes("11111111111111111111111111111111").unwrap(),
            [0u8; 32]
        );
    }

    #[test]
    fn encode_decode_known_program() {
        let address = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let bytes = address_to_bytes(address).unwrap();
        assert_eq!(bytes_to_address(&bytes), address);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let bytes = address_to_bytes("  MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr\n").unwrap();
        assert_eq!(
            bytes_to_address(&bytes),
            "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr"
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(!validate_address("not-a-valid-address!!!"));
        assert!(address_to_bytes("###invalid###").is_err());
    }

    #[test]
    fn wrong_length_is_rejected() {
        // "1" decodes to a single zero byte.
        let err = address_to_bytes("1").unwrap_err();
        assert!(err.to_string().contains("expected 32 bytes, got 1"));
    }

    #[test]
    fn valid_address_passes() {
        assert!(validate_address("D7LrCJJgZunxgdFd7dUyamDn1XTBZtM3KVGKgDM4vDvA"));
    }
}
