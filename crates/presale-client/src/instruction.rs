//! The presale program's `invest` instruction.
//!
//! ```text
//! offset  size  field
//! 0       1     opcode (0 = invest)
//! 1       8     lamports, u64 little-endian
//! ```
//!
//! Accounts, in order: investor (signer, writable), presale vault
//! (writable), System Program (read-only).

use chain_sol::{SolAccountMeta, SolInstruction, SYSTEM_PROGRAM_ID};

use crate::amount::to_lamports;
use crate::error::PresaleError;
use crate::types::PresaleTargets;

pub const INVEST_OPCODE: u8 = 0;
pub const INVEST_PAYLOAD_LEN: usize = 9;
pub const AMOUNT_OFFSET: usize = 1;

/// Deployed presale program.
pub const DEFAULT_PROGRAM_ID: &str = "D7LrCJJgZunxgdFd7dUyamDn1XTBZtM3KVGKgDM4vDvA";
/// Account that receives contributions.
pub const DEFAULT_VAULT_ADDRESS: &str = "7d9BAPMzCvmfwrYvTrF95gEMEbxBJaEdngLiioSfFcfn";

/// Encode the invest payload for `amount` SOL.
pub fn build_invest_payload(amount: f64) -> Result<[u8; INVEST_PAYLOAD_LEN], PresaleError> {
    let lamports = to_lamports(amount)?;

    let mut payload = [0u8; INVEST_PAYLOAD_LEN];
    payload[0] = INVEST_OPCODE;
    payload[AMOUNT_OFFSET..].copy_from_slice(&lamports.to_le_bytes());
    Ok(payload)
}

/// Decode an invest payload back to its lamport amount.
pub fn decode_invest_payload(data: &[u8]) -> Result<u64, PresaleError> {
    if data.len() != INVEST_PAYLOAD_LEN {
        return Err(PresaleError::Encoding(format!(
            "invest payload must be {INVEST_PAYLOAD_LEN} bytes, got {}",
            data.len()
        )));
    }
    if data[0] != INVEST_OPCODE {
        return Err(PresaleError::Encoding(format!(
            "unexpected opcode {}",
            data[0]
        )));
    }

    let mut amount = [0u8; 8];
    amount.copy_from_slice(&data[AMOUNT_OFFSET..]);
    Ok(u64::from_le_bytes(amount))
}

pub fn build_invest_instruction(
    investor: &[u8; 32],
    targets: &PresaleTargets,
    amount: f64,
) -> Result<SolInstruction, PresaleError> {
    let payload = build_invest_payload(amount)?;

    Ok(SolInstruction {
        program_id: targets.program_id,
        accounts: vec![
            SolAccountMeta::signer(*investor),
            SolAccountMeta::writable(targets.vault),
            SolAccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: payload.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::DEFAULT_MAX_INVESTMENT;
    use rand::Rng;

    fn targets() -> PresaleTargets {
        PresaleTargets {
            program_id: chain_sol::address_to_bytes(DEFAULT_PROGRAM_ID).unwrap(),
            vault: chain_sol::address_to_bytes(DEFAULT_VAULT_ADDRESS).unwrap(),
        }
    }

    #[test]
    fn one_and_a_half_sol() {
        let payload = build_invest_payload(1.5).unwrap();
        let mut expected = vec![0u8];
        expected.extend_from_slice(&1_500_000_000u64.to_le_bytes());
        assert_eq!(payload.to_vec(), expected);
        assert_eq!(hex::encode(payload), "00002f685900000000");
    }

    #[test]
    fn payload_shape_holds_for_random_amounts() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let amount: f64 = rng.gen_range(0.0..=DEFAULT_MAX_INVESTMENT);
            let payload = build_invest_payload(amount).unwrap();
            assert_eq!(payload.len(), INVEST_PAYLOAD_LEN);
            assert_eq!(payload[0], INVEST_OPCODE);

            let expected = (amount * 1e9).floor() as u64;
            assert_eq!(decode_invest_payload(&payload).unwrap(), expected);
        }
    }

    #[test]
    fn unrepresentable_amounts_fail() {
        assert!(build_invest_payload(-0.5).is_err());
        assert!(build_invest_payload(f64::NAN).is_err());
        assert!(build_invest_payload(1e12).is_err());
    }

    #[test]
    fn decode_rejects_bad_payloads() {
        assert!(decode_invest_payload(&[0u8; 8]).is_err());
        assert!(decode_invest_payload(&[0u8; 10]).is_err());
        let mut wrong_opcode = [0u8; 9];
        wrong_opcode[0] = 1;
        let err = decode_invest_payload(&wrong_opcode).unwrap_err();
        assert!(err.to_string().contains("unexpected opcode 1"));
    }

    #[test]
    fn instruction_accounts() {
        let investor = [0xABu8; 32];
        let t = targets();
        let ix = build_invest_instruction(&investor, &t, 2.0).unwrap();

        assert_eq!(ix.program_id, t.program_id);
        assert_eq!(
            ix.accounts,
            vec![
                SolAccountMeta::signer(investor),
                SolAccountMeta::writable(t.vault),
                SolAccountMeta::readonly(SYSTEM_PROGRAM_ID),
            ]
        );
        assert_eq!(decode_invest_payload(&ix.data).unwrap(), 2_000_000_000);
    }

    #[test]
    fn default_addresses_decode() {
        let t = targets();
        assert_ne!(t.program_id, t.vault);
        assert_ne!(t.program_id, SYSTEM_PROGRAM_ID);
    }
}
