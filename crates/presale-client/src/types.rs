use serde::{Deserialize, Serialize};

/// Confirmation durability tier understood by Solana RPC nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

/// Response of `getLatestBlockhash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBlockhash {
    /// Base58 blockhash.
    pub blockhash: String,
    pub last_valid_block_height: u64,
}

/// Options for `sendRawTransaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOptions {
    pub skip_preflight: bool,
    pub preflight_commitment: Commitment,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            skip_preflight: false,
            preflight_commitment: Commitment::Confirmed,
        }
    }
}

/// Blockhash-bounded confirmation strategy for `confirmTransaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRequest {
    pub signature: String,
    pub blockhash: String,
    pub last_valid_block_height: u64,
}

/// Result of awaiting confirmation. `err` carries the on-chain failure, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationStatus {
    pub err: Option<String>,
}

/// Resolved on-chain accounts the invest instruction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresaleTargets {
    pub program_id: [u8; 32],
    pub vault: [u8; 32],
}

/// Outcome of a landed investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestReceipt {
    pub signature: String,
    pub amount: f64,
    pub lamports: u64,
}

/// Snapshot of presale progress for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresaleStatus {
    /// SOL raised so far.
    pub raised: f64,
    pub hard_cap: f64,
    pub ended: bool,
}

impl PresaleStatus {
    /// Raised amount as a percentage of the hard cap, clamped to `0..=100`.
    pub fn progress_percent(&self) -> f64 {
        if self.hard_cap.is_nan() || self.hard_cap <= 0.0 {
            return 0.0;
        }
        (self.raised / self.hard_cap * 100.0).clamp(0.0, 100.0)
    }

    pub fn remaining(&self) -> f64 {
        (self.hard_cap - self.raised).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commitment_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Commitment::Confirmed).unwrap(), "\"confirmed\"");
        let parsed: Commitment = serde_json::from_str("\"finalized\"").unwrap();
        assert_eq!(parsed, Commitment::Finalized);
        assert_eq!(Commitment::default().as_str(), "confirmed");
    }

    #[test]
    fn send_options_default_runs_preflight_at_confirmed() {
        let opts = SendOptions::default();
        assert!(!opts.skip_preflight);
        assert_eq!(opts.preflight_commitment, Commitment::Confirmed);
        assert_eq!(
            serde_json::to_string(&opts).unwrap(),
            r#"{"skipPreflight":false,"preflightCommitment":"confirmed"}"#
        );
    }

    #[test]
    fn latest_blockhash_parses_rpc_shape() {
        let json = r#"{"blockhash":"11111111111111111111111111111111","lastValidBlockHeight":42}"#;
        let parsed: LatestBlockhash = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.last_valid_block_height, 42);
    }

    #[test]
    fn progress_is_clamped() {
        let status = PresaleStatus {
            raised: 250.0,
            hard_cap: 1000.0,
            ended: false,
        };
        assert_eq!(status.progress_percent(), 25.0);
        assert_eq!(status.remaining(), 750.0);

        let over = PresaleStatus {
            raised: 1500.0,
            ..status
        };
        assert_eq!(over.progress_percent(), 100.0);
        assert_eq!(over.remaining(), 0.0);
    }

    #[test]
    fn progress_with_zero_cap_is_zero() {
        let status = PresaleStatus {
            raised: 10.0,
            hard_cap: 0.0,
            ended: false,
        };
        assert_eq!(status.progress_percent(), 0.0);
    }
}
