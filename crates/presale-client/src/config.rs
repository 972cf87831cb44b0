//! Presale client configuration.
//!
//! Loaded from JSON; every field has a default so a partial document (or
//! `{}`) is valid. Addresses stay as Base58 strings until [`PresaleConfig::targets`].

use serde::{Deserialize, Serialize};

use crate::amount::{
    InvestmentLimits, DEFAULT_MAX_INVESTMENT, DEFAULT_MIN_INVESTMENT, LAMPORTS_PER_SOL,
};
use crate::error::PresaleError;
use crate::instruction::{DEFAULT_PROGRAM_ID, DEFAULT_VAULT_ADDRESS};
use crate::types::{Commitment, PresaleTargets};

pub const DEFAULT_HARD_CAP: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresaleConfig {
    pub program_id: String,
    pub vault_address: String,
    pub min_investment: f64,
    pub max_investment: f64,
    /// Fundraising target in SOL.
    pub hard_cap: f64,
    /// Commitment used for the blockhash fetch and preflight.
    pub commitment: Commitment,
}

impl Default for PresaleConfig {
    fn default() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID.to_string(),
            vault_address: DEFAULT_VAULT_ADDRESS.to_string(),
            min_investment: DEFAULT_MIN_INVESTMENT,
            max_investment: DEFAULT_MAX_INVESTMENT,
            hard_cap: DEFAULT_HARD_CAP,
            commitment: Commitment::Confirmed,
        }
    }
}

impl PresaleConfig {
    pub fn from_json(json: &str) -> Result<Self, PresaleError> {
        let config: PresaleConfig = serde_json::from_str(json)?;
        config.limits()?;
        config.hard_cap()?;
        Ok(config)
    }

    /// Fundraising target, which must be finite and positive.
    pub fn hard_cap(&self) -> Result<f64, PresaleError> {
        let cap = self.hard_cap;
        if !cap.is_finite() || cap <= 0.0 {
            return Err(PresaleError::Config(format!(
                "hardCap must be a positive number, got {cap}"
            )));
        }
        Ok(cap)
    }

    /// Investment bounds, checked for sanity.
    pub fn limits(&self) -> Result<InvestmentLimits, PresaleError> {
        let (min, max) = (self.min_investment, self.max_investment);
        if !min.is_finite() || !max.is_finite() {
            return Err(PresaleError::Config("investment bounds must be finite".into()));
        }
        // Anything under one lamport floors to a zero-value transfer.
        let one_lamport = 1.0 / LAMPORTS_PER_SOL as f64;
        if min < one_lamport {
            return Err(PresaleError::Config(format!(
                "minInvestment must be at least {one_lamport} SOL, got {min}"
            )));
        }
        if min > max {
            return Err(PresaleError::Config(format!(
                "minInvestment {min} exceeds maxInvestment {max}"
            )));
        }
        Ok(InvestmentLimits { min, max })
    }

    pub fn targets(&self) -> Result<PresaleTargets, PresaleError> {
        let program_id = chain_sol::address_to_bytes(&self.program_id)
            .map_err(|e| PresaleError::Config(format!("programId: {e}")))?;
        let vault = chain_sol::address_to_bytes(&self.vault_address)
            .map_err(|e| PresaleError::Config(format!("vaultAddress: {e}")))?;
        Ok(PresaleTargets { program_id, vault })
    }
}
