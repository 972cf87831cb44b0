//! Investment amount validation and unit conversion.
//!
//! Amounts are entered in SOL as free text and revalidated on every change.
//! On-chain they travel as lamports (1 SOL = 10^9 lamports), floored.

use serde::{Deserialize, Serialize};

use crate::error::{PresaleError, ValidationError};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub const DEFAULT_MIN_INVESTMENT: f64 = 0.000_000_01;
pub const DEFAULT_MAX_INVESTMENT: f64 = 5000.0;

/// 2^64, the first value a floored lamport amount can no longer hold.
const U64_CEILING: f64 = 18_446_744_073_709_551_616.0;

/// Inclusive bounds on a single contribution, in SOL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for InvestmentLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_INVESTMENT,
            max: DEFAULT_MAX_INVESTMENT,
        }
    }
}

/// Validate user input against the presale state and limits.
///
/// Rules are checked in order and the first failure wins:
/// ended presale, unparseable or non-positive input, below `min`, above `max`.
pub fn validate_amount(
    raw: &str,
    presale_ended: bool,
    limits: &InvestmentLimits,
) -> Result<f64, ValidationError> {
    if presale_ended {
        return Err(ValidationError::PresaleEnded);
    }

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount)?;

    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }
    if value < limits.min {
        return Err(ValidationError::BelowMinimum { min: limits.min });
    }
    if value > limits.max {
        return Err(ValidationError::AboveMaximum { max: limits.max });
    }

    Ok(value)
}

/// Convert a SOL amount to lamports: `floor(amount * 1e9)`.
pub fn to_lamports(amount: f64) -> Result<u64, PresaleError> {
    let scaled = (amount * LAMPORTS_PER_SOL as f64).floor();

    if !scaled.is_finite() || scaled < 0.0 || scaled >= U64_CEILING {
        return Err(PresaleError::Encoding(format!(
            "amount {amount} is not representable as u64 lamports"
        )));
    }

    Ok(scaled as u64)
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
