//! The investment submission routine.
//!
//! One pass, no retries: check wallet, validate, check balance, build,
//! fetch blockhash, sign, broadcast, confirm. Any failure ends the attempt.

use chain_sol::compile_transaction;
use tracing::{debug, info, warn};

use crate::amount::{to_lamports, validate_amount, InvestmentLimits};
use crate::config::PresaleConfig;
use crate::error::{PresaleError, WalletError};
use crate::instruction::build_invest_instruction;
use crate::rpc::NetworkClient;
use crate::types::{
    Commitment, ConfirmationRequest, InvestReceipt, PresaleTargets, SendOptions,
};
use crate::wallet::WalletSigner;

/// Everything a submission needs besides the collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestContext {
    pub targets: PresaleTargets,
    pub limits: InvestmentLimits,
    pub commitment: Commitment,
}

impl InvestContext {
    pub fn from_config(config: &PresaleConfig) -> Result<Self, PresaleError> {
        Ok(Self {
            targets: config.targets()?,
            limits: config.limits()?,
            commitment: config.commitment,
        })
    }
}

pub async fn submit_investment<W, N>(
    ctx: &InvestContext,
    raw_input: &str,
    presale_ended: bool,
    wallet: Option<&W>,
    network: &N,
) -> Result<InvestReceipt, PresaleError>
where
    W: WalletSigner,
    N: NetworkClient,
{
    let wallet = wallet.ok_or(WalletError::NotConnected)?;

    let amount = validate_amount(raw_input, presale_ended, &ctx.limits)?;
    let lamports = to_lamports(amount)?;
    if lamports == 0 {
        return Err(PresaleError::Encoding(format!(
            "amount {amount} SOL rounds to zero lamports"
        )));
    }
    let investor = wallet.public_key();
    let investor_address = wallet.address();

    let available = network.get_balance(&investor_address).await?;
    if available < lamports {
        warn!(investor = %investor_address, required = lamports, available, "insufficient balance");
        return Err(PresaleError::InsufficientBalance {
            required: lamports,
            available,
        });
    }

    let instruction = build_invest_instruction(&investor, &ctx.targets, amount)?;
    debug!(payload = %hex::encode(&instruction.data), lamports, "built invest instruction");

    let latest = network.get_latest_blockhash(ctx.commitment).await?;
    let blockhash = chain_sol::blockhash_from_str(&latest.blockhash)
        .map_err(|e| PresaleError::Network(format!("node returned a bad blockhash: {e}")))?;

    let tx = compile_transaction(&[instruction], &investor, &blockhash)?;
    let wire = wallet.sign_transaction(&tx).await?;

    let options = SendOptions {
        skip_preflight: false,
        preflight_commitment: ctx.commitment,
    };
    let signature = network.send_raw_transaction(&wire, options).await?;
    debug!(%signature, "transaction sent, awaiting confirmation");

    let status = network
        .confirm_transaction(&ConfirmationRequest {
            signature: signature.clone(),
            blockhash: latest.blockhash,
            last_valid_block_height: latest.last_valid_block_height,
        })
        .await?;
    if let Some(err) = status.err {
        warn!(%signature, %err, "investment did not land");
        return Err(PresaleError::TransactionFailed(err));
    }

    info!(%signature, investor = %investor_address, amount, "investment confirmed");
    Ok(InvestReceipt {
        signature,
        amount,
        lamports,
    })
}
