//! Presale investment client.
//!
//! Validates a contribution amount, encodes the presale program's `invest`
//! instruction, and drives a submission through an injected wallet and
//! network client. Wallets, RPC transport, presale state and notifications
//! are traits so the whole flow runs without a browser or a node.

pub mod amount;
pub mod config;
pub mod error;
pub mod form;
pub mod instruction;
pub mod ledger;
pub mod notify;
pub mod rpc;
pub mod submit;
pub mod types;
pub mod wallet;

#[cfg(test)]
mod testing;

pub use amount::{
    lamports_to_sol, to_lamports, validate_amount, InvestmentLimits, LAMPORTS_PER_SOL,
};
pub use config::PresaleConfig;
pub use error::{PresaleError, RpcError, ValidationError, WalletError};
pub use form::{failure_message, InvestForm, ProcessingFlag};
pub use instruction::{
    build_invest_instruction, build_invest_payload, decode_invest_payload, AMOUNT_OFFSET,
    INVEST_OPCODE, INVEST_PAYLOAD_LEN,
};
pub use ledger::{PresaleLedger, PresaleTracker};
pub use notify::{Notification, NotificationQueue, Notifier};
pub use rpc::NetworkClient;
pub use submit::{submit_investment, InvestContext};
pub use types::{
    Commitment, ConfirmationRequest, ConfirmationStatus, InvestReceipt, LatestBlockhash,
    NotificationLevel, PresaleStatus, PresaleTargets, SendOptions,
};
pub use wallet::{KeypairWallet, WalletSigner};
