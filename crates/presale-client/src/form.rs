//! Investment form state.
//!
//! Holds the text the user typed, the validation error currently shown and
//! the processing flag that disables the submit control while a submission
//! is in flight.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::amount::validate_amount;
use crate::error::{PresaleError, ValidationError};
use crate::ledger::PresaleLedger;
use crate::notify::Notifier;
use crate::rpc::NetworkClient;
use crate::submit::{submit_investment, InvestContext};
use crate::types::{InvestReceipt, NotificationLevel};
use crate::wallet::WalletSigner;

/// Shared read handle on the form's processing flag, for renderers.
#[derive(Debug, Clone, Default)]
pub struct ProcessingFlag(Rc<Cell<bool>>);

impl ProcessingFlag {
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    fn engage(&self) -> ProcessingGuard {
        self.0.set(true);
        ProcessingGuard(self.clone())
    }
}

/// Clears the flag on every exit path, including a dropped future.
struct ProcessingGuard(ProcessingFlag);

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        (self.0).0.set(false);
    }
}

#[derive(Debug)]
pub struct InvestForm {
    ctx: InvestContext,
    input: String,
    error: Option<ValidationError>,
    processing: ProcessingFlag,
}

impl InvestForm {
    pub fn new(ctx: InvestContext) -> Self {
        Self {
            ctx,
            input: String::new(),
            error: None,
            processing: ProcessingFlag::default(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing.is_set()
    }

    pub fn processing_flag(&self) -> ProcessingFlag {
        self.processing.clone()
    }

    /// Replace the input and revalidate. An empty field shows no error.
    pub fn set_input(&mut self, raw: impl Into<String>, presale_ended: bool) {
        self.input = raw.into();
        self.error = if self.input.trim().is_empty() {
            None
        } else {
            validate_amount(&self.input, presale_ended, &self.ctx.limits).err()
        };
    }

    pub fn can_submit(&self) -> bool {
        !self.is_processing() && !self.input.trim().is_empty() && self.error.is_none()
    }

    /// Run one submission and report the outcome.
    ///
    /// On success the deposit is recorded in `ledger` and the input cleared.
    /// On failure the input is left as typed so the user can retry.
    pub async fn submit<W, N, L, T>(
        &mut self,
        wallet: Option<&W>,
        network: &N,
        ledger: &mut L,
        notifier: &mut T,
    ) -> Result<InvestReceipt, PresaleError>
    where
        W: WalletSigner,
        N: NetworkClient,
        L: PresaleLedger,
        T: Notifier,
    {
        let outcome = {
            let _guard = self.processing.engage();
            let presale_ended = ledger.status().ended;
            submit_investment(&self.ctx, &self.input, presale_ended, wallet, network).await
        };

        match &outcome {
            Ok(receipt) => {
                notifier.notify(
                    NotificationLevel::Success,
                    &format!("Successfully invested {} SOL", receipt.amount),
                );
                ledger.add_deposit(receipt.amount);
                self.input.clear();
                self.error = None;
            }
            Err(err) => {
                debug!(%err, "submission failed");
                notifier.notify(NotificationLevel::Error, &failure_message(err));
                if let PresaleError::Validation(v) = err {
                    self.error = Some(v.clone());
                }
            }
        }

        outcome
    }
}

/// Toast text for a failed submission.
pub fn failure_message(err: &PresaleError) -> String {
    match err {
        PresaleError::TransactionFailed(reason) => format!("Transaction failed: {reason}"),
        other => format!("Error: {other}"),
    }
}
