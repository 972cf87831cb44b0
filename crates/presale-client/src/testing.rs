//! Scripted collaborators for unit tests.

use std::cell::{Cell, RefCell};

use chain_sol::SolTransaction;

use crate::error::{RpcError, WalletError};
use crate::rpc::NetworkClient;
use crate::types::{
    Commitment, ConfirmationRequest, ConfirmationStatus, LatestBlockhash, SendOptions,
};
use crate::wallet::{KeypairWallet, WalletSigner};

pub const BLOCKHASH: &str = "JDHLNXsvkv7YzRGceg4itTHorpRJeLifaKrcwQWygAmu";

/// Records every call and answers from a script.
#[derive(Default)]
pub struct FakeNetwork {
    balance: u64,
    balance_error: Option<String>,
    blockhash: Option<String>,
    send_error: Option<String>,
    confirmation_error: Option<String>,
    on_balance: Option<Box<dyn Fn()>>,
    stall_balance: bool,

    calls: RefCell<Vec<&'static str>>,
    balance_queries: RefCell<Vec<String>>,
    commitments: RefCell<Vec<Commitment>>,
    sent: RefCell<Vec<(Vec<u8>, SendOptions)>>,
    confirmations: RefCell<Vec<ConfirmationRequest>>,
}

impl FakeNetwork {
    pub fn with_balance(balance: u64) -> Self {
        Self {
            balance,
            ..Self::default()
        }
    }

    pub fn failing_balance(mut self, msg: &str) -> Self {
        self.balance_error = Some(msg.to_string());
        self
    }

    pub fn with_blockhash(mut self, blockhash: &str) -> Self {
        self.blockhash = Some(blockhash.to_string());
        self
    }

    pub fn rejecting_send(mut self, msg: &str) -> Self {
        self.send_error = Some(msg.to_string());
        self
    }

    pub fn failing_confirmation(mut self, msg: &str) -> Self {
        self.confirmation_error = Some(msg.to_string());
        self
    }

    /// Run `f` while the balance query is in flight.
    pub fn observe_balance(mut self, f: impl Fn() + 'static) -> Self {
        self.on_balance = Some(Box::new(f));
        self
    }

    /// Never answer the balance query.
    pub fn stalling_balance(mut self) -> Self {
        self.stall_balance = true;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn balance_queries(&self) -> Vec<String> {
        self.balance_queries.borrow().clone()
    }

    pub fn blockhash_commitments(&self) -> Vec<Commitment> {
        self.commitments.borrow().clone()
    }

    pub fn sent(&self) -> Vec<(Vec<u8>, SendOptions)> {
        self.sent.borrow().clone()
    }

    pub fn confirmations(&self) -> Vec<ConfirmationRequest> {
        self.confirmations.borrow().clone()
    }
}

impl NetworkClient for FakeNetwork {
    async fn get_balance(&self, address: &str) -> Result<u64, RpcError> {
        self.calls.borrow_mut().push("get_balance");
        self.balance_queries.borrow_mut().push(address.to_string());
        if let Some(f) = &self.on_balance {
            f();
        }
        if self.stall_balance {
            std::future::pending::<()>().await;
        }
        match &self.balance_error {
            Some(msg) => Err(RpcError::Request(msg.clone())),
            None => Ok(self.balance),
        }
    }

    async fn get_latest_blockhash(&self, commitment: Commitment) -> Result<LatestBlockhash, RpcError> {
        self.calls.borrow_mut().push("get_latest_blockhash");
        self.commitments.borrow_mut().push(commitment);
        Ok(LatestBlockhash {
            blockhash: self.blockhash.clone().unwrap_or_else(|| BLOCKHASH.to_string()),
            last_valid_block_height: 150,
        })
    }

    async fn send_raw_transaction(
        &self,
        wire: &[u8],
        options: SendOptions,
    ) -> Result<String, RpcError> {
        self.calls.borrow_mut().push("send_raw_transaction");
        self.sent.borrow_mut().push((wire.to_vec(), options));
        if let Some(msg) = &self.send_error {
            return Err(RpcError::Transaction(msg.clone()));
        }
        chain_sol::transaction_id(wire).map_err(|e| RpcError::Request(e.to_string()))
    }

    async fn confirm_transaction(
        &self,
        request: &ConfirmationRequest,
    ) -> Result<ConfirmationStatus, RpcError> {
        self.calls.borrow_mut().push("confirm_transaction");
        self.confirmations.borrow_mut().push(request.clone());
        Ok(ConfirmationStatus {
            err: self.confirmation_error.clone(),
        })
    }
}

/// A keypair wallet that can be told to decline, counting sign requests.
pub struct ScriptedWallet {
    inner: KeypairWallet,
    rejection: Option<String>,
    sign_requests: Cell<usize>,
}

impl ScriptedWallet {
    pub fn approving(seed: [u8; 32]) -> Self {
        Self {
            inner: KeypairWallet::from_seed(seed),
            rejection: None,
            sign_requests: Cell::new(0),
        }
    }

    pub fn rejecting(seed: [u8; 32], reason: &str) -> Self {
        Self {
            rejection: Some(reason.to_string()),
            ..Self::approving(seed)
        }
    }

    pub fn sign_requests(&self) -> usize {
        self.sign_requests.get()
    }
}

impl WalletSigner for ScriptedWallet {
    fn public_key(&self) -> [u8; 32] {
        self.inner.public_key()
    }

    async fn sign_transaction(&self, tx: &SolTransaction) -> Result<Vec<u8>, WalletError> {
        self.sign_requests.set(self.sign_requests.get() + 1);
        match &self.rejection {
            Some(reason) => Err(WalletError::Rejected(reason.clone())),
            None => self.inner.sign_transaction(tx).await,
        }
    }
}
