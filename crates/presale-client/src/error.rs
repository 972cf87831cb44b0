use thiserror::Error;

/// User-correctable problems with the entered amount.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("presale has ended")]
    PresaleEnded,

    #[error("invalid amount")]
    InvalidAmount,

    #[error("below minimum investment of {min} SOL")]
    BelowMinimum { min: f64 },

    #[error("above maximum investment of {max} SOL")]
    AboveMaximum { max: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("wallet required: connect a wallet first")]
    NotConnected,

    #[error("wallet rejected the request: {0}")]
    Rejected(String),

    #[error("wallet signing failed: {0}")]
    Signing(String),
}

/// Failures reported by a network client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    /// The request itself failed (transport, timeout, malformed response).
    #[error("rpc request failed: {0}")]
    Request(String),

    /// The node accepted the request but the transaction did not land
    /// (preflight simulation failure, expired blockhash, program error).
    #[error("transaction rejected: {0}")]
    Transaction(String),
}

#[derive(Debug, Error)]
pub enum PresaleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("insufficient balance: need {required} lamports, have {available}")]
    InsufficientBalance { required: u64, available: u64 },

    #[error("network error: {0}")]
    Network(String),

    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PresaleError {
    /// Whether this belongs to the dedicated "transaction failed" class
    /// (broadcast or confirmation failure) rather than a generic error.
    pub fn is_transaction_failure(&self) -> bool {
        matches!(self, PresaleError::TransactionFailed(_))
    }
}

impl From<RpcError> for PresaleError {
    fn from(e: RpcError) -> Self {
        match e {
            RpcError::Request(msg) => PresaleError::Network(msg),
            RpcError::Transaction(msg) => PresaleError::TransactionFailed(msg),
        }
    }
}

impl From<chain_sol::SolError> for PresaleError {
    fn from(e: chain_sol::SolError) -> Self {
        PresaleError::Encoding(format!("SOL: {e}"))
    }
}

impl From<serde_json::Error> for PresaleError {
    fn from(e: serde_json::Error) -> Self {
        PresaleError::Config(e.to_string())
    }
}
