//! Network client seam.
//!
//! The presale client never talks JSON-RPC itself; callers hand in an
//! implementation backed by whatever transport their environment provides.

use crate::error::RpcError;
use crate::types::{Commitment, ConfirmationRequest, ConfirmationStatus, LatestBlockhash, SendOptions};

#[allow(async_fn_in_trait)]
pub trait NetworkClient {
    /// Balance of `address` (Base58) in lamports.
    async fn get_balance(&self, address: &str) -> Result<u64, RpcError>;

    async fn get_latest_blockhash(&self, commitment: Commitment) -> Result<LatestBlockhash, RpcError>;

    /// Broadcast a signed wire transaction and return its Base58 signature.
    async fn send_raw_transaction(
        &self,
        wire: &[u8],
        options: SendOptions,
    ) -> Result<String, RpcError>;

    /// Wait until the transaction lands or its blockhash expires.
    async fn confirm_transaction(
        &self,
        request: &ConfirmationRequest,
    ) -> Result<ConfirmationStatus, RpcError>;
}
