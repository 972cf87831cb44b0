//! Wallet seam and a local keypair signer.

use std::fmt;

use chain_sol::SolTransaction;
use zeroize::Zeroizing;

use crate::error::WalletError;

/// A connected wallet able to sign for one account.
#[allow(async_fn_in_trait)]
pub trait WalletSigner {
    fn public_key(&self) -> [u8; 32];

    /// Sign `tx` and return it in wire format. Implementations backed by a
    /// user prompt return [`WalletError::Rejected`] when the user declines.
    async fn sign_transaction(&self, tx: &SolTransaction) -> Result<Vec<u8>, WalletError>;

    fn address(&self) -> String {
        chain_sol::bytes_to_address(&self.public_key())
    }
}

/// Signs with an in-memory Ed25519 seed. Useful for scripts and tests.
pub struct KeypairWallet {
    seed: Zeroizing<[u8; 32]>,
    public_key: [u8; 32],
}

impl KeypairWallet {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let public_key = ed25519_dalek::SigningKey::from_bytes(&seed)
            .verifying_key()
            .to_bytes();
        Self {
            seed: Zeroizing::new(seed),
            public_key,
        }
    }

    pub fn generate() -> Self {
        let signing_key = ed25519_dalek::SigningKey::generate(&mut rand::rngs::OsRng);
        Self::from_seed(signing_key.to_bytes())
    }
}

impl fmt::Debug for KeypairWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeypairWallet")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

impl WalletSigner for KeypairWallet {
    fn public_key(&self) -> [u8; 32] {
        self.public_key
    }

    async fn sign_transaction(&self, tx: &SolTransaction) -> Result<Vec<u8>, WalletError> {
        chain_sol::sign_transaction(tx, &self.seed).map_err(|e| WalletError::Signing(e.to_string()))
    }
}
