use soroban_sdk::{contracttype, panic_with_error, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::errors::VaultError;
use crate::storage;

/// The operation a signed request authorizes
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum RequestKind {
    Deposit,
    Withdraw,
}

/// An off-chain-signed deposit or withdrawal request. The signed payload is
/// the XDR serialization of this struct, so every field is bound by the
/// signature. `domain` is the vault's own contract address; contract
/// addresses are derived from the network they live on, which prevents both
/// cross-contract and cross-chain replay.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AuthorizedRequest {
    pub kind: RequestKind,
    pub asset: Address,
    /// The payer (deposits) or share owner (withdrawals) that signed
    pub account: Address,
    pub destination: Address,
    /// Underlying amount for deposits, share count for withdrawals
    pub value: i128,
    pub nonce: u64,
    pub deadline: u64,
    pub domain: Address,
}

/// The exact bytes an account signs to authorize a request
pub fn payload(e: &Env, request: &AuthorizedRequest) -> Bytes {
    request.clone().to_xdr(e)
}

/// Verify a signed request against the account's registered signing key.
///
/// Checks run strictly in order: deadline, nonce, signature. No state is
/// touched; the nonce is consumed by the caller in the same transaction as
/// the balance mutation it authorizes.
///
/// ### Panics
/// - `ExpiredAuthorization` if the deadline has elapsed
/// - `NonceMismatch` if the nonce is not the account's current counter
/// - `InvalidSignature` if the account has no registered signing key
/// - host crypto error if the signature does not verify
pub fn verify(e: &Env, request: &AuthorizedRequest, signature: &BytesN<64>) {
    if e.ledger().timestamp() > request.deadline {
        panic_with_error!(e, VaultError::ExpiredAuthorization);
    }

    let current_nonce = storage::get_nonce(e, &request.account);
    if request.nonce != current_nonce {
        panic_with_error!(e, VaultError::NonceMismatch);
    }

    let signer = match storage::get_signer(e, &request.account) {
        Some(signer) => signer,
        None => panic_with_error!(e, VaultError::InvalidSignature),
    };

    let message = payload(e, request);
    e.crypto().ed25519_verify(&signer, &message, signature);
}

/// Advance the account's nonce. Called in the same transaction as the
/// authorized mutation so a reverted request never consumes a nonce.
pub fn consume_nonce(e: &Env, account: &Address) {
    let nonce = storage::get_nonce(e, account);
    storage::set_nonce(e, account, &(nonce + 1));
}
