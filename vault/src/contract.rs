#![allow(clippy::too_many_arguments)]

use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, Address, BytesN, Env, Vec,
};

use crate::auth::{self, AuthorizedRequest, RequestKind};
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::{AssetData, ConversionDirection, Rounding};
use crate::vault;
use crate::vault::TokenPull;

#[contract]
pub struct YieldVaultContract;

#[contractclient(name = "YieldVaultClient")]
pub trait YieldVault {
    /// Returns the current owner of the vault
    fn owner(e: Env) -> Address;

    /// Returns the automation principal permitted to trigger rebalancing
    fn automation(e: Env) -> Address;

    /// (Owner only) Set a new address to become the owner of the vault. This
    /// must be accepted by the new owner w/ `accept_owner` to take effect.
    ///
    /// ### Arguments
    /// * `new_owner` - The new owner address
    ///
    /// ### Panics
    /// If the caller is not the owner
    fn propose_owner(e: Env, new_owner: Address);

    /// (Proposed owner only) Accept the owner role. Ensures the new owner
    /// can safely submit transactions before taking over the vault.
    ///
    /// ### Panics
    /// If the caller is not the proposed owner
    fn accept_owner(e: Env);

    /// (Owner only) Set the automation principal allowed to call `rebalance`
    ///
    /// ### Arguments
    /// * `automation` - The new automation address
    ///
    /// ### Panics
    /// If the caller is not the owner
    fn set_automation(e: Env, automation: Address);

    /// (Owner only) Register an asset so it becomes eligible for deposits
    ///
    /// ### Arguments
    /// * `asset` - The underlying token contract
    /// * `buffer_target` - Minimum amount kept liquid for instant withdrawal
    ///
    /// ### Panics
    /// - `AlreadySupported` if the asset is already registered
    /// - `InvalidAmount` if the buffer target is negative
    fn add_asset(e: Env, asset: Address, buffer_target: i128);

    /// (Owner only) Remove an asset from the registry
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the asset is not registered
    /// - `SharesOutstanding` if shares are still outstanding for the asset
    /// - `StrategyStillInvested` if a strategy is still bound
    fn remove_asset(e: Env, asset: Address);

    /// (Owner only) Update an asset's liquidity buffer target. Lowering the
    /// target does not move funds by itself; an explicit `rebalance` call is
    /// required for the change to take effect on holdings.
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the asset is not registered
    /// - `InvalidAmount` if the buffer target is negative
    fn set_buffer_target(e: Env, asset: Address, buffer_target: i128);

    /// (Owner only) Bind a strategy to an asset. At most one strategy can be
    /// bound per asset at a time.
    ///
    /// ### Arguments
    /// * `asset` - The underlying token contract
    /// * `strategy` - The strategy contract to bind
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the asset is not registered
    /// - `StrategyAlreadyBound` if the asset already has a strategy
    fn bind_strategy(e: Env, asset: Address, strategy: Address);

    /// (Owner only) Unbind the asset's strategy. Triggers a full strategy
    /// exit first; the binding is never cleared while funds remain invested.
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the asset is not registered
    /// - `NoBoundStrategy` if no strategy is bound
    /// - `StrategyStillInvested` if the strategy reports invested funds
    ///   after the exit
    fn unbind_strategy(e: Env, asset: Address);

    /// (Owner only) Force a full strategy exit for an asset regardless of
    /// buffer math. The binding stays in place.
    ///
    /// ### Returns
    /// The amount of underlying actually returned to the buffer
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the asset is not registered
    /// - `NoBoundStrategy` if no strategy is bound
    fn empty_strategy(e: Env, asset: Address) -> i128;

    /// (Owner or automation) Reconcile the asset's liquid buffer with its
    /// target: harvest when the strategy signals pending rewards, push the
    /// surplus into the strategy, or pull the shortfall back when the
    /// strategy confirms it is withdrawable. A no-op when no strategy is
    /// bound.
    ///
    /// ### Arguments
    /// * `caller` - The address triggering the rebalance
    ///
    /// ### Panics
    /// - `Unauthorized` if the caller is neither owner nor automation
    /// - `UnsupportedAsset` if the asset is not registered
    fn rebalance(e: Env, caller: Address, asset: Address);

    /// Deposits underlying and mints shares to `destination`
    ///
    /// Pulls `amount` of the asset from `payer` and mints shares at the
    /// exchange rate in effect before the transfer. `destination` may differ
    /// from `payer` for deposit-on-behalf-of flows.
    ///
    /// ### Arguments
    /// * `asset` - The underlying token contract
    /// * `payer` - The address funding the deposit (must authorize)
    /// * `destination` - The address credited with the minted shares
    /// * `amount` - Amount of underlying to deposit (must be > 0)
    ///
    /// ### Returns
    /// Amount of shares minted to destination
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the asset is not registered
    /// - `ZeroAmount` if amount <= 0
    fn deposit(e: Env, asset: Address, payer: Address, destination: Address, amount: i128)
        -> i128;

    /// Deposits on behalf of `payer` with an off-chain-signed authorization
    ///
    /// The submitter needs no authorization from `payer`; the signed request
    /// substitutes for it. The underlying is drawn on the allowance the
    /// payer granted this vault. The nonce is consumed in the same
    /// transaction as the mint, so a reverted request never burns a nonce.
    ///
    /// ### Arguments
    /// * `asset` - The underlying token contract
    /// * `payer` - The account that signed the request
    /// * `destination` - The address credited with the minted shares
    /// * `amount` - Amount of underlying to deposit (must be > 0)
    /// * `nonce` - The payer's current authorization nonce
    /// * `deadline` - Timestamp after which the authorization is void
    /// * `signature` - ed25519 signature over the request payload
    ///
    /// ### Returns
    /// Amount of shares minted to destination
    ///
    /// ### Panics
    /// - `ExpiredAuthorization` if the deadline has elapsed
    /// - `NonceMismatch` if the nonce is stale or mismatched
    /// - `InvalidSignature` if the payer has no registered signing key
    /// - `UnsupportedAsset` / `ZeroAmount` as for `deposit`
    fn deposit_with_authorization(
        e: Env,
        asset: Address,
        payer: Address,
        destination: Address,
        amount: i128,
        nonce: u64,
        deadline: u64,
        signature: BytesN<64>,
    ) -> i128;

    /// Burns shares from `owner` and pays underlying to `destination`
    ///
    /// The payout comes strictly from the liquid buffer. The vault does not
    /// unwind the strategy inline; liquidity must have been rebalanced in
    /// beforehand.
    ///
    /// ### Arguments
    /// * `asset` - The underlying token contract
    /// * `owner` - The share owner (must authorize)
    /// * `destination` - The address paid from the buffer
    /// * `shares` - Amount of shares to burn (must be > 0)
    ///
    /// ### Returns
    /// Amount of underlying paid to destination
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the asset is not registered
    /// - `ZeroAmount` if shares <= 0
    /// - `InsufficientShares` if owner holds fewer shares than requested
    /// - `InsufficientLiquidity` if the buffer cannot cover the amount owed
    fn withdraw(e: Env, asset: Address, owner: Address, destination: Address, shares: i128)
        -> i128;

    /// Withdraws on behalf of `owner` with an off-chain-signed authorization
    ///
    /// ### Arguments
    /// * `asset` - The underlying token contract
    /// * `owner` - The account that signed the request
    /// * `destination` - The address paid from the buffer
    /// * `shares` - Amount of shares to burn (must be > 0)
    /// * `nonce` - The owner's current authorization nonce
    /// * `deadline` - Timestamp after which the authorization is void
    /// * `signature` - ed25519 signature over the request payload
    ///
    /// ### Returns
    /// Amount of underlying paid to destination
    ///
    /// ### Panics
    /// - `ExpiredAuthorization` if the deadline has elapsed
    /// - `NonceMismatch` if the nonce is stale or mismatched
    /// - `InvalidSignature` if the owner has no registered signing key
    /// - `UnsupportedAsset` / `ZeroAmount` / `InsufficientShares` /
    ///   `InsufficientLiquidity` as for `withdraw`
    fn withdraw_with_authorization(
        e: Env,
        asset: Address,
        owner: Address,
        destination: Address,
        shares: i128,
        nonce: u64,
        deadline: u64,
        signature: BytesN<64>,
    ) -> i128;

    /// Moves shares between accounts on the same asset ledger. Totals are
    /// unchanged and no underlying moves.
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the asset is not registered
    /// - `ZeroAmount` if shares <= 0
    /// - `InsufficientShares` if `from` holds fewer shares than requested
    fn transfer_shares(e: Env, asset: Address, from: Address, to: Address, shares: i128);

    /// Returns the share balance of an account for an asset
    fn balance_of_shares(e: Env, asset: Address, account: Address) -> i128;

    /// Converts between shares and underlying at the current exchange rate
    /// without mutating state, so clients can preview operations
    ///
    /// ### Arguments
    /// * `value` - The share or underlying amount to convert
    /// * `direction` - Which way to convert
    /// * `rounding` - Explicit rounding applied to the conversion
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the asset is not registered
    /// - `InvalidAmount` if value < 0
    fn convert_shares(
        e: Env,
        asset: Address,
        value: i128,
        direction: ConversionDirection,
        rounding: Rounding,
    ) -> i128;

    /// Returns the total outstanding shares for an asset
    fn total_shares(e: Env, asset: Address) -> i128;

    /// Returns the total underlying backing an asset's shares: the liquid
    /// buffer plus whatever the bound strategy reports as invested
    fn total_underlying(e: Env, asset: Address) -> i128;

    /// Returns the list of supported assets
    fn supported_assets(e: Env) -> Vec<Address>;

    /// Returns the registry record for an asset
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the asset is not registered
    fn asset_config(e: Env, asset: Address) -> AssetData;

    /// Registers the ed25519 public key that signs authorization requests
    /// for `account`
    ///
    /// ### Arguments
    /// * `account` - The account registering a key (must authorize)
    /// * `public_key` - The ed25519 public key
    fn set_signer(e: Env, account: Address, public_key: BytesN<32>);

    /// Returns the registered signing key for an account, if any
    fn signer(e: Env, account: Address) -> Option<BytesN<32>>;

    /// Returns the current authorization nonce for an account
    fn nonce(e: Env, account: Address) -> u64;
}

#[contractimpl]
impl YieldVaultContract {
    /// Initializes the vault
    ///
    /// ### Arguments
    /// * `owner` - The vault owner, holder of the admin surface
    /// * `automation` - The principal permitted to trigger rebalancing
    pub fn __constructor(e: Env, owner: Address, automation: Address) {
        owner.require_auth();
        storage::set_owner(&e, &owner);
        storage::set_automation(&e, &automation);
        storage::set_asset_list(&e, &Vec::new(&e));
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl YieldVault for YieldVaultContract {
    fn owner(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_owner(&e)
    }

    fn automation(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_automation(&e)
    }

    fn propose_owner(e: Env, new_owner: Address) {
        storage::extend_instance(&e);
        let owner = storage::get_owner(&e);
        owner.require_auth();

        storage::set_proposed_owner(&e, &new_owner);
        VaultEvents::propose_owner(&e, owner, new_owner);
    }

    fn accept_owner(e: Env) {
        storage::extend_instance(&e);
        let proposed = match storage::get_proposed_owner(&e) {
            Some(proposed) => proposed,
            None => panic_with_error!(e, VaultError::Unauthorized),
        };
        proposed.require_auth();
        storage::set_owner(&e, &proposed);
        VaultEvents::accept_owner(&e, proposed);
    }

    fn set_automation(e: Env, automation: Address) {
        storage::extend_instance(&e);
        storage::get_owner(&e).require_auth();

        storage::set_automation(&e, &automation);
        VaultEvents::set_automation(&e, automation);
    }

    fn add_asset(e: Env, asset: Address, buffer_target: i128) {
        storage::extend_instance(&e);
        storage::get_owner(&e).require_auth();

        vault::execute_add_asset(&e, &asset, buffer_target);
    }

    fn remove_asset(e: Env, asset: Address) {
        storage::extend_instance(&e);
        storage::get_owner(&e).require_auth();

        vault::execute_remove_asset(&e, &asset);
    }

    fn set_buffer_target(e: Env, asset: Address, buffer_target: i128) {
        storage::extend_instance(&e);
        storage::get_owner(&e).require_auth();

        vault::execute_set_buffer_target(&e, &asset, buffer_target);
    }

    fn bind_strategy(e: Env, asset: Address, strategy: Address) {
        storage::extend_instance(&e);
        storage::get_owner(&e).require_auth();

        vault::execute_bind_strategy(&e, &asset, &strategy);
    }

    fn unbind_strategy(e: Env, asset: Address) {
        storage::extend_instance(&e);
        storage::get_owner(&e).require_auth();

        vault::execute_unbind_strategy(&e, &asset);
    }

    fn empty_strategy(e: Env, asset: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_owner(&e).require_auth();

        vault::execute_empty_strategy(&e, &asset)
    }

    fn rebalance(e: Env, caller: Address, asset: Address) {
        storage::extend_instance(&e);
        caller.require_auth();
        if caller != storage::get_owner(&e) && caller != storage::get_automation(&e) {
            panic_with_error!(e, VaultError::Unauthorized);
        }

        vault::execute_rebalance(&e, &asset);
    }

    fn deposit(
        e: Env,
        asset: Address,
        payer: Address,
        destination: Address,
        amount: i128,
    ) -> i128 {
        storage::extend_instance(&e);
        payer.require_auth();

        vault::execute_deposit(&e, &asset, &payer, &destination, amount, TokenPull::Transfer)
    }

    fn deposit_with_authorization(
        e: Env,
        asset: Address,
        payer: Address,
        destination: Address,
        amount: i128,
        nonce: u64,
        deadline: u64,
        signature: BytesN<64>,
    ) -> i128 {
        storage::extend_instance(&e);
        let request = AuthorizedRequest {
            kind: RequestKind::Deposit,
            asset: asset.clone(),
            account: payer.clone(),
            destination: destination.clone(),
            value: amount,
            nonce,
            deadline,
            domain: e.current_contract_address(),
        };
        auth::verify(&e, &request, &signature);

        let shares =
            vault::execute_deposit(&e, &asset, &payer, &destination, amount, TokenPull::Allowance);
        auth::consume_nonce(&e, &payer);
        shares
    }

    fn withdraw(
        e: Env,
        asset: Address,
        owner: Address,
        destination: Address,
        shares: i128,
    ) -> i128 {
        storage::extend_instance(&e);
        owner.require_auth();

        vault::execute_withdraw(&e, &asset, &owner, &destination, shares)
    }

    fn withdraw_with_authorization(
        e: Env,
        asset: Address,
        owner: Address,
        destination: Address,
        shares: i128,
        nonce: u64,
        deadline: u64,
        signature: BytesN<64>,
    ) -> i128 {
        storage::extend_instance(&e);
        let request = AuthorizedRequest {
            kind: RequestKind::Withdraw,
            asset: asset.clone(),
            account: owner.clone(),
            destination: destination.clone(),
            value: shares,
            nonce,
            deadline,
            domain: e.current_contract_address(),
        };
        auth::verify(&e, &request, &signature);

        let amount = vault::execute_withdraw(&e, &asset, &owner, &destination, shares);
        auth::consume_nonce(&e, &owner);
        amount
    }

    fn transfer_shares(e: Env, asset: Address, from: Address, to: Address, shares: i128) {
        storage::extend_instance(&e);
        from.require_auth();

        vault::execute_transfer_shares(&e, &asset, &from, &to, shares);
    }

    fn balance_of_shares(e: Env, asset: Address, account: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_shares(&e, &asset, &account)
    }

    fn convert_shares(
        e: Env,
        asset: Address,
        value: i128,
        direction: ConversionDirection,
        rounding: Rounding,
    ) -> i128 {
        storage::extend_instance(&e);
        vault::convert(&e, &asset, value, &direction, &rounding)
    }

    fn total_shares(e: Env, asset: Address) -> i128 {
        storage::extend_instance(&e);
        vault::require_asset(&e, &asset).total_shares
    }

    fn total_underlying(e: Env, asset: Address) -> i128 {
        storage::extend_instance(&e);
        let data = vault::require_asset(&e, &asset);
        vault::total_underlying(&e, &asset, &data)
    }

    fn supported_assets(e: Env) -> Vec<Address> {
        storage::extend_instance(&e);
        storage::get_asset_list(&e)
    }

    fn asset_config(e: Env, asset: Address) -> AssetData {
        storage::extend_instance(&e);
        vault::require_asset(&e, &asset)
    }

    fn set_signer(e: Env, account: Address, public_key: BytesN<32>) {
        storage::extend_instance(&e);
        account.require_auth();

        storage::set_signer(&e, &account, &public_key);
        VaultEvents::set_signer(&e, account, public_key);
    }

    fn signer(e: Env, account: Address) -> Option<BytesN<32>> {
        storage::extend_instance(&e);
        storage::get_signer(&e, &account)
    }

    fn nonce(e: Env, account: Address) -> u64 {
        storage::extend_instance(&e);
        storage::get_nonce(&e, &account)
    }
}
