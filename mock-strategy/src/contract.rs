use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env, Vec};

use crate::errors::StrategyError;
use crate::storage;

/// A strategy with a synthetic external position: liquidity can be toggled
/// and rewards injected, so vault orchestration can be exercised end to end
/// without a real yield source.
#[contract]
pub struct MockStrategy;

fn require_position(e: &Env, asset: &Address) -> i128 {
    match storage::get_position(e, asset) {
        Some(position) => position,
        None => panic_with_error!(e, StrategyError::UnsupportedAsset),
    }
}

#[contractimpl]
impl MockStrategy {
    /// Initializes the strategy
    ///
    /// ### Arguments
    /// * `vault` - The vault permitted to move funds
    /// * `assets` - The assets this strategy handles
    /// * `min_harvest` - Pending rewards below this are not worth harvesting
    pub fn __constructor(e: Env, vault: Address, assets: Vec<Address>, min_harvest: i128) {
        storage::set_vault(&e, &vault);
        storage::set_min_harvest(&e, &min_harvest);
        for asset in assets.iter() {
            storage::set_position(&e, &asset, &0);
        }
        storage::extend_instance(&e);
    }

    /// Returns the deployed principal plus accrued yield for an asset
    ///
    /// ### Panics
    /// - `UnsupportedAsset` if the strategy does not handle the asset
    pub fn invested(e: Env, asset: Address) -> i128 {
        storage::extend_instance(&e);
        require_position(&e, &asset)
    }

    /// Returns true if `amount` could be withdrawn immediately
    pub fn is_liquid(e: Env, asset: Address, amount: i128) -> bool {
        storage::extend_instance(&e);
        let position = require_position(&e, &asset);
        storage::get_liquid(&e, &asset) && amount <= position
    }

    /// Returns true if pending rewards meet the minimum harvest threshold
    pub fn should_harvest(e: Env, asset: Address) -> bool {
        storage::extend_instance(&e);
        require_position(&e, &asset);
        let pending = storage::get_pending(&e, &asset);
        pending > 0 && pending >= storage::get_min_harvest(&e)
    }

    /// (Vault only) Record a deposit. The vault transfers the tokens in
    /// before making this call.
    pub fn deposit(e: Env, asset: Address, amount: i128) {
        storage::get_vault(&e).require_auth();
        if amount <= 0 {
            panic_with_error!(e, StrategyError::ZeroAmount);
        }
        let position = require_position(&e, &asset);
        storage::set_position(&e, &asset, &(position + amount));
        storage::extend_instance(&e);
    }

    /// (Vault only) Withdraw `amount` from the position back to the vault
    pub fn withdraw(e: Env, asset: Address, amount: i128) {
        let vault = storage::get_vault(&e);
        vault.require_auth();
        if amount <= 0 {
            panic_with_error!(e, StrategyError::ZeroAmount);
        }
        let position = require_position(&e, &asset);
        if !storage::get_liquid(&e, &asset) {
            panic_with_error!(e, StrategyError::NotLiquid);
        }
        if amount > position {
            panic_with_error!(e, StrategyError::InsufficientPosition);
        }

        storage::set_position(&e, &asset, &(position - amount));
        token::Client::new(&e, &asset).transfer(&e.current_contract_address(), &vault, &amount);
        storage::extend_instance(&e);
    }

    /// (Vault only) Return the full position to the vault. Ignores the
    /// liquidity flag, this is the emergency path.
    pub fn exit(e: Env, asset: Address) -> i128 {
        let vault = storage::get_vault(&e);
        vault.require_auth();
        let position = require_position(&e, &asset);

        if position > 0 {
            storage::set_position(&e, &asset, &0);
            token::Client::new(&e, &asset).transfer(
                &e.current_contract_address(),
                &vault,
                &position,
            );
        }
        storage::extend_instance(&e);
        position
    }

    /// (Vault only) Realize pending rewards into the vault buffer
    pub fn harvest(e: Env, asset: Address) -> i128 {
        let vault = storage::get_vault(&e);
        vault.require_auth();
        require_position(&e, &asset);

        let pending = storage::get_pending(&e, &asset);
        if pending > 0 {
            storage::set_pending(&e, &asset, &0);
            token::Client::new(&e, &asset).transfer(
                &e.current_contract_address(),
                &vault,
                &pending,
            );
        }
        storage::extend_instance(&e);
        pending
    }

    /// (Test control) Toggle whether the position is withdrawable
    pub fn set_liquidity(e: Env, asset: Address, liquid: bool) {
        require_position(&e, &asset);
        storage::set_liquid(&e, &asset, &liquid);
    }

    /// (Test control) Record rewards as pending harvest. The matching tokens
    /// must be minted to the strategy separately.
    pub fn add_reward(e: Env, asset: Address, amount: i128) {
        require_position(&e, &asset);
        let pending = storage::get_pending(&e, &asset);
        storage::set_pending(&e, &asset, &(pending + amount));
    }
}
