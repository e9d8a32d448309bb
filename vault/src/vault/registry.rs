use soroban_sdk::{panic_with_error, Address, Env};

use crate::dependencies::strategy::StrategyClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::AssetData;

/// Fetch the registry record for an asset, panicking if it is not supported
pub fn require_asset(e: &Env, asset: &Address) -> AssetData {
    match storage::get_asset(e, asset) {
        Some(data) => data,
        None => panic_with_error!(e, VaultError::UnsupportedAsset),
    }
}

pub fn execute_add_asset(e: &Env, asset: &Address, buffer_target: i128) {
    if buffer_target < 0 {
        panic_with_error!(e, VaultError::InvalidAmount);
    }
    if storage::has_asset(e, asset) {
        panic_with_error!(e, VaultError::AlreadySupported);
    }

    let data = AssetData {
        buffer_target,
        strategy: None,
        total_shares: 0,
    };
    storage::set_asset(e, asset, &data);

    let mut assets = storage::get_asset_list(e);
    assets.push_back(asset.clone());
    storage::set_asset_list(e, &assets);

    VaultEvents::add_asset(e, asset.clone(), buffer_target);
}

/// Remove an asset from the registry. Removal is refused while shares are
/// outstanding or a strategy is bound, so existing holders can never be
/// stranded with unredeemable shares.
pub fn execute_remove_asset(e: &Env, asset: &Address) {
    let data = require_asset(e, asset);
    if data.total_shares > 0 {
        panic_with_error!(e, VaultError::SharesOutstanding);
    }
    if data.strategy.is_some() {
        panic_with_error!(e, VaultError::StrategyStillInvested);
    }

    storage::remove_asset(e, asset);

    let mut assets = storage::get_asset_list(e);
    if let Some(index) = assets.first_index_of(asset) {
        assets.remove_unchecked(index);
    }
    storage::set_asset_list(e, &assets);

    VaultEvents::remove_asset(e, asset.clone());
}

pub fn execute_set_buffer_target(e: &Env, asset: &Address, buffer_target: i128) {
    if buffer_target < 0 {
        panic_with_error!(e, VaultError::InvalidAmount);
    }
    let mut data = require_asset(e, asset);
    data.buffer_target = buffer_target;
    storage::set_asset(e, asset, &data);

    VaultEvents::set_buffer_target(e, asset.clone(), buffer_target);
}

pub fn execute_bind_strategy(e: &Env, asset: &Address, strategy: &Address) {
    let mut data = require_asset(e, asset);
    if data.strategy.is_some() {
        panic_with_error!(e, VaultError::StrategyAlreadyBound);
    }
    data.strategy = Some(strategy.clone());
    storage::set_asset(e, asset, &data);

    VaultEvents::bind_strategy(e, asset.clone(), strategy.clone());
}

/// Unbind the asset's strategy. A full exit runs first and the binding is
/// only cleared once the strategy reports nothing left invested.
pub fn execute_unbind_strategy(e: &Env, asset: &Address) {
    let mut data = require_asset(e, asset);
    let strategy = match &data.strategy {
        Some(strategy) => strategy.clone(),
        None => panic_with_error!(e, VaultError::NoBoundStrategy),
    };

    let client = StrategyClient::new(e, &strategy);
    let returned = client.exit(asset);
    // Untrusted boundary: re-query instead of trusting the exit return value
    if client.invested(asset) > 0 {
        panic_with_error!(e, VaultError::StrategyStillInvested);
    }

    data.strategy = None;
    storage::set_asset(e, asset, &data);

    VaultEvents::unbind_strategy(e, asset.clone(), strategy, returned);
}
