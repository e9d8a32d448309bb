use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::dependencies::strategy::StrategyClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::require_asset;

/// Reconcile an asset's liquid buffer with its target: harvest when the
/// strategy signals pending rewards, then push the surplus out or pull the
/// shortfall back in. A no-op when no strategy is bound.
pub fn execute_rebalance(e: &Env, asset: &Address) {
    let data = require_asset(e, asset);
    let strategy = match &data.strategy {
        Some(strategy) => strategy.clone(),
        None => return,
    };
    let client = StrategyClient::new(e, &strategy);
    let token_client = token::Client::new(e, asset);
    let vault = e.current_contract_address();

    // Harvest runs regardless of whether a buffer move also happens
    let mut harvested = false;
    if client.should_harvest(asset) {
        client.harvest(asset);
        harvested = true;
    }

    // Buffer is re-read after every strategy call, return values are untrusted
    let buffer = token_client.balance(&vault);
    let mut pushed: i128 = 0;
    let mut pulled: i128 = 0;
    if buffer > data.buffer_target {
        pushed = buffer - data.buffer_target;
        token_client.transfer(&vault, &strategy, &pushed);
        client.deposit(asset, &pushed);
    } else if buffer < data.buffer_target {
        let shortfall = data.buffer_target - buffer;
        let invested = client.invested(asset);
        let pull = if shortfall < invested { shortfall } else { invested };
        if pull > 0 && client.is_liquid(asset, &pull) {
            client.withdraw(asset, &pull);
            pulled = token_client.balance(&vault) - buffer;
        }
    }

    VaultEvents::rebalance(e, asset.clone(), pushed, pulled, harvested);
}

/// Force a full strategy exit for an asset regardless of buffer math. Used
/// prior to unbinding or in an emergency; the binding stays in place.
pub fn execute_empty_strategy(e: &Env, asset: &Address) -> i128 {
    let data = require_asset(e, asset);
    let strategy = match &data.strategy {
        Some(strategy) => strategy.clone(),
        None => panic_with_error!(e, VaultError::NoBoundStrategy),
    };

    let token_client = token::Client::new(e, asset);
    let vault = e.current_contract_address();
    let buffer_before = token_client.balance(&vault);

    StrategyClient::new(e, &strategy).exit(asset);

    // Untrusted boundary: measure what actually arrived
    let returned = token_client.balance(&vault) - buffer_before;
    VaultEvents::empty_strategy(e, asset.clone(), strategy, returned);
    returned
}
