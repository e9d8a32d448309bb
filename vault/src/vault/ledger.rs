use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::dependencies::strategy::StrategyClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::{AssetData, ConversionDirection, Rounding};
use crate::vault::require_asset;

/// How a deposit pulls the underlying from the payer
pub enum TokenPull {
    /// Direct transfer, the payer authorizes the call
    Transfer,
    /// Draw on the allowance the payer granted the vault, used for
    /// signature-authorized deposits submitted by a third party
    Allowance,
}

/// Total underlying value backing an asset's shares: the vault's liquid
/// token balance plus whatever the bound strategy reports as invested.
pub fn total_underlying(e: &Env, asset: &Address, data: &AssetData) -> i128 {
    let buffer = token::Client::new(e, asset).balance(&e.current_contract_address());
    match &data.strategy {
        Some(strategy) => buffer + StrategyClient::new(e, strategy).invested(asset),
        None => buffer,
    }
}

/// Convert between shares and underlying at the current exchange rate.
/// The rounding direction is an explicit input; callers that must not
/// over-pay round down, callers where conservatism favors the vault round up.
pub fn convert(
    e: &Env,
    asset: &Address,
    value: i128,
    direction: &ConversionDirection,
    rounding: &Rounding,
) -> i128 {
    if value < 0 {
        panic_with_error!(e, VaultError::InvalidAmount);
    }
    let data = require_asset(e, asset);
    let underlying = total_underlying(e, asset, &data);

    let (numerator, denominator) = match direction {
        ConversionDirection::ToShares => (data.total_shares, underlying),
        ConversionDirection::ToUnderlying => (underlying, data.total_shares),
    };
    // Bootstrap rate is 1:1 while either side of the ratio is empty
    if numerator == 0 || denominator == 0 {
        return value;
    }
    match rounding {
        Rounding::Down => value.fixed_mul_floor(e, &numerator, &denominator),
        Rounding::Up => value.fixed_mul_ceil(e, &numerator, &denominator),
    }
}

/// Pull `amount` of the asset from `payer` and mint shares to `destination`
/// at the exchange rate in effect before the transfer lands.
pub fn execute_deposit(
    e: &Env,
    asset: &Address,
    payer: &Address,
    destination: &Address,
    amount: i128,
    pull: TokenPull,
) -> i128 {
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    let mut data = require_asset(e, asset);

    // Rate must be read before the incoming transfer moves the buffer
    let underlying = total_underlying(e, asset, &data);

    // shares = amount * total_shares / total_underlying, rounded down so the
    // vault never under-collateralizes existing holders
    let shares = if data.total_shares == 0 || underlying == 0 {
        amount
    } else {
        amount.fixed_mul_floor(e, &data.total_shares, &underlying)
    };

    let token_client = token::Client::new(e, asset);
    match pull {
        TokenPull::Transfer => {
            token_client.transfer(payer, &e.current_contract_address(), &amount);
        }
        TokenPull::Allowance => {
            token_client.transfer_from(
                &e.current_contract_address(),
                payer,
                &e.current_contract_address(),
                &amount,
            );
        }
    }

    let destination_shares = storage::get_shares(e, asset, destination);
    storage::set_shares(e, asset, destination, &(destination_shares + shares));
    data.total_shares += shares;
    storage::set_asset(e, asset, &data);

    VaultEvents::deposit(e, asset.clone(), payer.clone(), destination.clone(), amount, shares);
    shares
}

/// Burn `shares` from `owner` and pay the underlying owed to `destination`
/// strictly from the liquid buffer. The vault never unwinds the strategy
/// inline; liquidity must have been rebalanced in beforehand.
pub fn execute_withdraw(
    e: &Env,
    asset: &Address,
    owner: &Address,
    destination: &Address,
    shares: i128,
) -> i128 {
    if shares <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    let mut data = require_asset(e, asset);

    let owner_shares = storage::get_shares(e, asset, owner);
    if owner_shares < shares {
        panic_with_error!(e, VaultError::InsufficientShares);
    }

    // amount = shares * total_underlying / total_shares, rounded down so the
    // vault never over-pays
    let underlying = total_underlying(e, asset, &data);
    let amount = shares.fixed_mul_floor(e, &underlying, &data.total_shares);

    let token_client = token::Client::new(e, asset);
    let buffer = token_client.balance(&e.current_contract_address());
    if amount > buffer {
        panic_with_error!(e, VaultError::InsufficientLiquidity);
    }

    storage::set_shares(e, asset, owner, &(owner_shares - shares));
    data.total_shares -= shares;
    storage::set_asset(e, asset, &data);
    token_client.transfer(&e.current_contract_address(), destination, &amount);

    VaultEvents::withdraw(e, asset.clone(), owner.clone(), destination.clone(), shares, amount);
    amount
}

/// Move shares between accounts within the same asset ledger. Totals are
/// unchanged; no underlying moves.
pub fn execute_transfer_shares(
    e: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    shares: i128,
) {
    if shares <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    require_asset(e, asset);

    let from_shares = storage::get_shares(e, asset, from);
    if from_shares < shares {
        panic_with_error!(e, VaultError::InsufficientShares);
    }
    storage::set_shares(e, asset, from, &(from_shares - shares));
    // Debit lands first so a self-transfer nets to zero
    let to_shares = storage::get_shares(e, asset, to);
    storage::set_shares(e, asset, to, &(to_shares + shares));

    VaultEvents::transfer_shares(e, asset.clone(), from.clone(), to.clone(), shares);
}
