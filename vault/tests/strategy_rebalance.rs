//! Strategy binding and rebalancing integration tests
//!
//! Exercises the buffer/strategy split end to end: surplus deployment,
//! shortfall recovery, harvesting, forced exits, and the liquidity boundary
//! on withdrawals.

use mock_strategy::{MockStrategy, MockStrategyClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env,
};
use yield_vault::{YieldVaultContract, YieldVaultContractClient};

// ================================
// Test Setup Utilities
// ================================

struct Fixture<'a> {
    env: Env,
    owner: Address,
    automation: Address,
    user: Address,
    token: Address,
    vault: YieldVaultContractClient<'a>,
    strategy: MockStrategyClient<'a>,
}

fn setup(buffer_target: i128, min_harvest: i128) -> Fixture<'static> {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    env.mock_all_auths();

    env.ledger().set_min_temp_entry_ttl(17280);
    env.ledger().set_min_persistent_entry_ttl(2073600);

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let automation = Address::generate(&env);
    let user = Address::generate(&env);

    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();

    let vault_address = env.register(YieldVaultContract, (owner.clone(), automation.clone()));
    let vault = YieldVaultContractClient::new(&env, &vault_address);

    let strategy_address = env.register(
        MockStrategy,
        (
            vault_address.clone(),
            vec![&env, token.clone()],
            min_harvest,
        ),
    );
    let strategy = MockStrategyClient::new(&env, &strategy_address);

    vault.add_asset(&token, &buffer_target);
    vault.bind_strategy(&token, &strategy_address);

    StellarAssetClient::new(&env, &token).mint(&user, &10_000);

    Fixture {
        env,
        owner,
        automation,
        user,
        token,
        vault,
        strategy,
    }
}

/// Mint reward tokens to the strategy and record them as pending harvest
fn accrue_reward(f: &Fixture, amount: i128) {
    StellarAssetClient::new(&f.env, &f.token).mint(&f.strategy.address, &amount);
    f.strategy.add_reward(&f.token, &amount);
}

fn buffer_balance(f: &Fixture) -> i128 {
    TokenClient::new(&f.env, &f.token).balance(&f.vault.address)
}

// ================================
// Rebalance Tests
// ================================

#[test]
fn test_rebalance_pushes_surplus() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);

    assert_eq!(buffer_balance(&f), 10);
    assert_eq!(f.strategy.invested(&f.token), 90);
    assert_eq!(f.vault.total_underlying(&f.token), 100);
    // Moving funds to the strategy does not touch the share ledger
    assert_eq!(f.vault.total_shares(&f.token), 100);
}

#[test]
fn test_rebalance_pulls_shortfall() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);
    assert_eq!(buffer_balance(&f), 10);

    // Raising the target alone moves nothing
    f.vault.set_buffer_target(&f.token, &60);
    assert_eq!(buffer_balance(&f), 10);

    f.vault.rebalance(&f.owner, &f.token);
    assert_eq!(buffer_balance(&f), 60);
    assert_eq!(f.strategy.invested(&f.token), 40);
    assert_eq!(f.vault.total_underlying(&f.token), 100);
}

#[test]
fn test_rebalance_no_strategy_is_noop() {
    let f = setup(10, 0);

    f.vault.unbind_strategy(&f.token);
    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);

    // Everything stays in the buffer without a bound strategy
    assert_eq!(buffer_balance(&f), 100);
}

#[test]
fn test_rebalance_illiquid_strategy_skips_pull() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);

    f.strategy.set_liquidity(&f.token, &false);
    f.vault.set_buffer_target(&f.token, &60);
    f.vault.rebalance(&f.owner, &f.token);

    // Shortfall stays in the strategy until it reports liquid again
    assert_eq!(buffer_balance(&f), 10);
    assert_eq!(f.strategy.invested(&f.token), 90);
}

#[test]
fn test_rebalance_pull_capped_at_invested() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);
    assert_eq!(f.strategy.invested(&f.token), 90);

    // Target far above total holdings, only what is invested can come back
    f.vault.set_buffer_target(&f.token, &500);
    f.vault.rebalance(&f.owner, &f.token);

    assert_eq!(buffer_balance(&f), 100);
    assert_eq!(f.strategy.invested(&f.token), 0);
}

#[test]
fn test_rebalance_automation_allowed() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.automation, &f.token);

    assert_eq!(f.strategy.invested(&f.token), 90);
}

#[test]
#[should_panic(expected = "Error(Contract, #4070)")]
fn test_rebalance_unauthorized_caller() {
    let f = setup(10, 0);

    f.vault.rebalance(&f.user, &f.token);
}

// ================================
// Harvest Tests
// ================================

#[test]
fn test_harvest_raises_exchange_rate() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);

    accrue_reward(&f, 10);
    assert!(f.strategy.should_harvest(&f.token));
    f.vault.rebalance(&f.owner, &f.token);

    // Harvest landed in the buffer, then the surplus was pushed back out
    assert_eq!(buffer_balance(&f), 10);
    assert_eq!(f.strategy.invested(&f.token), 100);
    assert_eq!(f.vault.total_underlying(&f.token), 110);
    // Yield raises the rate without minting shares: 100 shares -> 110
    assert_eq!(f.vault.total_shares(&f.token), 100);
}

#[test]
fn test_harvest_not_skipped_when_buffer_also_moves() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    accrue_reward(&f, 5);

    // Single pass both harvests and deploys the surplus
    f.vault.rebalance(&f.owner, &f.token);

    assert!(!f.strategy.should_harvest(&f.token));
    assert_eq!(buffer_balance(&f), 10);
    assert_eq!(f.strategy.invested(&f.token), 95);
}

#[test]
fn test_harvest_below_threshold_is_skipped() {
    let f = setup(10, 5);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    accrue_reward(&f, 3);
    f.vault.rebalance(&f.owner, &f.token);

    // Pending rewards stay parked until they clear the threshold
    assert!(!f.strategy.should_harvest(&f.token));
    assert_eq!(f.vault.total_underlying(&f.token), 100);

    accrue_reward(&f, 2);
    f.vault.rebalance(&f.owner, &f.token);
    assert_eq!(f.vault.total_underlying(&f.token), 105);
}

// ================================
// Liquidity Boundary Tests
// ================================

#[test]
#[should_panic(expected = "Error(Contract, #4061)")]
fn test_withdraw_exceeding_buffer_fails() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);
    accrue_reward(&f, 10);
    f.vault.rebalance(&f.owner, &f.token);

    // 50 shares are worth 55 but only 10 sits in the buffer. Aggregate
    // holdings are irrelevant, the vault never unwinds the strategy inline.
    f.vault.withdraw(&f.token, &f.user, &f.user, &50);
}

#[test]
fn test_withdraw_succeeds_after_rebalance_in() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);
    accrue_reward(&f, 10);
    f.vault.rebalance(&f.owner, &f.token);

    f.vault.set_buffer_target(&f.token, &60);
    f.vault.rebalance(&f.owner, &f.token);
    assert_eq!(buffer_balance(&f), 60);

    // 50 shares at rate 1.1 pay out 55
    let amount = f.vault.withdraw(&f.token, &f.user, &f.user, &50);
    assert_eq!(amount, 55);
    assert_eq!(f.vault.total_shares(&f.token), 50);
}

// ================================
// Strategy Lifecycle Tests
// ================================

#[test]
fn test_empty_strategy_forces_full_exit() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);
    assert_eq!(f.strategy.invested(&f.token), 90);

    let returned = f.vault.empty_strategy(&f.token);

    assert_eq!(returned, 90);
    assert_eq!(buffer_balance(&f), 100);
    assert_eq!(f.strategy.invested(&f.token), 0);
    // The binding stays in place after a forced exit
    assert!(f.vault.asset_config(&f.token).strategy.is_some());
}

#[test]
fn test_unbind_strategy_exits_first() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);
    assert_eq!(f.strategy.invested(&f.token), 90);

    f.vault.unbind_strategy(&f.token);

    assert_eq!(buffer_balance(&f), 100);
    assert_eq!(f.vault.asset_config(&f.token).strategy, None);
}

#[test]
fn test_rebind_after_unbind() {
    let f = setup(10, 0);

    f.vault.unbind_strategy(&f.token);
    f.vault.bind_strategy(&f.token, &f.strategy.address);
    assert!(f.vault.asset_config(&f.token).strategy.is_some());
}

#[test]
#[should_panic(expected = "Error(Contract, #4091)")]
fn test_bind_strategy_already_bound() {
    let f = setup(10, 0);

    f.vault.bind_strategy(&f.token, &f.strategy.address);
}

#[test]
#[should_panic(expected = "Error(Contract, #4092)")]
fn test_unbind_strategy_none_bound() {
    let f = setup(10, 0);

    f.vault.unbind_strategy(&f.token);
    f.vault.unbind_strategy(&f.token);
}

#[test]
#[should_panic(expected = "Error(Contract, #4090)")]
fn test_remove_asset_with_bound_strategy() {
    let f = setup(10, 0);

    f.vault.remove_asset(&f.token);
}

#[test]
fn test_deposit_after_harvest_mints_at_new_rate() {
    let f = setup(10, 0);

    f.vault.deposit(&f.token, &f.user, &f.user, &100);
    f.vault.rebalance(&f.owner, &f.token);
    accrue_reward(&f, 10);
    f.vault.rebalance(&f.owner, &f.token);

    // Rate is 1.1, so 11 underlying mints 10 shares
    let shares = f.vault.deposit(&f.token, &f.user, &f.user, &11);
    assert_eq!(shares, 10);
    assert_eq!(f.vault.total_shares(&f.token), 110);
    assert_eq!(f.vault.total_underlying(&f.token), 121);
}
