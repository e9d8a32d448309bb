//! Ownership and role management integration tests

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::StellarAssetClient,
    Address, Env,
};
use yield_vault::{YieldVaultContract, YieldVaultContractClient};

fn setup<'a>() -> (Env, Address, Address, Address, YieldVaultContractClient<'a>) {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    env.mock_all_auths();

    env.ledger().set_min_temp_entry_ttl(17280);
    env.ledger().set_min_persistent_entry_ttl(2073600);

    let owner = Address::generate(&env);
    let automation = Address::generate(&env);
    let user = Address::generate(&env);

    let vault_address = env.register(YieldVaultContract, (owner.clone(), automation.clone()));
    let vault = YieldVaultContractClient::new(&env, &vault_address);

    (env, owner, automation, user, vault)
}

#[test]
fn test_two_step_ownership_transfer() {
    let (env, owner, _, _, vault) = setup();

    let new_owner = Address::generate(&env);
    vault.propose_owner(&new_owner);
    // Proposal alone changes nothing
    assert_eq!(vault.owner(), owner);

    vault.accept_owner();
    assert_eq!(vault.owner(), new_owner);
}

#[test]
#[should_panic(expected = "Error(Contract, #4070)")]
fn test_accept_owner_without_proposal() {
    let (_env, _, _, _, vault) = setup();

    vault.accept_owner();
}

#[test]
fn test_set_automation_swaps_principal() {
    let (env, owner, old_automation, user, vault) = setup();

    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    StellarAssetClient::new(&env, &token).mint(&user, &1_000);
    vault.add_asset(&token, &10);
    vault.deposit(&token, &user, &user, &100);

    let new_automation = Address::generate(&env);
    vault.set_automation(&new_automation);
    assert_eq!(vault.automation(), new_automation);

    // New principal may rebalance, the owner still may too
    vault.rebalance(&new_automation, &token);
    vault.rebalance(&owner, &token);

    let result = vault.try_rebalance(&old_automation, &token);
    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #4070)")]
fn test_rebalance_rejects_arbitrary_caller() {
    let (env, _, _, user, vault) = setup();

    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    vault.add_asset(&token, &10);

    vault.rebalance(&user, &token);
}
