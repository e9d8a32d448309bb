use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days

// Instance storage key strings
const VAULT: &str = "Vault";
const MIN_HARVEST: &str = "MinHarvest";

// Persistent storage keys
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DataKey {
    // Invested position per asset, stores i128
    Position(Address),
    // Whether the position is immediately withdrawable, stores bool
    Liquid(Address),
    // Pending rewards awaiting harvest, stores i128
    Pending(Address),
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

pub fn get_vault(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, VAULT))
        .unwrap_optimized()
}

pub fn set_vault(e: &Env, vault: &Address) {
    e.storage().instance().set(&Symbol::new(e, VAULT), vault);
}

pub fn get_min_harvest(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, MIN_HARVEST))
        .unwrap_optimized()
}

pub fn set_min_harvest(e: &Env, min_harvest: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, MIN_HARVEST), min_harvest);
}

pub fn get_position(e: &Env, asset: &Address) -> Option<i128> {
    let key = DataKey::Position(asset.clone());
    if let Some(position) = e.storage().persistent().get::<DataKey, i128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
        Some(position)
    } else {
        None
    }
}

pub fn set_position(e: &Env, asset: &Address, position: &i128) {
    let key = DataKey::Position(asset.clone());
    e.storage().persistent().set(&key, position);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn get_liquid(e: &Env, asset: &Address) -> bool {
    let key = DataKey::Liquid(asset.clone());
    e.storage().persistent().get(&key).unwrap_or(true)
}

pub fn set_liquid(e: &Env, asset: &Address, liquid: &bool) {
    let key = DataKey::Liquid(asset.clone());
    e.storage().persistent().set(&key, liquid);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn get_pending(e: &Env, asset: &Address) -> i128 {
    let key = DataKey::Pending(asset.clone());
    e.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_pending(e: &Env, asset: &Address, pending: &i128) {
    let key = DataKey::Pending(asset.clone());
    e.storage().persistent().set(&key, pending);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}
