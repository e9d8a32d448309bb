use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, BytesN, Env, IntoVal, Symbol, TryFromVal, Val,
    Vec as SorobanVec,
};

use crate::types::AssetData;

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

// Instance storage key strings
const OWNER: &str = "Owner";
const PROPOSED_OWNER: &str = "PropOwner";
const AUTOMATION: &str = "Automation";
const ASSET_LIST: &str = "AssetList";

/// Key for a share balance, one record per (asset, account)
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ShareKey {
    pub asset: Address,
    pub account: Address,
}

// Persistent storage keys
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DataKey {
    // Registry record for a supported asset, stores AssetData
    Asset(Address),
    // Share balance for an (asset, account) pair, stores i128
    Shares(ShareKey),
    // Signed-request replay counter for an account, stores u64
    Nonce(Address),
    // Registered ed25519 signing key for an account, stores BytesN<32>
    Signer(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

/********** Ownership / Roles **********/

pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, OWNER))
        .unwrap_optimized()
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&Symbol::new(e, OWNER), owner);
}

pub fn get_proposed_owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&Symbol::new(e, PROPOSED_OWNER))
}

pub fn set_proposed_owner(e: &Env, proposed: &Address) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, PROPOSED_OWNER), proposed);
}

pub fn get_automation(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, AUTOMATION))
        .unwrap_optimized()
}

pub fn set_automation(e: &Env, automation: &Address) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, AUTOMATION), automation);
}

/********** Asset Registry **********/

pub fn get_asset_list(e: &Env) -> SorobanVec<Address> {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ASSET_LIST))
        .unwrap_optimized()
}

pub fn set_asset_list(e: &Env, assets: &SorobanVec<Address>) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, ASSET_LIST), assets);
}

/// Fetch the registry record for an asset, or None if it is not supported
pub fn get_asset(e: &Env, asset: &Address) -> Option<AssetData> {
    let key = DataKey::Asset(asset.clone());
    if let Some(data) = e.storage().persistent().get::<DataKey, AssetData>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
        Some(data)
    } else {
        None
    }
}

pub fn set_asset(e: &Env, asset: &Address, data: &AssetData) {
    let key = DataKey::Asset(asset.clone());
    e.storage().persistent().set(&key, data);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn remove_asset(e: &Env, asset: &Address) {
    let key = DataKey::Asset(asset.clone());
    e.storage().persistent().remove(&key);
}

pub fn has_asset(e: &Env, asset: &Address) -> bool {
    let key = DataKey::Asset(asset.clone());
    e.storage().persistent().has(&key)
}

/********** Share Balances **********/

/// Fetch the share balance for an (asset, account) pair, or 0 if none exists
pub fn get_shares(e: &Env, asset: &Address, account: &Address) -> i128 {
    let key = DataKey::Shares(ShareKey {
        asset: asset.clone(),
        account: account.clone(),
    });
    get_persistent_default(e, &key, || 0_i128, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

pub fn set_shares(e: &Env, asset: &Address, account: &Address, shares: &i128) {
    let key = DataKey::Shares(ShareKey {
        asset: asset.clone(),
        account: account.clone(),
    });
    e.storage().persistent().set(&key, shares);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/********** Signed Authorization **********/

/// Fetch the current nonce for an account, starting at 0 on first use
pub fn get_nonce(e: &Env, account: &Address) -> u64 {
    let key = DataKey::Nonce(account.clone());
    get_persistent_default(e, &key, || 0_u64, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

pub fn set_nonce(e: &Env, account: &Address, nonce: &u64) {
    let key = DataKey::Nonce(account.clone());
    e.storage().persistent().set(&key, nonce);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Fetch the registered signing key for an account
pub fn get_signer(e: &Env, account: &Address) -> Option<BytesN<32>> {
    let key = DataKey::Signer(account.clone());
    if let Some(signer) = e.storage().persistent().get::<DataKey, BytesN<32>>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
        Some(signer)
    } else {
        None
    }
}

pub fn set_signer(e: &Env, account: &Address, signer: &BytesN<32>) {
    let key = DataKey::Signer(account.clone());
    e.storage().persistent().set(&key, signer);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}
