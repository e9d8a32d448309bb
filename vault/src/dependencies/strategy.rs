use soroban_sdk::{contractclient, Address, Env};

/// Strategy client interface - the contract every bound strategy must
/// implement for each asset it supports. All fund-moving entry points are
/// restricted to the vault; end users never call a strategy directly.
#[contractclient(name = "StrategyClient")]
pub trait Strategy {
    /// Returns the externally deployed principal plus accrued yield for an asset
    ///
    /// ### Panics
    /// If the strategy does not handle the asset
    fn invested(e: Env, asset: Address) -> i128;

    /// Returns true if `amount` could be withdrawn immediately without loss or delay
    fn is_liquid(e: Env, asset: Address, amount: i128) -> bool;

    /// Returns true if pending externally-accrued rewards exceed the
    /// strategy's minimum harvest threshold
    fn should_harvest(e: Env, asset: Address) -> bool;

    /// (Vault only) Record a deposit into the external position. The vault
    /// transfers the tokens to the strategy before making this call.
    fn deposit(e: Env, asset: Address, amount: i128);

    /// (Vault only) Withdraw `amount` from the external position back to the vault
    fn withdraw(e: Env, asset: Address, amount: i128);

    /// (Vault only) Withdraw 100% of the invested position for an asset,
    /// used before unbinding
    ///
    /// ### Returns
    /// The amount returned to the vault
    fn exit(e: Env, asset: Address) -> i128;

    /// (Vault only) Realize pending rewards into more of `asset` and return
    /// them to the vault buffer or reinvest them. Must never decrease the
    /// vault's total underlying.
    ///
    /// ### Returns
    /// The amount of rewards realized
    fn harvest(e: Env, asset: Address) -> i128;
}
