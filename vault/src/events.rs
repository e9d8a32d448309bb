use soroban_sdk::{Address, BytesN, Env, Symbol};

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when an asset is added to the registry
    ///
    /// - topics - `["add_asset", asset: Address]`
    /// - data - `buffer_target: i128`
    pub fn add_asset(e: &Env, asset: Address, buffer_target: i128) {
        let topics = (Symbol::new(e, "add_asset"), asset);
        e.events().publish(topics, buffer_target);
    }

    /// Emitted when an asset is removed from the registry
    ///
    /// - topics - `["remove_asset", asset: Address]`
    /// - data - `()`
    pub fn remove_asset(e: &Env, asset: Address) {
        let topics = (Symbol::new(e, "remove_asset"), asset);
        e.events().publish(topics, ());
    }

    /// Emitted when an asset's buffer target is updated
    ///
    /// - topics - `["set_buffer_target", asset: Address]`
    /// - data - `buffer_target: i128`
    pub fn set_buffer_target(e: &Env, asset: Address, buffer_target: i128) {
        let topics = (Symbol::new(e, "set_buffer_target"), asset);
        e.events().publish(topics, buffer_target);
    }

    /// Emitted when a strategy is bound to an asset
    ///
    /// - topics - `["bind_strategy", asset: Address]`
    /// - data - `strategy: Address`
    pub fn bind_strategy(e: &Env, asset: Address, strategy: Address) {
        let topics = (Symbol::new(e, "bind_strategy"), asset);
        e.events().publish(topics, strategy);
    }

    /// Emitted when a strategy is unbound from an asset after a full exit
    ///
    /// - topics - `["unbind_strategy", asset: Address]`
    /// - data - `[strategy: Address, returned: i128]`
    pub fn unbind_strategy(e: &Env, asset: Address, strategy: Address, returned: i128) {
        let topics = (Symbol::new(e, "unbind_strategy"), asset);
        e.events().publish(topics, (strategy, returned));
    }

    /// Emitted when underlying is deposited and shares are minted
    ///
    /// - topics - `["deposit", asset: Address]`
    /// - data - `[payer: Address, destination: Address, amount: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * payer - The address the underlying was pulled from
    /// * destination - The address credited with the minted shares
    /// * amount - The amount of underlying deposited
    /// * shares - The amount of shares minted
    pub fn deposit(
        e: &Env,
        asset: Address,
        payer: Address,
        destination: Address,
        amount: i128,
        shares: i128,
    ) {
        let topics = (Symbol::new(e, "deposit"), asset);
        e.events().publish(topics, (payer, destination, amount, shares));
    }

    /// Emitted when shares are burned and underlying is paid out
    ///
    /// - topics - `["withdraw", asset: Address]`
    /// - data - `[owner: Address, destination: Address, shares: i128, amount: i128]`
    ///
    /// ### Arguments
    /// * owner - The address whose shares were burned
    /// * destination - The address paid from the liquid buffer
    /// * shares - The amount of shares burned
    /// * amount - The amount of underlying paid out
    pub fn withdraw(
        e: &Env,
        asset: Address,
        owner: Address,
        destination: Address,
        shares: i128,
        amount: i128,
    ) {
        let topics = (Symbol::new(e, "withdraw"), asset);
        e.events().publish(topics, (owner, destination, shares, amount));
    }

    /// Emitted when shares move between accounts on the same asset ledger
    ///
    /// - topics - `["transfer_shares", asset: Address]`
    /// - data - `[from: Address, to: Address, shares: i128]`
    pub fn transfer_shares(e: &Env, asset: Address, from: Address, to: Address, shares: i128) {
        let topics = (Symbol::new(e, "transfer_shares"), asset);
        e.events().publish(topics, (from, to, shares));
    }

    /// Emitted when a rebalance pass completes for an asset
    ///
    /// - topics - `["rebalance", asset: Address]`
    /// - data - `[pushed: i128, pulled: i128, harvested: bool]`
    ///
    /// ### Arguments
    /// * pushed - Underlying moved from the buffer into the strategy
    /// * pulled - Underlying moved from the strategy into the buffer
    /// * harvested - Whether a harvest was triggered during the pass
    pub fn rebalance(e: &Env, asset: Address, pushed: i128, pulled: i128, harvested: bool) {
        let topics = (Symbol::new(e, "rebalance"), asset);
        e.events().publish(topics, (pushed, pulled, harvested));
    }

    /// Emitted when an asset's strategy is force-exited in full
    ///
    /// - topics - `["empty_strategy", asset: Address]`
    /// - data - `[strategy: Address, returned: i128]`
    pub fn empty_strategy(e: &Env, asset: Address, strategy: Address, returned: i128) {
        let topics = (Symbol::new(e, "empty_strategy"), asset);
        e.events().publish(topics, (strategy, returned));
    }

    /// Emitted when an ownership transfer is proposed
    ///
    /// - topics - `["propose_owner"]`
    /// - data - `[owner: Address, proposed: Address]`
    pub fn propose_owner(e: &Env, owner: Address, proposed: Address) {
        let topics = (Symbol::new(e, "propose_owner"),);
        e.events().publish(topics, (owner, proposed));
    }

    /// Emitted when a proposed owner accepts the role
    ///
    /// - topics - `["accept_owner"]`
    /// - data - `owner: Address`
    pub fn accept_owner(e: &Env, owner: Address) {
        let topics = (Symbol::new(e, "accept_owner"),);
        e.events().publish(topics, owner);
    }

    /// Emitted when the automation principal is updated
    ///
    /// - topics - `["set_automation"]`
    /// - data - `automation: Address`
    pub fn set_automation(e: &Env, automation: Address) {
        let topics = (Symbol::new(e, "set_automation"),);
        e.events().publish(topics, automation);
    }

    /// Emitted when an account registers a signing key
    ///
    /// - topics - `["set_signer", account: Address]`
    /// - data - `public_key: BytesN<32>`
    pub fn set_signer(e: &Env, account: Address, public_key: BytesN<32>) {
        let topics = (Symbol::new(e, "set_signer"), account);
        e.events().publish(topics, public_key);
    }
}
