mod ledger;
pub use ledger::{
    convert, execute_deposit, execute_transfer_shares, execute_withdraw, total_underlying,
    TokenPull,
};
mod registry;
pub use registry::{
    execute_add_asset, execute_bind_strategy, execute_remove_asset, execute_set_buffer_target,
    execute_unbind_strategy, require_asset,
};
mod rebalance;
pub use rebalance::{execute_empty_strategy, execute_rebalance};
