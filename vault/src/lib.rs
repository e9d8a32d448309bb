#![no_std]

mod errors;
pub mod storage;
mod contract;
pub use contract::{YieldVaultContract, YieldVaultContractClient, YieldVaultClient};
mod auth;
pub use auth::{AuthorizedRequest, RequestKind};
mod types;
pub use types::*;
mod vault;
mod dependencies;
pub use dependencies::strategy::{Strategy, StrategyClient};
mod events;

pub use errors::VaultError;
