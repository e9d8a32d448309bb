#![no_std]

mod errors;
mod storage;
mod contract;
pub use contract::{MockStrategy, MockStrategyClient};

pub use errors::StrategyError;
