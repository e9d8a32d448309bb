use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    UnsupportedAsset = 5001,
    ZeroAmount = 5002,
    NotLiquid = 5003,
    InsufficientPosition = 5004,
}
