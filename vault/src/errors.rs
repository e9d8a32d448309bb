use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Amount validation errors
    ZeroAmount = 4041,
    InvalidAmount = 4042,

    // Registry errors
    UnsupportedAsset = 4050,
    AlreadySupported = 4051,
    SharesOutstanding = 4052,

    // Ledger errors
    InsufficientShares = 4060,
    InsufficientLiquidity = 4061,

    // Access control errors
    Unauthorized = 4070,

    // Signed authorization errors
    InvalidSignature = 4080,
    ExpiredAuthorization = 4081,
    NonceMismatch = 4082,

    // Strategy errors
    StrategyStillInvested = 4090,
    StrategyAlreadyBound = 4091,
    NoBoundStrategy = 4092,
}
