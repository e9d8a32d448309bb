use soroban_sdk::{contracttype, Address};

/// Registry record for a supported asset
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AssetData {
    /// Minimum amount kept liquid in the vault, independent of strategy state
    pub buffer_target: i128,
    /// The bound strategy, if any. `None` means 100% of funds stay in the buffer
    pub strategy: Option<Address>,
    /// Sum of all outstanding shares for this asset
    pub total_shares: i128,
}

/// Direction of a share conversion
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ConversionDirection {
    /// Convert an underlying amount into shares
    ToShares,
    /// Convert a share amount into underlying
    ToUnderlying,
}

/// Rounding applied to a share conversion. Every conversion takes this
/// explicitly so callers state which side the rounding loss falls on.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Rounding {
    Down,
    Up,
}
