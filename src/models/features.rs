use serde::{Deserialize, Serialize};

/// Per-wallet aggregate of Compound event counts and recency. Built once per
/// pipeline run by the feature extractor and never mutated afterwards; the
/// normalizer and scorer derive their columns from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub wallet_id: String,
    /// Count of target-protocol events of any kind, mint/redeem included.
    pub tx_count: u32,
    pub borrow_count: u32,
    pub repay_count: u32,
    /// `borrow_count - repay_count`; negative for net repayers.
    pub net_borrow: i64,
    pub liquidations: u32,
    /// Seconds between now and the most recent target event. Equals now
    /// (maximally stale) when the wallet has no target events.
    pub time_since_last: i64,
}

/// Final scored row, one per successfully processed wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletScore {
    pub wallet_id: String,
    /// Weighted composite in [0, 1000]; always 0 for inactive wallets.
    pub score: u32,
}
