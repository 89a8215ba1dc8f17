use std::collections::HashSet;

use crate::{
    models::{FeatureRecord, Result, TransactionRecord},
    utils::parse_block_timestamp,
};

/// Classifies a wallet's decoded log events against the Compound event
/// whitelist and folds the tallies into a [`FeatureRecord`].
///
/// Only borrow-side activity and liquidations get dedicated counters; `Mint`
/// and `Redeem` count toward total activity and recency alone.
pub struct FeatureExtractor {
    target_events: HashSet<String>,
}

impl FeatureExtractor {
    pub fn new<I>(target_events: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            target_events: target_events.into_iter().collect(),
        }
    }

    /// Pure function of (wallet id, transaction list, now). Fails on the
    /// first malformed block timestamp; the caller decides whether that
    /// skips the wallet.
    pub fn extract(
        &self,
        wallet_id: &str,
        transactions: &[TransactionRecord],
        now_ts: i64,
    ) -> Result<FeatureRecord> {
        let mut borrow_count = 0u32;
        let mut repay_count = 0u32;
        let mut liquidations = 0u32;
        let mut timestamps: Vec<i64> = Vec::new();

        for tx in transactions {
            // One parse per transaction; every matching log shares it.
            let ts = parse_block_timestamp(tx.block_signed_at.as_deref().unwrap_or(""))?;

            for log in &tx.log_events {
                let decoded = match &log.decoded {
                    Some(decoded) => decoded,
                    None => continue,
                };
                let name = match decoded.name.as_deref() {
                    Some(name) => name,
                    None => continue,
                };
                if !self.target_events.contains(name) {
                    continue;
                }

                timestamps.push(ts);
                match name {
                    "Borrow" => borrow_count += 1,
                    "RepayBorrow" => repay_count += 1,
                    "LiquidateBorrow" => liquidations += 1,
                    _ => {}
                }
            }
        }

        let time_since_last = match timestamps.iter().max() {
            Some(&latest) => now_ts - latest,
            None => now_ts,
        };

        Ok(FeatureRecord {
            wallet_id: wallet_id.to_string(),
            tx_count: timestamps.len() as u32,
            borrow_count,
            repay_count,
            net_borrow: borrow_count as i64 - repay_count as i64,
            liquidations,
            time_since_last,
        })
    }
}
