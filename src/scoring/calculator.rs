use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::{
    config::Settings,
    models::{FeatureRecord, Result, WalletScore},
    scoring::{rank_scores, FeatureExtractor, ScoringAlgorithm},
    sources::{TransactionSource, WalletSource},
};

/// Orchestrates the two-phase pipeline: phase 1 walks the wallet list
/// sequentially and collects one feature record per successfully fetched
/// wallet; phase 2 normalizes and scores the completed population. Phase 2
/// never starts before phase 1 has finished.
pub struct ScoreCalculator {
    wallet_source: Arc<dyn WalletSource>,
    transaction_source: Arc<dyn TransactionSource>,
    extractor: FeatureExtractor,
    algorithm: ScoringAlgorithm,
    pause_between: Duration,
}

impl ScoreCalculator {
    pub fn new(
        wallet_source: Arc<dyn WalletSource>,
        transaction_source: Arc<dyn TransactionSource>,
        settings: &Settings,
    ) -> Self {
        let extractor = FeatureExtractor::new(settings.scoring.target_events.iter().cloned());
        let algorithm = ScoringAlgorithm::new(settings.scoring.weights.clone());

        Self {
            wallet_source,
            transaction_source,
            extractor,
            algorithm,
            pause_between: Duration::from_millis(settings.api.pause_between_ms),
        }
    }

    /// Runs the full pipeline and returns the ranked score table.
    pub async fn run(&self) -> Result<Vec<WalletScore>> {
        let wallets = self.wallet_source.fetch_wallets().await?;
        info!("Found {} wallets", wallets.len());

        let now_ts = Utc::now().timestamp();
        let records = self.collect_features(&wallets, now_ts).await;
        info!(
            "Collected features for {} of {} wallets",
            records.len(),
            wallets.len()
        );

        let scores = self.algorithm.score_population(&records);
        Ok(rank_scores(scores))
    }

    /// Phase 1. Wallets are processed strictly in order, with a fixed pause
    /// between fetches so the rate-limited API is not hammered. A wallet
    /// whose fetch or extraction fails is logged and excluded outright, never
    /// given a placeholder record.
    pub async fn collect_features(&self, wallets: &[String], now_ts: i64) -> Vec<FeatureRecord> {
        let mut records = Vec::with_capacity(wallets.len());

        for wallet in wallets {
            let transactions = match self.transaction_source.fetch_transactions(wallet).await {
                Ok(transactions) => transactions,
                Err(e) => {
                    warn!("Failed to fetch transactions for {}: {}", wallet, e);
                    continue;
                }
            };

            match self.extractor.extract(wallet, &transactions, now_ts) {
                Ok(record) => {
                    if record.tx_count == 0 {
                        info!("No Compound events for {}", wallet);
                    }
                    records.push(record);
                }
                Err(e) => {
                    // Malformed block timestamp. One bad record costs the
                    // wallet, not the run.
                    warn!("Skipping {}: {}", wallet, e);
                    continue;
                }
            }

            tokio::time::sleep(self.pause_between).await;
        }

        records
    }
}
