use crate::{
    models::{FeatureRecord, WalletScore},
    scoring::{min_max_normalize, ScoringWeights},
};

/// Scores are scaled to an integer range of [0, 1000].
const SCORE_SCALE: f64 = 1000.0;

/// Population-level scorer: min-max normalizes each feature column across all
/// wallets, then combines them with the configured weights. Must only run
/// once the full set of feature records has been collected, since every
/// column is rescaled relative to the whole population.
pub struct ScoringAlgorithm {
    weights: ScoringWeights,
}

impl ScoringAlgorithm {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Produces one score per record, in input order.
    pub fn score_population(&self, records: &[FeatureRecord]) -> Vec<WalletScore> {
        let n_tx = normalize_column(records, |r| r.tx_count as f64);
        let n_nb = normalize_column(records, |r| r.net_borrow as f64);
        let n_liq = normalize_column(records, |r| r.liquidations as f64);
        let n_stale = normalize_column(records, |r| r.time_since_last as f64);

        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                // More recent activity scores higher, so staleness inverts.
                let n_rec = 1.0 - n_stale[i];
                let raw = self.weights.tx_count * n_tx[i]
                    + self.weights.net_borrow * n_nb[i]
                    + self.weights.liquidations * n_liq[i]
                    + self.weights.recency * n_rec;

                // The override runs after normalization: an inactive wallet
                // must never pick up a score from normalization artifacts.
                let score = if record.tx_count == 0 {
                    0
                } else {
                    (raw * SCORE_SCALE).round() as u32
                };

                WalletScore {
                    wallet_id: record.wallet_id.clone(),
                    score,
                }
            })
            .collect()
    }
}

fn normalize_column<F>(records: &[FeatureRecord], value: F) -> Vec<f64>
where
    F: Fn(&FeatureRecord) -> f64,
{
    let column: Vec<f64> = records.iter().map(value).collect();
    min_max_normalize(&column)
}

/// Sort by score descending. `Vec::sort_by` is stable, so wallets with equal
/// scores keep their input order.
pub fn rank_scores(mut scores: Vec<WalletScore>) -> Vec<WalletScore> {
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}
