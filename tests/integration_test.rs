use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use lending_scorer::{
    config::Settings,
    models::{DecodedEvent, LogEvent, Result, TransactionRecord},
    scoring::{rank_scores, FeatureExtractor, ScoreCalculator, ScoringAlgorithm},
    sources::{TransactionSource, WalletSource},
    utils::render_score_table,
};

struct StaticWalletSource {
    wallets: Vec<String>,
}

#[async_trait]
impl WalletSource for StaticWalletSource {
    async fn fetch_wallets(&self) -> Result<Vec<String>> {
        Ok(self.wallets.clone())
    }
}

struct StaticTransactionSource {
    by_wallet: HashMap<String, Vec<TransactionRecord>>,
}

#[async_trait]
impl TransactionSource for StaticTransactionSource {
    async fn fetch_transactions(&self, wallet: &str) -> Result<Vec<TransactionRecord>> {
        Ok(self.by_wallet.get(wallet).cloned().unwrap_or_default())
    }
}

fn tx(timestamp: &str, event_names: &[&str]) -> TransactionRecord {
    TransactionRecord {
        block_signed_at: Some(timestamp.to_string()),
        log_events: event_names
            .iter()
            .map(|name| LogEvent {
                decoded: Some(DecodedEvent {
                    name: Some(name.to_string()),
                }),
            })
            .collect(),
    }
}

/// Fixed "now" for the scenario; all mock timestamps are relative to it.
const NOW: i64 = 1_000_000;

/// Three-wallet population:
///   w1 - five Borrow events, most recent one hour before NOW (epoch 996_400)
///   w2 - no target events at all
///   w3 - two LiquidateBorrow events, most recent one day before NOW (913_600)
///
/// Expected scores, computed by hand from the weight formula:
///   w1: n_tx~1, n_nb~1, n_liq=0, recency=1
///       raw = 0.20 + 0.25 + 0.25           = 0.70          -> 700
///   w3: n_tx=0.4, n_nb=0, n_liq~1, recency = 1 - 82800/996400
///       raw = 0.08 + 0.30 + 0.25*0.9169008 = 0.6092252     -> 609
///   w2: forced to 0 by the inactivity override
fn scenario_transactions() -> HashMap<String, Vec<TransactionRecord>> {
    let mut by_wallet = HashMap::new();
    by_wallet.insert(
        "w1".to_string(),
        vec![
            tx("1970-01-02T00:00:00Z", &["Borrow"]),
            tx("1970-01-03T00:00:00Z", &["Borrow"]),
            tx("1970-01-04T00:00:00Z", &["Borrow"]),
            tx("1970-01-05T00:00:00Z", &["Borrow"]),
            tx("1970-01-12T12:46:40Z", &["Borrow"]),
        ],
    );
    by_wallet.insert(
        "w2".to_string(),
        vec![tx("1970-01-06T00:00:00Z", &["Approval", "Transfer"])],
    );
    by_wallet.insert(
        "w3".to_string(),
        vec![
            tx("1970-01-11T00:00:00Z", &["LiquidateBorrow"]),
            tx("1970-01-11T13:46:40Z", &["LiquidateBorrow"]),
        ],
    );
    by_wallet
}

fn extract_all(wallets: &[&str]) -> Vec<lending_scorer::FeatureRecord> {
    let settings = Settings::default();
    let extractor = FeatureExtractor::new(settings.scoring.target_events.iter().cloned());
    let transactions = scenario_transactions();

    wallets
        .iter()
        .map(|wallet| {
            let txs = transactions.get(*wallet).cloned().unwrap_or_default();
            extractor.extract(wallet, &txs, NOW).unwrap()
        })
        .collect()
}

#[test]
fn scenario_produces_expected_feature_records() {
    let records = extract_all(&["w1", "w2", "w3"]);

    assert_eq!(records[0].tx_count, 5);
    assert_eq!(records[0].borrow_count, 5);
    assert_eq!(records[0].net_borrow, 5);
    assert_eq!(records[0].time_since_last, 3_600);

    assert_eq!(records[1].tx_count, 0);
    assert_eq!(records[1].time_since_last, NOW);

    assert_eq!(records[2].tx_count, 2);
    assert_eq!(records[2].liquidations, 2);
    assert_eq!(records[2].time_since_last, 86_400);
}

#[test]
fn scenario_produces_expected_scores_and_ranking() {
    let settings = Settings::default();
    let records = extract_all(&["w1", "w2", "w3"]);

    let algorithm = ScoringAlgorithm::new(settings.scoring.weights.clone());
    let scores = algorithm.score_population(&records);

    assert_eq!(scores[0].score, 700);
    assert_eq!(scores[1].score, 0);
    assert_eq!(scores[2].score, 609);

    let ranked = rank_scores(scores);
    let order: Vec<&str> = ranked.iter().map(|s| s.wallet_id.as_str()).collect();
    assert_eq!(order, vec!["w1", "w3", "w2"]);

    for row in &ranked {
        assert!(row.score <= 1000);
    }
}

#[tokio::test]
async fn full_pipeline_ranks_and_renders_the_score_table() {
    let mut settings = Settings::default();
    settings.api.pause_between_ms = 0;

    let wallet_source = Arc::new(StaticWalletSource {
        wallets: vec!["w1".to_string(), "w2".to_string(), "w3".to_string()],
    });
    let transaction_source = Arc::new(StaticTransactionSource {
        by_wallet: scenario_transactions(),
    });

    let calculator = ScoreCalculator::new(wallet_source, transaction_source, &settings);
    let ranked = calculator.run().await.unwrap();

    // Min-max normalization is translation invariant, so running against the
    // real wall clock instead of the fixed NOW yields the same scores: every
    // wallet's staleness shifts by the same offset.
    assert_eq!(ranked.len(), 3);
    let order: Vec<&str> = ranked.iter().map(|s| s.wallet_id.as_str()).collect();
    assert_eq!(order, vec!["w1", "w3", "w2"]);
    assert_eq!(ranked[0].score, 700);
    assert_eq!(ranked[1].score, 609);
    assert_eq!(ranked[2].score, 0);

    let table = render_score_table(&ranked);
    let mut lines = table.lines();
    assert_eq!(lines.next(), Some("wallet_id,score"));
    assert!(lines.next().unwrap().starts_with("w1,"));
}
