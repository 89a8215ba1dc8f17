use serde::{Deserialize, Serialize};

/// Top-level envelope returned by the Covalent `transactions_v3` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub data: Option<TransactionPage>,
    #[serde(default)]
    pub error: bool,
    pub error_message: Option<String>,
}

impl TransactionsResponse {
    /// A missing `data` object means no history, not a failure.
    pub fn into_items(self) -> Vec<TransactionRecord> {
        self.data.map(|page| page.items).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub items: Vec<TransactionRecord>,
}

/// One on-chain transaction with its decoded log events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "block_signed_at_timestamp")]
    pub block_signed_at: Option<String>,
    #[serde(default)]
    pub log_events: Vec<LogEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub decoded: Option<DecodedEvent>,
}

/// Decoded ABI event. `name` is absent when the indexer could not match
/// the log against a known ABI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedEvent {
    pub name: Option<String>,
}
