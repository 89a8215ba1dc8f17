use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    config::ApiSettings,
    models::{Result, ScorerError, TransactionRecord, TransactionsResponse},
    sources::TransactionSource,
};

/// Covalent `transactions_v3` client. Fetches a single page of decoded
/// transaction history per wallet; pagination beyond that is out of scope.
pub struct CovalentClient {
    http: reqwest::Client,
    base_url: String,
    chain_id: String,
    page_size: u32,
    api_key: String,
}

impl CovalentClient {
    pub fn new(settings: &ApiSettings, api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            chain_id: settings.chain_id.clone(),
            page_size: settings.page_size,
            api_key,
        })
    }

    fn transactions_url(&self, wallet: &str) -> String {
        format!(
            "{}/v1/{}/address/{}/transactions_v3/?quote-currency=USD&format=JSON&no-logs=false&page-size={}&key={}",
            self.base_url, self.chain_id, wallet, self.page_size, self.api_key
        )
    }
}

#[async_trait]
impl TransactionSource for CovalentClient {
    async fn fetch_transactions(&self, wallet: &str) -> Result<Vec<TransactionRecord>> {
        let url = self.transactions_url(wallet);
        debug!("Fetching transactions for {}", wallet);

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: TransactionsResponse = response.json().await?;

        if body.error {
            return Err(ScorerError::ApiError {
                wallet: wallet.to_string(),
                message: body
                    .error_message
                    .unwrap_or_else(|| "unspecified API error".to_string()),
            });
        }

        Ok(body.into_items())
    }
}
