use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::{
    models::Result,
    sources::WalletSource,
};

/// Reads the wallet list from a published spreadsheet CSV export. Only the
/// first column matters; the header row and blank entries are dropped.
pub struct SheetWalletSource {
    http: reqwest::Client,
    url: String,
}

impl SheetWalletSource {
    pub fn new(url: String, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self { http, url })
    }
}

#[async_trait]
impl WalletSource for SheetWalletSource {
    async fn fetch_wallets(&self) -> Result<Vec<String>> {
        info!("Loading wallet list from {}", self.url);
        let text = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(parse_wallet_column(&text))
    }
}

/// First CSV column, header row skipped, blanks filtered.
pub fn parse_wallet_column(text: &str) -> Vec<String> {
    text.lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}
