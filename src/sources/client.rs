use async_trait::async_trait;

use crate::models::{Result, TransactionRecord};

#[cfg(test)]
use mockall::automock;

/// Supplies the ordered wallet list the pipeline will score.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WalletSource: Send + Sync {
    async fn fetch_wallets(&self) -> Result<Vec<String>>;
}

/// Supplies raw transaction history for a single wallet. A source returning
/// partial history (e.g. one page) is accepted as-is.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_transactions(&self, wallet: &str) -> Result<Vec<TransactionRecord>>;
}
