use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::scoring::ScoringWeights;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub wallet_list: WalletListSettings,
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

/// Covalent API parameters. The API key itself is not part of the settings
/// tree; it comes from the `COVALENT_API_KEY` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub chain_id: String,
    pub page_size: u32,
    pub timeout_seconds: u64,
    /// Pause between per-wallet fetches; the API is rate-limited.
    pub pause_between_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletListSettings {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    pub weights: ScoringWeights,
    /// Decoded event names that count as Compound activity.
    pub target_events: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Lending Scorer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            api: ApiSettings {
                base_url: "https://api.covalenthq.com".to_string(),
                chain_id: "1".to_string(),
                page_size: 100,
                timeout_seconds: 30,
                pause_between_ms: 200,
            },
            wallet_list: WalletListSettings {
                url: "https://docs.google.com/spreadsheets/d/1ZzaeMgNYnxvriYYpe8PE7uMEblTI0GV5GIVUnsP-sBs/export?format=csv".to_string(),
            },
            scoring: ScoringSettings {
                weights: ScoringWeights::default(),
                target_events: vec![
                    "Mint".to_string(),
                    "Redeem".to_string(),
                    "Borrow".to_string(),
                    "RepayBorrow".to_string(),
                    "LiquidateBorrow".to_string(),
                ],
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("LENDING_SCORER"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        self.scoring.weights.validate()?;

        if self.scoring.target_events.is_empty() {
            return Err("Target event whitelist must not be empty".to_string());
        }

        if self.api.page_size == 0 {
            return Err("API page size must be positive".to_string());
        }

        if self.wallet_list.url.is_empty() {
            return Err("Wallet list URL must be set".to_string());
        }

        Ok(())
    }
}
