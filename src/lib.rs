pub mod config;
pub mod models;
pub mod scoring;
pub mod sources;
pub mod utils;

pub use config::Settings;
pub use models::{FeatureRecord, Result, ScorerError, WalletScore};
pub use scoring::{ScoreCalculator, ScoringWeights};
