pub mod settings;

pub use settings::{ApiSettings, AppSettings, ScoringSettings, Settings, WalletListSettings};
