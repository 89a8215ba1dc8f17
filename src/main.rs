use clap::{Parser, Subcommand};
use dotenv::dotenv;
use lending_scorer::{
    config::Settings,
    scoring::{FeatureExtractor, ScoreCalculator},
    sources::{CovalentClient, SheetWalletSource, TransactionSource, WalletSource},
    utils,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[clap(name = "lending-scorer")]
#[clap(about = "Score wallet activity on the Compound lending protocol", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the wallet list, score every wallet, and write the score table
    Run {
        /// Output CSV path
        #[clap(short, long, default_value = "wallet_scores.csv")]
        output: String,

        /// Override the wallet list CSV export URL
        #[clap(long)]
        wallet_list_url: Option<String>,

        /// Only score the first N wallets (smoke runs)
        #[clap(long)]
        limit: Option<usize>,
    },

    /// Print the raw feature record for a single wallet, without scoring
    Features {
        /// Wallet address
        #[clap(short, long)]
        wallet: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut settings = Settings::new().unwrap_or_else(|_| {
        info!("Using default settings");
        Settings::default()
    });

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    let api_key = match std::env::var("COVALENT_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            error!("Please set COVALENT_API_KEY in your environment or .env file");
            return Err(anyhow::anyhow!("COVALENT_API_KEY is not set"));
        }
    };

    match cli.command {
        Commands::Run {
            output,
            wallet_list_url,
            limit,
        } => {
            if let Some(url) = wallet_list_url {
                settings.wallet_list.url = url;
            }

            let wallet_source = Arc::new(SheetWalletSource::new(
                settings.wallet_list.url.clone(),
                settings.api.timeout_seconds,
            )?);
            let transaction_source = Arc::new(CovalentClient::new(&settings.api, api_key)?);

            let calculator = match limit {
                Some(limit) => ScoreCalculator::new(
                    Arc::new(LimitedWalletSource {
                        inner: wallet_source,
                        limit,
                    }),
                    transaction_source,
                    &settings,
                ),
                None => ScoreCalculator::new(wallet_source, transaction_source, &settings),
            };

            let scores = calculator.run().await?;
            utils::write_score_table(&output, &scores)?;
            info!("{} written successfully", output);

            print!("{}", utils::format_top_scores(&scores, 10));
        }

        Commands::Features { wallet } => {
            let client = CovalentClient::new(&settings.api, api_key)?;
            let transactions = client.fetch_transactions(&wallet).await?;

            let extractor = FeatureExtractor::new(settings.scoring.target_events.iter().cloned());
            let now_ts = chrono::Utc::now().timestamp();
            let record = extractor.extract(&wallet, &transactions, now_ts)?;

            println!("wallet_id:       {}", record.wallet_id);
            println!("tx_count:        {}", record.tx_count);
            println!("borrow_count:    {}", record.borrow_count);
            println!("repay_count:     {}", record.repay_count);
            println!("net_borrow:      {}", record.net_borrow);
            println!("liquidations:    {}", record.liquidations);
            println!("time_since_last: {}s", record.time_since_last);
        }
    }

    Ok(())
}

/// Truncates the wallet list for smoke runs without touching the source.
struct LimitedWalletSource {
    inner: Arc<SheetWalletSource>,
    limit: usize,
}

#[async_trait::async_trait]
impl WalletSource for LimitedWalletSource {
    async fn fetch_wallets(&self) -> lending_scorer::Result<Vec<String>> {
        let mut wallets = self.inner.fetch_wallets().await?;
        wallets.truncate(self.limit);
        Ok(wallets)
    }
}
