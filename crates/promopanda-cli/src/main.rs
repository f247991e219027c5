mod scrape;
mod seed;
mod stores;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "promopanda")]
#[command(about = "Scrape retailer discount coupons and load demo data into the PromoPanda API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape every configured target and submit the coupons in one batch
    Scrape {
        /// YAML file listing the targets (overrides PROMO_TARGETS_PATH)
        #[arg(long)]
        targets: Option<PathBuf>,

        /// Print the extracted coupons instead of submitting them
        #[arg(long)]
        dry_run: bool,
    },
    /// Replace the demo store locations with the contents of a JSON file
    LoadStores {
        /// JSON array of store locations (overrides PROMO_STORES_PATH)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Submit the built-in technology coupons used by the price comparator
    SeedCoupons,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = promopanda_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Scrape { targets, dry_run }) => {
            scrape::run_scrape_command(&config, targets.as_deref(), dry_run).await?;
        }
        Some(Commands::LoadStores { file }) => {
            stores::run_load_stores(&config, file.as_deref()).await?;
        }
        Some(Commands::SeedCoupons) => seed::run_seed_coupons(&config).await?,
        None => {
            println!("promopanda: choose a command (scrape, load-stores, seed-coupons); see --help");
        }
    }

    Ok(())
}

/// Logs a warning when requests will carry the publicly known development key.
pub(crate) fn warn_if_default_api_key(config: &promopanda_core::AppConfig) {
    if config.uses_default_api_key() {
        tracing::warn!(
            "SCRAPER_API_KEY is not set; sending the insecure development default key"
        );
    }
}

/// Outcome line printed after a successful submission.
pub(crate) fn success_line(message: Option<&str>) -> String {
    format!(
        "✅ Éxito al guardar: {}",
        message.unwrap_or("respuesta sin mensaje")
    )
}
