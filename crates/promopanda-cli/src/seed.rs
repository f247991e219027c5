//! `seed-coupons` command: load the comparator's fixed technology coupons.

use promopanda_core::{comparator_seed_coupons, AppConfig};
use promopanda_scraper::{ApiClient, SubmitOutcome};

use crate::{success_line, warn_if_default_api_key};

pub(crate) async fn run_seed_coupons(config: &AppConfig) -> anyhow::Result<()> {
    let coupons = comparator_seed_coupons();
    println!(
        "Enviando {} cupones de tecnología al comparador...",
        coupons.len()
    );

    warn_if_default_api_key(config);
    let client = ApiClient::new(config.request_timeout(), Some(config.api_key.as_str()))?;
    match client
        .submit_coupons(&config.coupons_endpoint, &coupons)
        .await
    {
        Ok(SubmitOutcome::Accepted { message, .. }) => {
            println!("{}", success_line(message.as_deref()));
        }
        Ok(SubmitOutcome::Skipped) => {}
        Err(e) => {
            tracing::error!(error = %e, "comparator seed submission failed");
            println!("❌ Error al conectar o en la API: {e}");
        }
    }

    Ok(())
}
