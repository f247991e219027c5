//! `scrape` command: run the coupon pipeline over the configured targets.

use std::path::Path;

use promopanda_core::{default_targets, load_targets, AppConfig, ScrapeTarget};
use promopanda_scraper::{
    collect_coupons, run_scrape, ScrapeConfig, ScrapeSummary, SubmissionStatus,
};

use crate::{success_line, warn_if_default_api_key};

/// Runs one scrape over the configured targets and prints the outcome.
///
/// With `dry_run` the coupons are printed as JSON and nothing is submitted.
///
/// # Errors
///
/// Returns an error if the targets file is invalid or an HTTP client cannot
/// be built. Fetch and submission failures are reported, not returned.
pub(crate) async fn run_scrape_command(
    config: &AppConfig,
    targets_override: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let targets = resolve_targets(config, targets_override)?;
    let scrape_config = ScrapeConfig::from_app_config(config, targets);

    if dry_run {
        let collected = collect_coupons(&scrape_config).await?;
        println!("{}", serde_json::to_string_pretty(&collected.coupons)?);
        println!(
            "dry-run: {} códigos de {} objetivos ({} fallidos); no se envió nada",
            collected.coupons.len(),
            scrape_config.targets.len(),
            collected.failed_targets.len()
        );
        return Ok(());
    }

    warn_if_default_api_key(config);
    let summary = run_scrape(&scrape_config).await?;
    for line in summary_lines(&summary) {
        println!("{line}");
    }

    Ok(())
}

/// Targets from `targets_override`, else `PROMO_TARGETS_PATH`, else the
/// built-in list.
pub(crate) fn resolve_targets(
    config: &AppConfig,
    targets_override: Option<&Path>,
) -> anyhow::Result<Vec<ScrapeTarget>> {
    match targets_override.or(config.targets_path.as_deref()) {
        Some(path) => Ok(load_targets(path)?),
        None => Ok(default_targets()),
    }
}

pub(crate) fn summary_lines(summary: &ScrapeSummary) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .failed_targets
        .iter()
        .map(|url| format!("⚠️  Sin datos para {url}"))
        .collect();

    match &summary.submission {
        SubmissionStatus::Skipped => lines.push("No se extrajo ningún código.".to_string()),
        SubmissionStatus::Submitted { message } => {
            lines.push(format!("Enviados {} códigos a la API.", summary.records));
            lines.push(success_line(message.as_deref()));
        }
        SubmissionStatus::Failed(reason) => {
            lines.push(format!("❌ Error al conectar o en la API: {reason}"));
        }
    }

    lines.push(format!(
        "\nProceso finalizado. Total de códigos generados: {} ({} verificados, {} genéricos)",
        summary.records, summary.verified, summary.fallback
    ));
    lines
}
