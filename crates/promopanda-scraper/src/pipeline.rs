//! Scrape run orchestration: fetch every target, extract coupons, submit once.

use std::collections::HashSet;
use std::time::Duration;

use promopanda_core::{AppConfig, CouponRecord, ScrapeTarget};

use crate::error::ScraperError;
use crate::extract::{extract_coupons, ExtractOptions};
use crate::fetch::PageFetcher;
use crate::submit::{ApiClient, SubmitOutcome};

/// Everything a scrape run needs. Built from [`AppConfig`] by the CLI, or
/// directly by tests.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub targets: Vec<ScrapeTarget>,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
    pub inter_request_delay: Duration,
    pub user_agent: String,
    pub extract: ExtractOptions,
}

impl ScrapeConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig, targets: Vec<ScrapeTarget>) -> Self {
        Self {
            targets,
            endpoint: config.coupons_endpoint.clone(),
            api_key: Some(config.api_key.clone()),
            request_timeout: config.request_timeout(),
            inter_request_delay: config.inter_request_delay(),
            user_agent: config.user_agent.clone(),
            extract: ExtractOptions {
                max_candidates: config.max_candidates,
                max_fragment_len: config.max_fragment_len,
            },
        }
    }
}

/// Records gathered across all targets, plus the URLs that could not be fetched.
#[derive(Debug, Default)]
pub struct Collected {
    pub coupons: Vec<CouponRecord>,
    pub failed_targets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing was collected, so nothing was sent.
    Skipped,
    Submitted { message: Option<String> },
    /// The batch was lost; the string is the rendered error.
    Failed(String),
}

#[derive(Debug)]
pub struct ScrapeSummary {
    pub targets_total: usize,
    pub failed_targets: Vec<String>,
    pub records: usize,
    pub verified: usize,
    pub fallback: usize,
    /// Records whose normalized code repeats an earlier one in the batch.
    /// They are still submitted.
    pub duplicate_codes: usize,
    pub submission: SubmissionStatus,
}

/// Fetches and extracts every target in order, one at a time.
///
/// Sleeps `inter_request_delay` between consecutive targets. A target whose
/// fetch fails contributes nothing (not even a fallback record) and does not
/// stop the loop.
///
/// # Errors
///
/// Returns [`ScraperError::Http`] only if the page fetcher cannot be built.
pub async fn collect_coupons(config: &ScrapeConfig) -> Result<Collected, ScraperError> {
    let fetcher = PageFetcher::new(config.request_timeout, &config.user_agent)?;
    let mut collected = Collected::default();

    for (index, target) in config.targets.iter().enumerate() {
        if index > 0 && !config.inter_request_delay.is_zero() {
            tokio::time::sleep(config.inter_request_delay).await;
        }

        tracing::info!(
            store = %target.store,
            category = %target.category,
            url = %target.url,
            "extracting coupons"
        );

        let html = match fetcher.fetch_page(&target.url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    store = %target.store,
                    url = %target.url,
                    error = %e,
                    "skipping target — fetch failed"
                );
                collected.failed_targets.push(target.url.clone());
                continue;
            }
        };

        let coupons = extract_coupons(&html, target, &config.extract, &mut rand::rng());
        tracing::info!(
            store = %target.store,
            category = %target.category,
            count = coupons.len(),
            "extracted coupons"
        );
        collected.coupons.extend(coupons);
    }

    Ok(collected)
}

/// Runs a full scrape: [`collect_coupons`], then one submission of the
/// combined batch.
///
/// Submission failures are logged and reported in
/// [`ScrapeSummary::submission`] rather than returned.
///
/// # Errors
///
/// Returns [`ScraperError::Http`] only if an HTTP client cannot be built.
pub async fn run_scrape(config: &ScrapeConfig) -> Result<ScrapeSummary, ScraperError> {
    let collected = collect_coupons(config).await?;
    let coupons = collected.coupons;

    let duplicate_codes = count_duplicate_codes(&coupons);
    if duplicate_codes > 0 {
        tracing::warn!(
            duplicate_codes,
            "batch contains repeated coupon codes; submitting them anyway"
        );
    }

    let submission = if coupons.is_empty() {
        tracing::info!("no coupons collected — skipping submission");
        SubmissionStatus::Skipped
    } else {
        let client = ApiClient::new(config.request_timeout, config.api_key.as_deref())?;
        match client.submit_coupons(&config.endpoint, &coupons).await {
            Ok(SubmitOutcome::Accepted { count, message }) => {
                tracing::info!(count, endpoint = %config.endpoint, "coupon batch accepted");
                SubmissionStatus::Submitted { message }
            }
            Ok(SubmitOutcome::Skipped) => SubmissionStatus::Skipped,
            Err(e) => {
                tracing::error!(
                    endpoint = %config.endpoint,
                    error = %e,
                    "coupon batch submission failed"
                );
                SubmissionStatus::Failed(e.to_string())
            }
        }
    };

    let verified = coupons.iter().filter(|c| c.verified).count();

    Ok(ScrapeSummary {
        targets_total: config.targets.len(),
        failed_targets: collected.failed_targets,
        records: coupons.len(),
        verified,
        fallback: coupons.len() - verified,
        duplicate_codes,
        submission,
    })
}

/// Counts records whose normalized code already appeared earlier in `coupons`.
#[must_use]
pub fn count_duplicate_codes(coupons: &[CouponRecord]) -> usize {
    let mut seen = HashSet::with_capacity(coupons.len());
    coupons
        .iter()
        .filter(|c| !seen.insert(c.normalized_code()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(code: &str, verified: bool) -> CouponRecord {
        CouponRecord {
            code: code.to_string(),
            store: "paris".to_string(),
            category: "mujer".to_string(),
            discount_text: "40% OFF".to_string(),
            description: String::new(),
            verified,
        }
    }

    #[test]
    fn count_duplicate_codes_uses_normalized_form() {
        let coupons = vec![
            coupon("PAR42PROMO", true),
            coupon("par42promo", true),
            coupon("PAR-42-PROMO", true),
            coupon("PAR17PROMO", true),
        ];
        assert_eq!(count_duplicate_codes(&coupons), 2);
    }

    #[test]
    fn count_duplicate_codes_empty() {
        assert_eq!(count_duplicate_codes(&[]), 0);
    }

    #[test]
    fn scrape_config_from_app_config_carries_limits() {
        let app = AppConfig {
            log_level: "info".to_string(),
            coupons_endpoint: "http://localhost:3000/api/codigos/scraper".to_string(),
            stores_endpoint: "http://localhost:3000/api/tiendas-fisicas/demo".to_string(),
            api_key: "k".to_string(),
            request_timeout_secs: 10,
            inter_request_delay_ms: 250,
            user_agent: "ua".to_string(),
            max_candidates: 3,
            max_fragment_len: 25,
            targets_path: None,
            stores_path: "datos_tiendas_demo.json".into(),
        };
        let cfg = ScrapeConfig::from_app_config(&app, promopanda_core::default_targets());

        assert_eq!(cfg.targets.len(), 6);
        assert_eq!(cfg.endpoint, app.coupons_endpoint);
        assert_eq!(cfg.api_key.as_deref(), Some("k"));
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
        assert_eq!(cfg.inter_request_delay, Duration::from_millis(250));
        assert_eq!(
            cfg.extract,
            ExtractOptions {
                max_candidates: 3,
                max_fragment_len: 25
            }
        );
    }
}
