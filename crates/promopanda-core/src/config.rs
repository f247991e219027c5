use std::path::PathBuf;

use crate::app_config::{AppConfig, DEFAULT_SCRAPER_API_KEY, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// development configuration pointed at `localhost:3000`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("PROMO_LOG_LEVEL", "info");
    let coupons_endpoint = or_default(
        "PROMO_COUPONS_ENDPOINT",
        "http://localhost:3000/api/codigos/scraper",
    );
    let stores_endpoint = or_default(
        "PROMO_STORES_ENDPOINT",
        "http://localhost:3000/api/tiendas-fisicas/demo",
    );
    let api_key = or_default("SCRAPER_API_KEY", DEFAULT_SCRAPER_API_KEY);

    let request_timeout_secs = parse_u64("PROMO_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PROMO_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    let inter_request_delay_ms = parse_u64("PROMO_INTER_REQUEST_DELAY_MS", "1000")?;
    let user_agent = or_default("PROMO_USER_AGENT", DEFAULT_USER_AGENT);

    let max_candidates = parse_usize("PROMO_MAX_CANDIDATES", "5")?;
    let max_fragment_len = parse_usize("PROMO_MAX_FRAGMENT_LEN", "20")?;

    let targets_path = lookup("PROMO_TARGETS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let stores_path = PathBuf::from(or_default("PROMO_STORES_PATH", "datos_tiendas_demo.json"));

    for (var, url) in [
        ("PROMO_COUPONS_ENDPOINT", &coupons_endpoint),
        ("PROMO_STORES_ENDPOINT", &stores_endpoint),
    ] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("'{url}' is not an http(s) URL"),
            });
        }
    }

    Ok(AppConfig {
        log_level,
        coupons_endpoint,
        stores_endpoint,
        api_key,
        request_timeout_secs,
        inter_request_delay_ms,
        user_agent,
        max_candidates,
        max_fragment_len,
        targets_path,
        stores_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
