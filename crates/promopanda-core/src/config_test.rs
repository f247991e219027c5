use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn empty_env<'a>() -> HashMap<&'a str, &'a str> {
    HashMap::new()
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map = empty_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.coupons_endpoint,
        "http://localhost:3000/api/codigos/scraper"
    );
    assert_eq!(
        cfg.stores_endpoint,
        "http://localhost:3000/api/tiendas-fisicas/demo"
    );
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.inter_request_delay_ms, 1000);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.max_candidates, 5);
    assert_eq!(cfg.max_fragment_len, 20);
    assert!(cfg.targets_path.is_none());
    assert_eq!(cfg.stores_path, PathBuf::from("datos_tiendas_demo.json"));
}

#[test]
fn api_key_defaults_to_development_key() {
    let map = empty_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_key, DEFAULT_SCRAPER_API_KEY);
    assert!(cfg.uses_default_api_key());
}

#[test]
fn api_key_override() {
    let mut map = empty_env();
    map.insert("SCRAPER_API_KEY", "real-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_key, "real-secret");
    assert!(!cfg.uses_default_api_key());
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = empty_env();
    map.insert("SCRAPER_API_KEY", "real-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("real-secret"), "leaked key: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn request_timeout_override() {
    let mut map = empty_env();
    map.insert("PROMO_REQUEST_TIMEOUT_SECS", "30");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.request_timeout(), std::time::Duration::from_secs(30));
}

#[test]
fn request_timeout_invalid() {
    let mut map = empty_env();
    map.insert("PROMO_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROMO_REQUEST_TIMEOUT_SECS"
        ),
        "expected InvalidEnvVar(PROMO_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_zero_is_rejected() {
    let mut map = empty_env();
    map.insert("PROMO_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROMO_REQUEST_TIMEOUT_SECS"
        ),
        "expected InvalidEnvVar(PROMO_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn inter_request_delay_override() {
    let mut map = empty_env();
    map.insert("PROMO_INTER_REQUEST_DELAY_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.inter_request_delay_ms, 0);
    assert!(cfg.inter_request_delay().is_zero());
}

#[test]
fn inter_request_delay_invalid() {
    let mut map = empty_env();
    map.insert("PROMO_INTER_REQUEST_DELAY_MS", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROMO_INTER_REQUEST_DELAY_MS"
        ),
        "expected InvalidEnvVar(PROMO_INTER_REQUEST_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn extraction_limits_override() {
    let mut map = empty_env();
    map.insert("PROMO_MAX_CANDIDATES", "3");
    map.insert("PROMO_MAX_FRAGMENT_LEN", "40");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_candidates, 3);
    assert_eq!(cfg.max_fragment_len, 40);
}

#[test]
fn max_fragment_len_invalid() {
    let mut map = empty_env();
    map.insert("PROMO_MAX_FRAGMENT_LEN", "twenty");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROMO_MAX_FRAGMENT_LEN"
        ),
        "expected InvalidEnvVar(PROMO_MAX_FRAGMENT_LEN), got: {result:?}"
    );
}

#[test]
fn targets_path_set() {
    let mut map = empty_env();
    map.insert("PROMO_TARGETS_PATH", "./config/targets.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.targets_path,
        Some(PathBuf::from("./config/targets.yaml"))
    );
}

#[test]
fn blank_targets_path_is_ignored() {
    let mut map = empty_env();
    map.insert("PROMO_TARGETS_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.targets_path.is_none());
}

#[test]
fn coupons_endpoint_override() {
    let mut map = empty_env();
    map.insert(
        "PROMO_COUPONS_ENDPOINT",
        "https://api.example.com/api/codigos/scraper",
    );
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.coupons_endpoint,
        "https://api.example.com/api/codigos/scraper"
    );
}

#[test]
fn stores_endpoint_must_be_http() {
    let mut map = empty_env();
    map.insert("PROMO_STORES_ENDPOINT", "localhost:3000/api/tiendas-fisicas/demo");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROMO_STORES_ENDPOINT"
        ),
        "expected InvalidEnvVar(PROMO_STORES_ENDPOINT), got: {result:?}"
    );
}
