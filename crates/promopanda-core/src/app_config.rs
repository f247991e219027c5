use std::path::PathBuf;
use std::time::Duration;

/// Development API key the receiving server falls back to when its own
/// `SCRAPER_API_KEY` is unset. Anyone who reads this source knows it, so it
/// must be overridden outside local development.
pub const DEFAULT_SCRAPER_API_KEY: &str = "clave_secreta_por_defecto_123";

/// Desktop browser identification sent with every page fetch.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub coupons_endpoint: String,
    pub stores_endpoint: String,
    pub api_key: String,
    pub request_timeout_secs: u64,
    pub inter_request_delay_ms: u64,
    pub user_agent: String,
    pub max_candidates: usize,
    pub max_fragment_len: usize,
    pub targets_path: Option<PathBuf>,
    pub stores_path: PathBuf,
}

impl AppConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn inter_request_delay(&self) -> Duration {
        Duration::from_millis(self.inter_request_delay_ms)
    }

    /// `true` when no `SCRAPER_API_KEY` was supplied and the well-known
    /// development key is in use.
    #[must_use]
    pub fn uses_default_api_key(&self) -> bool {
        self.api_key == DEFAULT_SCRAPER_API_KEY
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("coupons_endpoint", &self.coupons_endpoint)
            .field("stores_endpoint", &self.stores_endpoint)
            .field("api_key", &"[redacted]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .field("user_agent", &self.user_agent)
            .field("max_candidates", &self.max_candidates)
            .field("max_fragment_len", &self.max_fragment_len)
            .field("targets_path", &self.targets_path)
            .field("stores_path", &self.stores_path)
            .finish()
    }
}
