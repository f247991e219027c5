//! Domain types and configuration shared by the PromoPanda scraper tools.

mod app_config;
mod config;
pub mod coupons;
pub mod stores;
pub mod targets;

use thiserror::Error;

pub use app_config::{AppConfig, DEFAULT_SCRAPER_API_KEY, DEFAULT_USER_AGENT};
pub use config::{load_app_config, load_app_config_from_env};
pub use coupons::{comparator_seed_coupons, normalize_code, CouponRecord};
pub use stores::{load_store_locations, StoreLocation};
pub use targets::{default_targets, is_known_store, load_targets, ScrapeTarget, KNOWN_STORES};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read targets file {path}: {source}")]
    TargetsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse targets file: {0}")]
    TargetsFileParse(#[source] serde_yaml::Error),

    #[error("failed to read store locations file {path}: {source}")]
    StoresFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse store locations file {path}: {source}")]
    StoresFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("validation error: {0}")]
    Validation(String),
}
