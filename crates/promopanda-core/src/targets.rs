//! Scrape targets: which retailer page to visit and how to label what it yields.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Retailers the receiving API knows how to display.
pub const KNOWN_STORES: [&str; 3] = ["paris", "falabella", "ripley"];

const DEFAULT_CATEGORIES: [&str; 2] = ["mujer", "tecnologia"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeTarget {
    pub store: String,
    pub category: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct TargetsFile {
    pub targets: Vec<ScrapeTarget>,
}

#[must_use]
pub fn is_known_store(store: &str) -> bool {
    KNOWN_STORES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(store))
}

/// Every known store crossed with the default categories, pointed at
/// `https://{store}.com/{category}`.
#[must_use]
pub fn default_targets() -> Vec<ScrapeTarget> {
    KNOWN_STORES
        .iter()
        .flat_map(|store| {
            DEFAULT_CATEGORIES.iter().map(move |category| ScrapeTarget {
                store: (*store).to_string(),
                category: (*category).to_string(),
                url: format!("https://{store}.com/{category}"),
            })
        })
        .collect()
}

/// Load and validate scrape targets from a YAML file.
///
/// Store names are lowercased after validation so downstream code can compare
/// them directly.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_targets(path: &Path) -> Result<Vec<ScrapeTarget>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TargetsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let targets_file: TargetsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::TargetsFileParse)?;

    validate_targets(targets_file.targets)
}

fn validate_targets(targets: Vec<ScrapeTarget>) -> Result<Vec<ScrapeTarget>, ConfigError> {
    if targets.is_empty() {
        return Err(ConfigError::Validation(
            "targets file must list at least one target".to_string(),
        ));
    }

    let mut seen_urls = HashSet::new();
    let mut validated = Vec::with_capacity(targets.len());

    for mut target in targets {
        if !is_known_store(&target.store) {
            return Err(ConfigError::Validation(format!(
                "unknown store '{}'; expected one of: {}",
                target.store,
                KNOWN_STORES.join(", ")
            )));
        }
        target.store = target.store.to_lowercase();

        if target.category.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "target for store '{}' has an empty category",
                target.store
            )));
        }

        if !(target.url.starts_with("http://") || target.url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "target url '{}' must start with http:// or https://",
                target.url
            )));
        }

        if !seen_urls.insert(target.url.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate target url: '{}'",
                target.url
            )));
        }

        validated.push(target);
    }

    Ok(validated)
}

#[cfg(test)]
#[path = "targets_test.rs"]
mod tests;
