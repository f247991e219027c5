//! Demo store locations for the discount map.
//!
//! The file is authored outside this project and forwarded verbatim, so each
//! entry is kept as raw JSON. Only `nombre` and `tienda` are ever read, and
//! only for log output.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreLocation(pub Value);

impl StoreLocation {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("nombre").and_then(Value::as_str)
    }

    #[must_use]
    pub fn store(&self) -> Option<&str> {
        self.0.get("tienda").and_then(Value::as_str)
    }
}

/// Read a JSON array of store locations from `path`.
///
/// # Errors
///
/// Returns [`ConfigError::StoresFileIo`] when the file is missing or
/// unreadable and [`ConfigError::StoresFileParse`] when it is not a JSON array.
pub fn load_store_locations(path: &Path) -> Result<Vec<StoreLocation>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StoresFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::StoresFileParse {
        path: path.display().to_string(),
        source: e,
    })
}
