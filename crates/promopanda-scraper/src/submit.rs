//! Batch submission to the PromoPanda API.
//!
//! Every non-empty batch is exactly one POST carrying the whole slice as a
//! JSON array. Nothing is retried: a failed batch is reported to the caller
//! and dropped.

use std::time::Duration;

use promopanda_core::{CouponRecord, StoreLocation};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::ScraperError;

/// Header the API checks on the scraper ingestion route.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Result of a successful (or skipped) batch submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The batch was empty; no request was sent.
    Skipped,
    /// The API answered 2xx. `message` is the `msg` field of its JSON body,
    /// when it sent one.
    Accepted {
        count: usize,
        message: Option<String>,
    },
}

/// HTTP client for the PromoPanda ingestion endpoints.
pub struct ApiClient {
    client: Client,
    api_key: Option<String>,
}

impl ApiClient {
    /// Creates a client with the given request timeout. When `api_key` is
    /// `Some`, every request carries it in the [`API_KEY_HEADER`] header.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout: Duration, api_key: Option<&str>) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!("promopanda/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
        })
    }

    /// Sends all `coupons` to the scraper ingestion endpoint in one request.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Rejected`] — the API answered with a non-2xx status.
    /// - [`ScraperError::Http`] — connection failure or timeout.
    pub async fn submit_coupons(
        &self,
        endpoint: &str,
        coupons: &[CouponRecord],
    ) -> Result<SubmitOutcome, ScraperError> {
        self.post_batch(endpoint, coupons).await
    }

    /// Replaces the remote demo store dataset with `stores`.
    ///
    /// The endpoint deletes whatever it held before inserting, so this is a
    /// replace, not an append.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Rejected`] — the API answered with a non-2xx status.
    /// - [`ScraperError::Http`] — connection failure or timeout.
    pub async fn replace_store_locations(
        &self,
        endpoint: &str,
        stores: &[StoreLocation],
    ) -> Result<SubmitOutcome, ScraperError> {
        self.post_batch(endpoint, stores).await
    }

    async fn post_batch<T: Serialize>(
        &self,
        endpoint: &str,
        items: &[T],
    ) -> Result<SubmitOutcome, ScraperError> {
        if items.is_empty() {
            tracing::debug!(endpoint, "empty batch — nothing to submit");
            return Ok(SubmitOutcome::Skipped);
        }

        let mut request = self.client.post(endpoint).json(items);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        tracing::debug!(endpoint, count = items.len(), "submitting batch");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ScraperError::Rejected {
                status: status.as_u16(),
                url: endpoint.to_owned(),
                body,
            });
        }

        Ok(SubmitOutcome::Accepted {
            count: items.len(),
            message: response_message(&body),
        })
    }
}

/// Pulls the human-readable `msg` out of an API response body.
fn response_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("msg")
        .and_then(Value::as_str)
        .map(str::to_owned)
}
