//! HTTP client for the upstream item provider.
//!
//! # Responsibilities
//! - Build the lookup URL from the configured base and the item id
//! - Enforce connect and total timeouts on every request
//! - Classify each round trip into an [`UpstreamOutcome`]
//!
//! # Design Decisions
//! - The pooled reqwest client is built once and cloned cheaply per handler
//! - Classification happens here so front ends never see reqwest errors

use std::time::Duration;

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::upstream::outcome::{ItemPayload, UpstreamOutcome};

/// Client for the upstream item provider.
///
/// Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client with the configured timeouts.
    pub fn new(upstream: &UpstreamConfig, timeouts: &TimeoutConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.total_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: upstream.base_url.clone(),
        })
    }

    /// Fetch one item by id; a single attempt, never an Err.
    ///
    /// The id is appended to the base URL verbatim — negative and zero ids
    /// are forwarded as-is and left to the upstream to reject.
    pub async fn fetch_item(&self, item_id: i32) -> UpstreamOutcome {
        let url = format!("{}{}", self.base_url, item_id);
        tracing::debug!(url = %url, "upstream lookup");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return UpstreamOutcome::Transport(e.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            return UpstreamOutcome::Status(status.as_u16());
        }

        match response.json::<ItemPayload>().await {
            Ok(payload) => UpstreamOutcome::Fetched(payload),
            Err(e) => UpstreamOutcome::Transport(format!("failed to decode upstream body: {}", e)),
        }
    }
}
