//! REST client for the NeoWs HTTP endpoints.
//!
//! Wraps the feed and detail lookups using [`reqwest`]. No retry and
//! no timeout of its own; failures propagate to the caller and any
//! request timeout is middleware's concern at the HTTP boundary.

use chrono::NaiveDate;

use neoscope_core::asteroid::AsteroidDetail;
use neoscope_core::date_range::FEED_DATE_FORMAT;

use crate::models::FeedResponse;

/// HTTP client for the NeoWs API.
pub struct NeoWsApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Errors from the NeoWs REST layer.
#[derive(Debug, thiserror::Error)]
pub enum NeoWsApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// NeoWs returned a non-2xx status code.
    #[error("NeoWs API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// NASA's `error_message` when the body carries one, else the
        /// raw body text.
        message: String,
    },
}

impl NeoWsApiError {
    /// The upstream-provided message when present, else the
    /// transport-level message.
    pub fn upstream_message(&self) -> String {
        match self {
            Self::Request(err) => err.to_string(),
            Self::Api { message, .. } => message.clone(),
        }
    }
}

impl NeoWsApi {
    /// Create a new API client.
    ///
    /// * `base_url` - e.g. `https://api.nasa.gov/neo/rest/v1`.
    /// * `api_key`  - sent as the `api_key` query parameter.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (connection pooling across the process).
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Fetch the date-bucketed feed for an inclusive date range.
    ///
    /// One request covers the whole range; upstream enforces its own
    /// 7-day ceiling, which callers are expected to have validated
    /// already.
    pub async fn fetch_feed(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FeedResponse, NeoWsApiError> {
        tracing::debug!(%start, %end, "Fetching NeoWs feed");

        let response = self
            .client
            .get(format!("{}/feed", self.base_url))
            .query(&[
                ("start_date", start.format(FEED_DATE_FORMAT).to_string()),
                ("end_date", end.format(FEED_DATE_FORMAT).to_string()),
                ("api_key", self.api_key.clone()),
            ])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the full detail record for a single asteroid id.
    pub async fn fetch_detail(&self, id: &str) -> Result<AsteroidDetail, NeoWsApiError> {
        tracing::debug!(asteroid_id = %id, "Fetching NeoWs detail");

        let response = self
            .client
            .get(format!("{}/neo/{}", self.base_url, id))
            .query(&[("api_key", self.api_key.clone())])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Deserialize a success response, or map a non-2xx status to
    /// [`NeoWsApiError::Api`] with the extracted upstream message.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, NeoWsApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NeoWsApiError::Api {
                status: status.as_u16(),
                message: extract_error_message(status.as_u16(), &body),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

/// Pull NASA's `error_message` field out of an error body, falling
/// back to the raw body (or a status line when the body is empty).
fn extract_error_message(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error_message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    from_json.unwrap_or_else(|| {
        if body.trim().is_empty() {
            format!("upstream returned status {status}")
        } else {
            body.to_string()
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
