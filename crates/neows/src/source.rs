//! Object-safe seam over the upstream data source.
//!
//! The HTTP layer holds an `Arc<dyn NeoDataSource>` injected at
//! startup, so tests can stand in a stub without a network.

use async_trait::async_trait;

use neoscope_core::asteroid::AsteroidDetail;
use neoscope_core::date_range::DateRange;

use crate::api::{NeoWsApi, NeoWsApiError};
use crate::models::FeedResponse;

/// The two upstream lookups the platform performs.
#[async_trait]
pub trait NeoDataSource: Send + Sync {
    /// Fetch the date-bucketed feed for a validated range.
    async fn feed(&self, range: &DateRange) -> Result<FeedResponse, NeoWsApiError>;

    /// Fetch the full detail record for one asteroid id.
    async fn detail(&self, id: &str) -> Result<AsteroidDetail, NeoWsApiError>;
}

#[async_trait]
impl NeoDataSource for NeoWsApi {
    async fn feed(&self, range: &DateRange) -> Result<FeedResponse, NeoWsApiError> {
        self.fetch_feed(range.start, range.end).await
    }

    async fn detail(&self, id: &str) -> Result<AsteroidDetail, NeoWsApiError> {
        self.fetch_detail(id).await
    }
}
