//! Client for NASA's NeoWs (Near Earth Object Web Service) REST API.
//!
//! [`api::NeoWsApi`] wraps the two endpoints the platform uses (the
//! date-bucketed feed and the per-asteroid detail lookup) behind the
//! [`source::NeoDataSource`] trait, which is what the HTTP layer is
//! injected with.

pub mod api;
pub mod models;
pub mod source;

pub use api::{NeoWsApi, NeoWsApiError};
pub use models::FeedResponse;
pub use source::NeoDataSource;
