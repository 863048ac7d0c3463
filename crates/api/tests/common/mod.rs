//! Shared helpers for the API integration tests: a stubbed upstream
//! data source, an in-memory database pool, and an app router built
//! with the same middleware stack as `main.rs`.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use neoscope_api::config::ServerConfig;
use neoscope_api::routes;
use neoscope_api::state::AppState;
use neoscope_core::asteroid::{ApproachEvent, AsteroidDetail};
use neoscope_core::date_range::DateRange;
use neoscope_db::DbPool;
use neoscope_neows::{FeedResponse, NeoDataSource, NeoWsApiError};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        nasa_api_base_url: "http://127.0.0.1:0".to_string(),
        nasa_api_key: "TEST_KEY".to_string(),
    }
}

/// In-memory pool with migrations applied. One connection only:
/// each `sqlite::memory:` connection is its own database.
pub async fn test_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    neoscope_db::run_migrations(&pool).await.expect("migrations");
    pool
}

/// Stubbed upstream data source with call counting and per-id
/// failure injection.
#[derive(Default)]
pub struct StubNeo {
    pub feed_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    feed_json: Mutex<Option<serde_json::Value>>,
    feed_error: Mutex<Option<String>>,
    details: Mutex<HashMap<String, AsteroidDetail>>,
    failing_ids: Mutex<HashSet<String>>,
}

impl StubNeo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Serve this raw feed JSON for every feed call.
    pub fn set_feed(&self, feed: serde_json::Value) {
        *self.feed_json.lock().unwrap() = Some(feed);
    }

    /// Fail every feed call with this upstream message.
    pub fn set_feed_error(&self, message: &str) {
        *self.feed_error.lock().unwrap() = Some(message.to_string());
    }

    /// Serve this detail record for its id.
    pub fn insert_detail(&self, detail: AsteroidDetail) {
        self.details
            .lock()
            .unwrap()
            .insert(detail.id.clone(), detail);
    }

    /// Fail detail calls for this id with a 503.
    pub fn fail_detail(&self, id: &str) {
        self.failing_ids.lock().unwrap().insert(id.to_string());
    }
}

#[async_trait]
impl NeoDataSource for StubNeo {
    async fn feed(&self, _range: &DateRange) -> Result<FeedResponse, NeoWsApiError> {
        self.feed_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.feed_error.lock().unwrap().clone() {
            return Err(NeoWsApiError::Api {
                status: 502,
                message,
            });
        }

        let json = self
            .feed_json
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| serde_json::json!({ "near_earth_objects": {} }));
        Ok(serde_json::from_value(json).expect("stub feed JSON"))
    }

    async fn detail(&self, id: &str) -> Result<AsteroidDetail, NeoWsApiError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing_ids.lock().unwrap().contains(id) {
            return Err(NeoWsApiError::Api {
                status: 503,
                message: format!("injected failure for {id}"),
            });
        }

        self.details
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| NeoWsApiError::Api {
                status: 404,
                message: format!("asteroid {id} not found"),
            })
    }
}

/// Minimal detail record for stubbing.
pub fn detail(id: &str, name: &str, events: Vec<ApproachEvent>) -> AsteroidDetail {
    AsteroidDetail {
        id: id.to_string(),
        name: name.to_string(),
        nasa_jpl_url: Some(format!("https://ssd.jpl.nasa.gov/{id}")),
        absolute_magnitude_h: Some(22.1),
        estimated_diameter: None,
        is_potentially_hazardous_asteroid: Some(false),
        close_approach_data: events,
    }
}

/// Approach event carrying only the full date text.
pub fn approach_event(date_full: &str) -> ApproachEvent {
    ApproachEvent {
        close_approach_date: None,
        close_approach_date_full: Some(date_full.to_string()),
        epoch_date_close_approach: None,
        relative_velocity: None,
        miss_distance: None,
        orbiting_body: Some("Earth".to_string()),
    }
}

/// Build the full application router with all middleware layers,
/// mirroring the construction in `main.rs` so tests exercise the same
/// stack production uses.
pub fn build_test_app(pool: DbPool, neo: Arc<StubNeo>) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        neo,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Convert a response into its status code and parsed JSON body.
pub async fn read_json(response: Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// Convenience GET request body.
pub fn get_request(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Request with an arbitrary method and empty body.
pub fn request(method: Method, uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
