pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /asteroids                  list within a date range (GET)
/// /asteroids/{id}             detail with filtered approaches (GET)
///
/// /favourites                 list enriched favourites (GET)
/// /favourites/{id}            add (POST), remove (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/asteroids", get(handlers::asteroids::list_asteroids))
        .route("/asteroids/{id}", get(handlers::asteroids::get_asteroid))
        .route("/favourites", get(handlers::favourites::list_favourites))
        .route(
            "/favourites/{id}",
            post(handlers::favourites::add_favourite).delete(handlers::favourites::remove_favourite),
        )
}
