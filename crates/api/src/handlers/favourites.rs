//! Handlers for the favourites set.
//!
//! The store holds bare asteroid ids; reads enrich each stored id
//! back into a `{id, name}` summary via per-id upstream lookups.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use futures::future::try_join_all;
use serde::Serialize;

use neoscope_core::asteroid::AsteroidSummary;
use neoscope_db::repositories::FavouriteRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for a removal: just the id, returned
/// unconditionally (no confirmation the id existed).
#[derive(Debug, Serialize)]
pub struct RemovedFavourite {
    pub id: String,
}

// ---------------------------------------------------------------------------
// GET /favourites
// ---------------------------------------------------------------------------

/// List every favourite, enriched to `{id, name}` summaries.
///
/// The per-id detail fetches are all in flight concurrently; the
/// first failure fails the whole call and no partial list is
/// returned. Output order matches the stored id order.
pub async fn list_favourites(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ids = FavouriteRepo::list_ids(&state.pool).await?;

    let fetches = ids.iter().map(|id| state.neo.detail(id));
    let details = try_join_all(fetches).await?;

    let summaries: Vec<AsteroidSummary> = details.into_iter().map(AsteroidSummary::from).collect();
    Ok(Json(DataResponse { data: summaries }))
}

// ---------------------------------------------------------------------------
// POST /favourites/{id}
// ---------------------------------------------------------------------------

/// Add an id to the favourites set, then return its summary.
///
/// The insert commits before the enrichment fetch: a failed fetch
/// still leaves the favourite durably stored, and retrying the add is
/// idempotent.
pub async fn add_favourite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let inserted = FavouriteRepo::add(&state.pool, &id).await?;
    tracing::info!(asteroid_id = %id, inserted, "Favourite added");

    let detail = state.neo.detail(&id).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AsteroidSummary::from(detail),
        }),
    ))
}

// ---------------------------------------------------------------------------
// DELETE /favourites/{id}
// ---------------------------------------------------------------------------

/// Remove an id from the favourites set.
pub async fn remove_favourite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = FavouriteRepo::remove(&state.pool, &id).await?;
    tracing::info!(asteroid_id = %id, removed, "Favourite removed");

    Ok(Json(DataResponse {
        data: RemovedFavourite { id },
    }))
}
