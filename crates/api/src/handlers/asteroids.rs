//! Handlers for asteroid discovery and detail lookup.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use neoscope_core::approach::{filter_approaches, ApproachWindow};
use neoscope_core::asteroid::AsteroidDetail;
use neoscope_core::date_range::DateRange;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fixed message returned for any detail-lookup failure. The
/// underlying cause is logged, not exposed.
pub const DETAIL_FETCH_ERROR: &str = "Failed to fetch asteroid details.";

/// Query parameters for the feed listing.
#[derive(Debug, Deserialize)]
pub struct FeedRangeParams {
    pub start_date: String,
    pub end_date: String,
}

// ---------------------------------------------------------------------------
// GET /asteroids?start_date&end_date
// ---------------------------------------------------------------------------

/// List asteroids with a close approach inside the requested window.
///
/// The range is validated (and bounded to 7 days) before the single
/// upstream feed request is issued; the date-bucketed response is
/// flattened to `{id, name}` summaries.
pub async fn list_asteroids(
    State(state): State<AppState>,
    Query(params): Query<FeedRangeParams>,
) -> AppResult<impl IntoResponse> {
    let range = DateRange::parse(&params.start_date, &params.end_date)?;

    let feed = state.neo.feed(&range).await?;
    tracing::debug!(
        start = %range.start,
        end = %range.end,
        element_count = feed.element_count.unwrap_or_default(),
        "Fetched asteroid feed",
    );

    Ok(Json(DataResponse {
        data: feed.flatten(),
    }))
}

// ---------------------------------------------------------------------------
// GET /asteroids/{id}
// ---------------------------------------------------------------------------

/// Get one asteroid with its approach history narrowed to one
/// calendar year either side of today.
///
/// Any underlying failure (upstream or malformed event dates) is
/// generalized to [`DETAIL_FETCH_ERROR`]; the cause is only logged.
pub async fn get_asteroid(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let detail = filtered_detail(&state, &id).await.map_err(|err| {
        tracing::error!(asteroid_id = %id, error = %err, "Error fetching asteroid details");
        AppError::BadGateway(DETAIL_FETCH_ERROR.to_string())
    })?;

    Ok(Json(DataResponse { data: detail }))
}

/// Fetch the detail record and replace its approach list with the
/// filtered subsequence; all other fields pass through unmodified.
async fn filtered_detail(state: &AppState, id: &str) -> Result<AsteroidDetail, AppError> {
    let mut detail = state.neo.detail(id).await?;

    let window = ApproachWindow::centered_on(Utc::now().naive_utc())?;
    detail.close_approach_data = filter_approaches(detail.close_approach_data, &window)?;

    Ok(detail)
}
