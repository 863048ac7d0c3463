use serde::Serialize;
use sqlx::FromRow;

/// A row from the `favourites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favourite {
    /// Upstream-assigned asteroid id. Primary key.
    pub asteroid_id: String,
}
