//! Repository for the `favourites` table.

use sqlx::SqlitePool;

use crate::models::favourite::Favourite;

/// Provides the set operations over stored favourite asteroid ids.
///
/// `add` and `remove` are idempotent: re-adding a present id and
/// removing an absent one are both no-ops, never errors.
pub struct FavouriteRepo;

impl FavouriteRepo {
    /// Insert an id if absent. Returns whether a row was inserted.
    pub async fn add(pool: &SqlitePool, asteroid_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("INSERT OR IGNORE INTO favourites (asteroid_id) VALUES (?1)")
            .bind(asteroid_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an id if present. Returns whether a row was removed.
    pub async fn remove(pool: &SqlitePool, asteroid_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favourites WHERE asteroid_id = ?1")
            .bind(asteroid_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every stored id, in store order.
    pub async fn list_ids(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Favourite>("SELECT asteroid_id FROM favourites")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|row| row.asteroid_id).collect())
    }
}
