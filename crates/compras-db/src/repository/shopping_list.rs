//! # Shopping List Repository
//!
//! Database operations for saved shopping lists.
//!
//! Deleting a list leaves the products that reference it untouched; their
//! `shoppingListId` keeps pointing at the deleted id.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use compras_core::types::{flag_from_int, flag_to_int};
use compras_core::validation::validate_list_name;
use compras_core::ShoppingList;

const SELECT_LISTS: &str = "SELECT id, name, isFavorite FROM shopping_lists";

#[derive(Debug, sqlx::FromRow)]
struct ShoppingListRow {
    id: i64,
    name: String,
    #[sqlx(rename = "isFavorite")]
    is_favorite: i64,
}

impl TryFrom<ShoppingListRow> for ShoppingList {
    type Error = DbError;

    fn try_from(row: ShoppingListRow) -> DbResult<ShoppingList> {
        let is_favorite = flag_from_int("isFavorite", row.is_favorite)
            .map_err(|e| DbError::invalid_row("ShoppingList", row.id, e))?;

        Ok(ShoppingList {
            id: row.id,
            name: row.name,
            is_favorite,
        })
    }
}

/// Repository for shopping list database operations.
#[derive(Debug, Clone)]
pub struct ShoppingListRepository {
    pool: SqlitePool,
}

impl ShoppingListRepository {
    /// Creates a new ShoppingListRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ShoppingListRepository { pool }
    }

    /// Inserts a new list and returns its store-assigned id.
    ///
    /// New lists are never favorites.
    pub async fn insert(&self, name: &str) -> DbResult<i64> {
        let name = validate_list_name(name)?;

        debug!(name = %name, "Inserting shopping list");

        let result = sqlx::query("INSERT INTO shopping_lists (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Returns every list, in the store's natural order.
    pub async fn fetch_all(&self) -> DbResult<Vec<ShoppingList>> {
        let rows = sqlx::query_as::<_, ShoppingListRow>(SELECT_LISTS)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Fetched shopping lists");
        rows.into_iter().map(ShoppingList::try_from).collect()
    }

    /// Gets a list by its id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<ShoppingList>> {
        let row = sqlx::query_as::<_, ShoppingListRow>(&format!("{SELECT_LISTS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ShoppingList::try_from).transpose()
    }

    /// Renames a list. Id and favorite flag are preserved; a missing id is a
    /// no-op.
    pub async fn update(&self, id: i64, name: &str) -> DbResult<()> {
        let name = validate_list_name(name)?;

        debug!(id, name = %name, "Renaming shopping list");

        let result = sqlx::query("UPDATE shopping_lists SET name = ?2 WHERE id = ?1")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id, "Rename matched no shopping list");
        }

        Ok(())
    }

    /// Deletes a list. Referencing products are not touched; a missing id is
    /// a no-op.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting shopping list");

        let result = sqlx::query("DELETE FROM shopping_lists WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id, "Delete matched no shopping list");
        }

        Ok(())
    }

    /// Writes `!current_favorite` as the list's favorite flag.
    ///
    /// Same read-modify-write caveat as
    /// [`toggle_completed`](super::product::ProductRepository::toggle_completed): the new
    /// value is derived from what the caller last saw.
    pub async fn toggle_favorite(&self, id: i64, current_favorite: bool) -> DbResult<()> {
        let is_favorite = !current_favorite;

        debug!(id, is_favorite, "Toggling favorite");

        let result = sqlx::query("UPDATE shopping_lists SET isFavorite = ?2 WHERE id = ?1")
            .bind(id)
            .bind(flag_to_int(is_favorite))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id, "Favorite toggle matched no shopping list");
        }

        Ok(())
    }

    /// Counts all lists.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shopping_lists")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
