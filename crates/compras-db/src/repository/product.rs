//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Insert, optionally into a shopping list
//! - Fetch all / by list / by id
//! - Full-field update and completion toggle
//! - Delete
//!
//! ## Row Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products row                           Product                         │
//! │  ────────────────────────               ─────────────────────────       │
//! │  id              INTEGER    ──────────► id: i64                         │
//! │  name            TEXT       ──────────► name: String                    │
//! │  quantity        INTEGER    ── >= 0 ──► quantity: i64                   │
//! │  isCompleted     INTEGER    ── 0/1 ───► is_completed: bool              │
//! │  shoppingListId  INTEGER?   ──────────► shopping_list_id: Option<i64>   │
//! │                                                                         │
//! │  Anything outside the arrows' rules → DbError::InvalidRow               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use compras_core::types::{flag_from_int, flag_to_int};
use compras_core::validation::{validate_product_name, validate_quantity};
use compras_core::Product;

const SELECT_PRODUCTS: &str =
    "SELECT id, name, quantity, isCompleted, shoppingListId FROM products";

/// A `products` row exactly as SQLite returns it.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    quantity: i64,
    #[sqlx(rename = "isCompleted")]
    is_completed: i64,
    #[sqlx(rename = "shoppingListId")]
    shopping_list_id: Option<i64>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DbError;

    fn try_from(row: ProductRow) -> DbResult<Product> {
        let is_completed = flag_from_int("isCompleted", row.is_completed)
            .map_err(|e| DbError::invalid_row("Product", row.id, e))?;

        if row.quantity < 0 {
            return Err(DbError::invalid_row(
                "Product",
                row.id,
                format!("negative quantity {}", row.quantity),
            ));
        }

        Ok(Product {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            is_completed,
            shopping_list_id: row.shopping_list_id,
        })
    }
}

fn into_products(rows: Vec<ProductRow>) -> DbResult<Vec<Product>> {
    rows.into_iter().map(Product::try_from).collect()
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let id = repo.insert("Milk", 2).await?;
/// let product = repo.get_by_id(id).await?.expect("just inserted");
/// repo.toggle_completed(&product).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product that belongs to no list.
    ///
    /// ## Arguments
    /// * `name` - Display name (trimmed, must not be empty)
    /// * `quantity` - How many to buy (must not be negative)
    ///
    /// ## Returns
    /// * `Ok(id)` - The store-assigned id
    /// * `Err(DbError::Validation)` - Bad name or quantity
    ///
    /// The new product always starts not completed.
    pub async fn insert(&self, name: &str, quantity: i64) -> DbResult<i64> {
        self.insert_row(name, quantity, None).await
    }

    /// Inserts a new product into a shopping list.
    ///
    /// The list id is stored as given; it is not checked against
    /// `shopping_lists`.
    pub async fn insert_in_list(
        &self,
        name: &str,
        quantity: i64,
        shopping_list_id: i64,
    ) -> DbResult<i64> {
        self.insert_row(name, quantity, Some(shopping_list_id)).await
    }

    async fn insert_row(
        &self,
        name: &str,
        quantity: i64,
        shopping_list_id: Option<i64>,
    ) -> DbResult<i64> {
        let name = validate_product_name(name)?;
        validate_quantity(quantity)?;

        debug!(name = %name, quantity, ?shopping_list_id, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, quantity, isCompleted, shoppingListId)
            VALUES (?1, ?2, 0, ?3)
            "#,
        )
        .bind(name)
        .bind(quantity)
        .bind(shopping_list_id)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Returns every product, in the store's natural order.
    pub async fn fetch_all(&self) -> DbResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(SELECT_PRODUCTS)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Fetched products");
        into_products(rows)
    }

    /// Returns the products that reference the given list.
    pub async fn fetch_by_list(&self, shopping_list_id: i64) -> DbResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "{SELECT_PRODUCTS} WHERE shoppingListId = ?1"
        ))
        .bind(shopping_list_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(shopping_list_id, count = rows.len(), "Fetched products by list");
        into_products(rows)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCTS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    /// Replaces name, quantity and completion of an existing product.
    ///
    /// The list reference is left alone; see [`Self::assign_to_list`].
    /// A missing id is a no-op.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        quantity: i64,
        is_completed: bool,
    ) -> DbResult<()> {
        let name = validate_product_name(name)?;
        validate_quantity(quantity)?;

        debug!(id, name = %name, quantity, is_completed, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                quantity = ?3,
                isCompleted = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(quantity)
        .bind(flag_to_int(is_completed))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(id, "Update matched no product");
        }

        Ok(())
    }

    /// Sets or clears the shopping list a product belongs to.
    ///
    /// A missing product id is a no-op; the list id is not checked.
    pub async fn assign_to_list(&self, id: i64, shopping_list_id: Option<i64>) -> DbResult<()> {
        debug!(id, ?shopping_list_id, "Assigning product to list");

        let result = sqlx::query("UPDATE products SET shoppingListId = ?2 WHERE id = ?1")
            .bind(id)
            .bind(shopping_list_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id, "Assignment matched no product");
        }

        Ok(())
    }

    /// Deletes a product. A missing id is a no-op.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id, "Delete matched no product");
        }

        Ok(())
    }

    /// Flips the completion flag of `product`.
    ///
    /// ## Read-Modify-Write
    /// ```text
    /// caller's copy: is_completed = false
    ///       │
    ///       ▼
    /// UPDATE products SET isCompleted = 1 WHERE id = <caller's id>
    /// ```
    /// The new value comes from the caller's copy, not from the row. Two
    /// toggles issued from the same stale copy both write the same value, and
    /// the last statement wins. Name and quantity are never rewritten.
    pub async fn toggle_completed(&self, product: &Product) -> DbResult<()> {
        let is_completed = !product.is_completed;

        debug!(id = product.id, is_completed, "Toggling completion");

        let result = sqlx::query("UPDATE products SET isCompleted = ?2 WHERE id = ?1")
            .bind(product.id)
            .bind(flag_to_int(is_completed))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id = product.id, "Toggle matched no product");
        }

        Ok(())
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::pool::{Database, DbConfig};

    async fn setup() -> Database {
        Database::open(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_fetch_all() {
        let db = setup().await;
        let repo = db.products();

        let id = repo.insert("Milk", 2).await.unwrap();
        let products = repo.fetch_all().await.unwrap();

        assert_eq!(
            products,
            vec![Product {
                id,
                name: "Milk".to_string(),
                quantity: 2,
                is_completed: false,
                shopping_list_id: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_fetch_all_empty() {
        let db = setup().await;

        assert!(db.products().fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_trims_name() {
        let db = setup().await;
        let repo = db.products();

        let id = repo.insert("  Eggs ", 12).await.unwrap();

        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().name, "Eggs");
    }

    #[tokio::test]
    async fn test_insert_rejects_bad_input() {
        let db = setup().await;
        let repo = db.products();

        let err = repo.insert("", 1).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = repo.insert("Milk", -1).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_zero_quantity_is_allowed() {
        let db = setup().await;

        let id = db.products().insert("Salt", 0).await.unwrap();

        assert_eq!(
            db.products().get_by_id(id).await.unwrap().unwrap().quantity,
            0
        );
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let db = setup().await;
        let repo = db.products();

        let first = repo.insert("Milk", 1).await.unwrap();
        repo.delete(first).await.unwrap();
        let second = repo.insert("Bread", 1).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let db = setup().await;
        let repo = db.products();

        let id = repo.insert("Milk", 2).await.unwrap();
        repo.update(id, "Oat milk", 3, true).await.unwrap();

        let product = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.name, "Oat milk");
        assert_eq!(product.quantity, 3);
        assert!(product.is_completed);
    }

    #[tokio::test]
    async fn test_update_keeps_list_reference() {
        let db = setup().await;
        let repo = db.products();

        let id = repo.insert_in_list("Milk", 2, 7).await.unwrap();
        repo.update(id, "Milk", 4, false).await.unwrap();

        assert_eq!(
            repo.get_by_id(id).await.unwrap().unwrap().shopping_list_id,
            Some(7)
        );
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let db = setup().await;
        let repo = db.products();

        repo.update(404, "Ghost", 1, false).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_validates_before_writing() {
        let db = setup().await;
        let repo = db.products();

        let id = repo.insert("Milk", 2).await.unwrap();
        assert!(repo.update(id, "Milk", -5, false).await.is_err());

        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn test_double_toggle_restores_state() {
        let db = setup().await;
        let repo = db.products();

        let id = repo.insert("Milk", 2).await.unwrap();
        let original = repo.get_by_id(id).await.unwrap().unwrap();

        repo.toggle_completed(&original).await.unwrap();
        let toggled = repo.get_by_id(id).await.unwrap().unwrap();
        assert!(toggled.is_completed);

        repo.toggle_completed(&toggled).await.unwrap();
        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap(), original);
    }

    #[tokio::test]
    async fn test_toggle_uses_callers_copy() {
        let db = setup().await;
        let repo = db.products();

        let id = repo.insert("Milk", 2).await.unwrap();
        let stale = repo.get_by_id(id).await.unwrap().unwrap();

        // Both toggles start from the same stale copy: last write wins
        repo.toggle_completed(&stale).await.unwrap();
        repo.toggle_completed(&stale).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().unwrap().is_completed);
    }

    #[tokio::test]
    async fn test_toggle_leaves_stored_name_untouched() {
        let db = setup().await;
        let repo = db.products();

        // Rows written by an older build may carry names the validators reject
        let mut ids = Vec::new();
        for name in [" Milk ", "  "] {
            let result = sqlx::query(
                "INSERT INTO products (name, quantity, isCompleted) VALUES (?1, 1, 0)",
            )
            .bind(name)
            .execute(db.pool())
            .await
            .unwrap();
            ids.push(result.last_insert_rowid());
        }

        for product in repo.fetch_all().await.unwrap() {
            repo.toggle_completed(&product).await.unwrap();
        }

        let padded = repo.get_by_id(ids[0]).await.unwrap().unwrap();
        assert_eq!(padded.name, " Milk ");
        assert!(padded.is_completed);

        let blank = repo.get_by_id(ids[1]).await.unwrap().unwrap();
        assert_eq!(blank.name, "  ");
        assert!(blank.is_completed);
    }

    #[tokio::test]
    async fn test_delete_twice_is_noop() {
        let db = setup().await;
        let repo = db.products();

        let keep = repo.insert("Bread", 1).await.unwrap();
        let id = repo.insert("Milk", 2).await.unwrap();

        repo.delete(id).await.unwrap();
        repo.delete(id).await.unwrap();

        let remaining = repo.fetch_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep);
    }

    #[tokio::test]
    async fn test_fetch_by_list_and_assign() {
        let db = setup().await;
        let repo = db.products();

        let milk = repo.insert_in_list("Milk", 2, 1).await.unwrap();
        let soap = repo.insert_in_list("Soap", 1, 2).await.unwrap();
        let loose = repo.insert("Bread", 1).await.unwrap();

        let ids: Vec<i64> = repo
            .fetch_by_list(1)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![milk]);

        repo.assign_to_list(loose, Some(1)).await.unwrap();
        repo.assign_to_list(soap, None).await.unwrap();

        let mut ids: Vec<i64> = repo
            .fetch_by_list(1)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![milk, loose]);
        assert!(repo.fetch_by_list(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = setup().await;

        assert!(db.products().get_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupted_flag_is_rejected() {
        let db = setup().await;

        sqlx::query("INSERT INTO products (name, quantity, isCompleted) VALUES ('Milk', 1, 2)")
            .execute(db.pool())
            .await
            .unwrap();

        let err = db.products().fetch_all().await.unwrap_err();
        assert!(matches!(err, DbError::InvalidRow { .. }));
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[tokio::test]
    async fn test_negative_stored_quantity_is_rejected() {
        let db = setup().await;

        sqlx::query("INSERT INTO products (name, quantity, isCompleted) VALUES ('Milk', -4, 0)")
            .execute(db.pool())
            .await
            .unwrap();

        assert!(matches!(
            db.products().fetch_all().await,
            Err(DbError::InvalidRow { .. })
        ));
    }
}
