//! # Schema Initialization
//!
//! Creates the tables Compras needs, directly at startup.
//!
//! ## How Initialization Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Initialization Sequence                            │
//! │                                                                         │
//! │  Database::open / Database::initialize                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS products        (no-op when present)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS shopping_lists  (no-op when present)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ALTER TABLE products ADD COLUMN shoppingListId                        │
//! │       │                                                                 │
//! │       ├── "duplicate column name" → already there, carry on            │
//! │       └── anything else           → DbError::SchemaFailed              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reference column is added separately so that stores created by
//! earlier builds, whose `products` table predates lists, are upgraded in
//! place with their rows intact. Each statement runs on its own; there is no
//! version table.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

const CREATE_PRODUCTS: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        name TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        isCompleted INTEGER NOT NULL
    )
"#;

const CREATE_SHOPPING_LISTS: &str = r#"
    CREATE TABLE IF NOT EXISTS shopping_lists (
        id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        name TEXT NOT NULL,
        isFavorite INTEGER NOT NULL DEFAULT 0
    )
"#;

const ADD_LIST_REFERENCE: &str = "ALTER TABLE products ADD COLUMN shoppingListId INTEGER";

/// Which parts of the schema are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStatus {
    /// `products` table exists.
    pub products_table: bool,
    /// `shopping_lists` table exists.
    pub shopping_lists_table: bool,
    /// `products.shoppingListId` column exists.
    pub list_reference_column: bool,
}

impl SchemaStatus {
    /// True when every table and column is in place.
    pub fn is_complete(&self) -> bool {
        self.products_table && self.shopping_lists_table && self.list_reference_column
    }
}

/// Ensures both tables and the list reference column exist.
///
/// ## Safety
/// - Idempotent: safe to run on every startup
/// - Additive only: never drops or rewrites rows
///
/// ## Example
/// ```rust,ignore
/// schema::initialize(&pool).await?;
/// ```
pub async fn initialize(pool: &SqlitePool) -> DbResult<()> {
    info!("Initializing database schema");

    sqlx::query(CREATE_PRODUCTS)
        .execute(pool)
        .await
        .map_err(schema_failed)?;

    sqlx::query(CREATE_SHOPPING_LISTS)
        .execute(pool)
        .await
        .map_err(schema_failed)?;

    match sqlx::query(ADD_LIST_REFERENCE).execute(pool).await {
        Ok(_) => info!("Added shoppingListId column to products"),
        Err(err) if is_duplicate_column(&err) => {
            debug!("shoppingListId column already present");
        }
        Err(err) => return Err(schema_failed(err)),
    }

    info!("Database schema ready");
    Ok(())
}

/// Reports which tables and columns exist.
///
/// ## Usage
/// For diagnostics (`compras status`) and tests.
pub async fn status(pool: &SqlitePool) -> DbResult<SchemaStatus> {
    let products_table = table_exists(pool, "products").await?;
    let shopping_lists_table = table_exists(pool, "shopping_lists").await?;

    let list_reference_column = if products_table {
        let columns: Vec<String> =
            sqlx::query_scalar("SELECT name FROM pragma_table_info('products')")
                .fetch_all(pool)
                .await?;
        columns.iter().any(|c| c == "shoppingListId")
    } else {
        false
    };

    Ok(SchemaStatus {
        products_table,
        shopping_lists_table,
        list_reference_column,
    })
}

async fn table_exists(pool: &SqlitePool, table: &str) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(table)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}

fn is_duplicate_column(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().contains("duplicate column name"),
        _ => false,
    }
}

fn schema_failed(err: sqlx::Error) -> DbError {
    match err {
        sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
        sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
        other => DbError::SchemaFailed(other.to_string()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
