//! # compras-db: Database Layer for Compras
//!
//! This crate provides database access for the shopping-list application.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Compras Data Flow                                │
//! │                                                                         │
//! │  CLI command (product toggle 3)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    compras-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │                │    │ (schema.rs)  │  │   │
//! │  │   │               │    │ ProductRepo    │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ShoppingList-  │    │ CREATE TABLE │  │   │
//! │  │   │ open / close  │    │   Repo         │    │ ADD COLUMN   │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   <data dir>/compras/compras.db                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Store handle and configuration
//! - [`schema`] - Table creation, idempotent
//! - [`error`] - Database error types
//! - [`repository`] - Product and shopping list repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use compras_db::{Database, DbConfig};
//!
//! let db = Database::open(DbConfig::new("compras.db")).await?;
//!
//! let list_id = db.shopping_lists().insert("Groceries").await?;
//! db.products().insert_in_list("Milk", 2, list_id).await?;
//!
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult, ErrorKind};
pub use pool::{Database, DbConfig};
pub use schema::SchemaStatus;

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::shopping_list::ShoppingListRepository;
