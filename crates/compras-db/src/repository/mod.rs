//! # Repository Module
//!
//! Database repository implementations for Compras.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Presentation (CLI command, screen)                                    │
//! │       │                                                                 │
//! │       │  db.products().toggle_completed(&product)                      │
//! │       ▼                                                                 │
//! │  ProductRepository / ShoppingListRepository                            │
//! │  ├── insert / fetch_all / get_by_id                                    │
//! │  ├── update / delete                                                   │
//! │  └── toggle_completed / toggle_favorite                                │
//! │       │                                                                 │
//! │       │  One SQL statement per operation                               │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Missing Rows
//! `update`, `delete` and the toggles are no-ops when the id does not exist;
//! zero affected rows are logged at debug level, not reported as errors.
//! `get_by_id` returns `None` for callers that need to know.
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and completion
//! - [`ShoppingListRepository`](shopping_list::ShoppingListRepository) - List CRUD and favorites

pub mod product;
pub mod shopping_list;
