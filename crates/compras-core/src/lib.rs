//! # compras-core: Domain Types for Compras
//!
//! This crate holds the domain model of the shopping-list application as
//! plain data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Compras Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Presentation (mobile screens / `compras` CLI)        │   │
//! │  │    Home ──► Add Product ──► Edit Product ──► Saved Lists        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ compras-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐       │   │
//! │  │   │    types     │   │  validation  │   │    error     │       │   │
//! │  │   │   Product    │   │  name rules  │   │ Validation-  │       │   │
//! │  │   │ ShoppingList │   │  quantity    │   │    Error     │       │   │
//! │  │   └──────────────┘   └──────────────┘   └──────────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  compras-db (Database Layer)                    │   │
//! │  │        SQLite schema, product and shopping list repositories    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ShoppingList) and the 0/1 flag mapping
//! - [`error`] - Validation error type
//! - [`validation`] - Input rules applied before anything reaches storage
//!
//! ## Example Usage
//!
//! ```rust
//! use compras_core::validation::{validate_product_name, validate_quantity};
//! use compras_core::types::{flag_from_int, flag_to_int};
//!
//! assert!(validate_product_name("Milk").is_ok());
//! assert!(validate_quantity(-1).is_err());
//!
//! assert_eq!(flag_to_int(true), 1);
//! assert!(!flag_from_int("isCompleted", 0).unwrap());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product or shopping list name, in characters.
///
/// The mobile input fields never produced anything near this; the limit keeps
/// a runaway paste from landing in the store.
pub const MAX_NAME_LENGTH: usize = 200;
