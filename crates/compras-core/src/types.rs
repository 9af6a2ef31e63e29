//! # Domain Types
//!
//! Core domain types used throughout Compras.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │      Product        │            │    ShoppingList     │            │
//! │  │  ─────────────────  │            │  ─────────────────  │            │
//! │  │  id (store-assigned)│            │  id (store-assigned)│            │
//! │  │  name               │            │  name               │            │
//! │  │  quantity           │            │  is_favorite        │            │
//! │  │  is_completed       │            └─────────────────────┘            │
//! │  │  shopping_list_id ──┼──► optional, never enforced                   │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Field Naming
//! Rust fields are snake_case. On the wire (JSON, TypeScript bindings) they
//! are camelCase, which is also how the columns are named in SQLite.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Product
// =============================================================================

/// An item on a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, never reused.
    #[ts(type = "number")]
    pub id: i64,

    /// Display name, e.g. "Milk".
    pub name: String,

    /// How many to buy. Never negative.
    #[ts(type = "number")]
    pub quantity: i64,

    /// Whether the item has been picked up.
    pub is_completed: bool,

    /// The list this product was added to, if any.
    ///
    /// Not enforced: the list may have been deleted since.
    #[ts(type = "number | null")]
    pub shopping_list_id: Option<i64>,
}

impl Product {
    /// Returns a copy with the completion flag flipped.
    pub fn toggled(&self) -> Product {
        Product {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }
}

// =============================================================================
// Shopping List
// =============================================================================

/// A named, saved shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Store-assigned identifier, never reused.
    #[ts(type = "number")]
    pub id: i64,

    /// Display name, e.g. "Groceries".
    pub name: String,

    /// Starred by the user.
    pub is_favorite: bool,
}

// =============================================================================
// Flag Mapping
// =============================================================================

/// Converts a boolean to the 0/1 integer stored in SQLite.
#[inline]
pub const fn flag_to_int(flag: bool) -> i64 {
    if flag {
        1
    } else {
        0
    }
}

/// Converts a stored 0/1 integer back to a boolean.
///
/// Anything other than 0 or 1 is rejected rather than coerced, so a corrupted
/// row surfaces as an error instead of silently reading as `true`.
///
/// ## Example
/// ```rust
/// use compras_core::types::flag_from_int;
///
/// assert!(flag_from_int("isFavorite", 1).unwrap());
/// assert!(flag_from_int("isFavorite", 2).is_err());
/// ```
pub fn flag_from_int(field: &str, value: i64) -> Result<bool, ValidationError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(ValidationError::InvalidFlag {
            field: field.to_string(),
            value: other,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
