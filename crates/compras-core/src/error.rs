//! # Error Types
//!
//! Domain-specific error types for compras-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  compras-core errors (this file)                                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  compras-db errors (separate crate)                                    │
//! │  └── DbError          - Validation, not-found and storage failures     │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CommandError     - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → CommandError → terminal             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// They are raised before a statement is ever sent to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value must not be negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: i64 },

    /// A stored boolean flag held something other than 0 or 1.
    #[error("{field} must be 0 or 1 (got {value})")]
    InvalidFlag { field: String, value: i64 },
}

// =============================================================================
// Unit Tests
// =============================================================================
