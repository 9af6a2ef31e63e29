//! # Validation Module
//!
//! Input validation for products and shopping lists.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  └── "Please fill in all fields" before submitting                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Repository (Rust)                                            │
//! │  └── THIS MODULE: name and quantity rules                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use compras_core::validation::{validate_product_name, validate_quantity};
//!
//! let name = validate_product_name("  Milk ").unwrap();
//! assert_eq!(name, "Milk");
//! validate_quantity(2).unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LENGTH`] characters
///
/// ## Example
/// ```rust
/// use compras_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Milk").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<&str> {
    validate_name("name", name)
}

/// Validates a shopping list name and returns it trimmed.
///
/// Same rules as [`validate_product_name`].
pub fn validate_list_name(name: &str) -> ValidationResult<&str> {
    validate_name("list name", name)
}

fn validate_name<'a>(field: &str, name: &'a str) -> ValidationResult<&'a str> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (an item written down before deciding how many)
///
/// ## Example
/// ```rust
/// use compras_core::validation::validate_quantity;
///
/// assert!(validate_quantity(0).is_ok());
/// assert!(validate_quantity(12).is_ok());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
            value: quantity,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Milk").unwrap(), "Milk");
        assert_eq!(validate_product_name("  Eggs  ").unwrap(), "Eggs");

        assert!(matches!(
            validate_product_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_name(" \t "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_name(&"A".repeat(MAX_NAME_LENGTH + 1)),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(validate_product_name(&"A".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 200 two-byte characters is still within the limit
        let name = "ç".repeat(MAX_NAME_LENGTH);
        assert!(validate_list_name(&name).is_ok());
    }

    #[test]
    fn test_validate_list_name_field() {
        let err = validate_list_name("").unwrap_err();
        assert_eq!(err.to_string(), "list name is required");
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(i64::MAX).is_ok());

        assert_eq!(
            validate_quantity(-1),
            Err(ValidationError::Negative {
                field: "quantity".to_string(),
                value: -1,
            })
        );
    }
}
