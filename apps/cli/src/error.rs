//! # Command Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Compras                                │
//! │                                                                         │
//! │  compras product toggle 42                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<Output, CommandError>                                    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  DbError::Validation ──────► VALIDATION_ERROR  (exit 2)         │  │
//! │  │  DbError::NotFound   ──────► NOT_FOUND         (exit 3)         │  │
//! │  │  any other DbError   ──────► STORAGE_ERROR     (exit 1)         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stderr: "Error: Product not found: 42"                                 │
//! │  stored data: unchanged                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use compras_db::{DbError, ErrorKind};
use serde::Serialize;

/// Error returned from CLI commands.
///
/// ## Serialization
/// With `--json`, this is what lands on stderr:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Bad input; nothing was written
    ValidationError,

    /// The product or list does not exist
    NotFound,

    /// The store failed
    StorageError,

    /// Configuration could not be resolved (e.g. no data directory)
    ConfigError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Process exit code for this error.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::ValidationError => 2,
            ErrorCode::NotFound => 3,
            ErrorCode::StorageError | ErrorCode::ConfigError | ErrorCode::Internal => 1,
        }
    }
}

impl CommandError {
    /// Creates a new command error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(entity: &str, id: i64) -> Self {
        CommandError::new(ErrorCode::NotFound, format!("{} not found: {}", entity, id))
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::ConfigError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to command errors.
impl From<DbError> for CommandError {
    fn from(err: DbError) -> Self {
        match err.kind() {
            ErrorKind::Validation => CommandError::new(ErrorCode::ValidationError, err.to_string()),
            ErrorKind::NotFound => CommandError::new(ErrorCode::NotFound, err.to_string()),
            ErrorKind::Storage => {
                tracing::error!(error = %err, "Storage operation failed");
                CommandError::new(ErrorCode::StorageError, err.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::internal(format!("Failed to encode output: {}", err))
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandError {}

// =============================================================================
// Unit Tests
// =============================================================================
