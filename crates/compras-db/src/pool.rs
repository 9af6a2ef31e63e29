//! # Store Handle
//!
//! Opening, initializing and closing the SQLite store.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Lifecycle                                    │
//! │                                                                         │
//! │  Composition root (CLI `run`)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure pool settings                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::open(config).await ← Create pool + initialize schema        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │            SqlitePool                    │                           │
//! │  │  ┌─────┐                                 │                           │
//! │  │  │Conn1│   (one connection by default;   │                           │
//! │  │  └─────┘    statements run one at a time)│                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.products() / db.shopping_lists() ← repositories share the pool     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.close().await ← on shutdown                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! File stores use WAL journaling with NORMAL synchronous mode. In-memory
//! stores (tests) keep SQLite's default journal.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::repository::shopping_list::ShoppingListRepository;
use crate::schema::{self, SchemaStatus};

const IN_MEMORY: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/compras.db")
///     .acquire_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file, or `:memory:`.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 1 (a single-user local store)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// How long an operation may wait for a connection before failing
    /// with [`DbError::PoolExhausted`].
    /// Default: 30 seconds
    pub acquire_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes, none for in-memory stores
    pub idle_timeout: Option<Duration>,

    /// Whether to initialize the schema on open.
    /// Default: true
    pub initialize_schema: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Will be created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            initialize_schema: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection acquire timeout.
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Sets whether to initialize the schema on open.
    pub fn initialize_schema(mut self, initialize: bool) -> Self {
        self.initialize_schema = initialize;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Every store opened from this configuration is a fresh, isolated
    /// database. The single connection is never recycled, since dropping it
    /// would drop the data.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: None,
            initialize_schema: true,
        }
    }

    /// True when this configuration targets an in-memory store.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY)
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        if self.is_in_memory() {
            return SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()));
        }

        Ok(SqliteConnectOptions::new()
            .filename(&self.database_path)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// Cloning is cheap: clones share the same pool.
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::open(DbConfig::new("compras.db")).await?;
/// let id = db.products().insert("Milk", 2).await?;
/// db.close().await;
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl Database {
    /// Opens the store.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite (WAL, NORMAL synchronous) for file stores
    /// 3. Creates the connection pool
    /// 4. Initializes the schema (if enabled)
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError)` - Connection or schema initialization failed
    pub async fn open(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening database"
        );

        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout);

        if config.is_in_memory() {
            pool_options = pool_options.max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database { pool };

        if config.initialize_schema {
            db.initialize().await?;
        }

        Ok(db)
    }

    /// Ensures the schema exists.
    ///
    /// Idempotent. Called by [`Database::open`] unless disabled in the config.
    pub async fn initialize(&self) -> DbResult<()> {
        schema::initialize(&self.pool).await
    }

    /// Reports which tables and columns exist.
    pub async fn schema_status(&self) -> DbResult<SchemaStatus> {
        schema::status(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    ///
    /// Prefer repository methods; this is for diagnostics and tests.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Returns the shopping list repository.
    pub fn shopping_lists(&self) -> ShoppingListRepository {
        ShoppingListRepository::new(self.pool.clone())
    }

    /// Closes the connection pool.
    ///
    /// ## Note
    /// After calling close, all repository operations fail with
    /// [`DbError::ConnectionFailed`].
    pub async fn close(&self) {
        info!("Closing database");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::open(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
        assert!(db.schema_status().await.unwrap().is_complete());
    }

    #[tokio::test]
    async fn test_in_memory_stores_are_isolated() {
        let a = Database::open(DbConfig::in_memory()).await.unwrap();
        let b = Database::open(DbConfig::in_memory()).await.unwrap();

        a.products().insert("Milk", 1).await.unwrap();

        assert_eq!(a.products().count().await.unwrap(), 1);
        assert_eq!(b.products().count().await.unwrap(), 0);
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/compras-test.db")
            .max_connections(4)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(3))
            .initialize_schema(false);

        assert_eq!(config.max_connections, 4);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
        assert!(!config.initialize_schema);
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }

    #[tokio::test]
    async fn test_operations_fail_after_close() {
        let db = Database::open(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
        let err = db.products().fetch_all().await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }

    #[tokio::test]
    async fn test_bounded_wait_for_connection() {
        let db = Database::open(
            DbConfig::in_memory().acquire_timeout(Duration::from_millis(200)),
        )
        .await
        .unwrap();

        // Hold the only connection
        let held = db.pool().acquire().await.unwrap();

        let err = db.products().fetch_all().await.unwrap_err();
        assert!(matches!(err, DbError::PoolExhausted));

        drop(held);
        assert!(db.products().fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_engine_constraint_failure() {
        let db = Database::open(DbConfig::in_memory()).await.unwrap();

        let err: DbError =
            sqlx::query("INSERT INTO products (name, quantity, isCompleted) VALUES (NULL, 1, 0)")
                .execute(db.pool())
                .await
                .unwrap_err()
                .into();

        match err {
            DbError::ConstraintViolation(msg) => assert!(msg.contains("products.name")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compras.db");

        let db = Database::open(DbConfig::new(&path)).await.unwrap();
        let list_id = db.shopping_lists().insert("Groceries").await.unwrap();
        db.products()
            .insert_in_list("Milk", 2, list_id)
            .await
            .unwrap();
        db.close().await;

        let db = Database::open(DbConfig::new(&path)).await.unwrap();
        let products = db.products().fetch_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].shopping_list_id, Some(list_id));
        assert_eq!(db.shopping_lists().count().await.unwrap(), 1);
        db.close().await;
    }
}
