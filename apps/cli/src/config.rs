//! # Configuration
//!
//! Resolves where the store lives and how long to wait for it.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`, `--timeout-secs`)
//! 2. Environment variables (`COMPRAS_DB_PATH`, `COMPRAS_DB_TIMEOUT_SECS`)
//! 3. Defaults (this file)
//!
//! Flags and environment variables are merged by clap before they reach
//! [`AppConfig::resolve`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use compras_db::DbConfig;
use directories::ProjectDirs;
use tracing::debug;

use crate::error::CommandError;

/// File name of the store inside the data directory.
pub const DATABASE_FILE: &str = "compras.db";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Location of the SQLite file.
    pub database_path: PathBuf,

    /// Upper bound on waiting for a connection.
    pub acquire_timeout: Duration,
}

impl AppConfig {
    /// Builds the configuration, falling back to the platform data directory
    /// when no path was given.
    ///
    /// ## Platform-Specific Default Paths
    /// - **macOS**: `~/Library/Application Support/com.compras.compras/compras.db`
    /// - **Windows**: `%APPDATA%\compras\compras\data\compras.db`
    /// - **Linux**: `~/.local/share/compras/compras.db`
    ///
    /// Missing parent directories are created.
    pub fn resolve(
        database_path: Option<PathBuf>,
        timeout_secs: u64,
    ) -> Result<Self, CommandError> {
        let database_path = match database_path {
            Some(path) => path,
            None => default_database_path()?,
        };

        ensure_parent_dir(&database_path)?;
        debug!(path = %database_path.display(), "Resolved database path");

        Ok(AppConfig {
            database_path,
            acquire_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Store configuration for [`compras_db::Database::open`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).acquire_timeout(self.acquire_timeout)
    }
}

fn default_database_path() -> Result<PathBuf, CommandError> {
    let dirs = ProjectDirs::from("com", "compras", "compras")
        .ok_or_else(|| CommandError::config("Could not determine app data directory"))?;

    Ok(dirs.data_dir().join(DATABASE_FILE))
}

fn ensure_parent_dir(path: &Path) -> Result<(), CommandError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| {
                CommandError::config(format!("Cannot create {}: {}", parent.display(), e))
            })
        }
        _ => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
