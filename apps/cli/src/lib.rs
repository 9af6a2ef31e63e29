//! # Compras CLI Library
//!
//! Composition root for the `compras` binary: parses arguments, opens the
//! store once, runs one command, closes the store.
//!
//! ## Module Organization
//! ```text
//! compras_cli/
//! ├── lib.rs          ◄─── You are here (arguments, logging, run)
//! ├── config.rs       ◄─── Database path and timeout resolution
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch, output rendering, status
//! │   ├── product.rs  ◄─── Product subcommands
//! │   └── shopping_list.rs ◄─── List subcommands
//! └── error.rs        ◄─── CommandError and exit codes
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Command Execution                                 │
//! │                                                                         │
//! │  1. Parse arguments (clap, env fallbacks)                               │
//! │  2. Initialize logging (stderr, RUST_LOG)                               │
//! │  3. Resolve configuration (database path, acquire timeout)             │
//! │  4. Database::open ── creates the file and schema if needed            │
//! │  5. Dispatch the command                                                │
//! │  6. Database::close                                                     │
//! │  7. Print output (text or --json)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;

use std::path::PathBuf;

use clap::Parser;
use compras_db::Database;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Command;
use config::AppConfig;
use error::CommandError;

/// Shopping lists in a local SQLite store.
#[derive(Debug, Parser)]
#[command(name = "compras", version, about)]
pub struct Cli {
    /// Path to the database file
    #[arg(long, global = true, env = "COMPRAS_DB_PATH")]
    pub db: Option<PathBuf>,

    /// Seconds to wait for the database before giving up
    #[arg(
        long,
        global = true,
        env = "COMPRAS_DB_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Runs one invocation and returns what should be printed on stdout.
///
/// The store is closed before returning, whether the command succeeded or
/// not.
pub async fn run(cli: Cli) -> Result<String, CommandError> {
    let config = AppConfig::resolve(cli.db, cli.timeout_secs)?;

    let db = Database::open(config.db_config()).await?;
    info!(path = %config.database_path.display(), "Store ready");

    let result = commands::dispatch(&db, cli.command).await;
    db.close().await;

    result?.render(cli.json)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every repository operation
/// - `RUST_LOG=compras_db=trace` - Trace one crate only
/// - Default: warnings, plus info from the compras crates
///
/// Logs go to stderr so stdout stays clean for `--json`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,compras_cli=info,compras_db=info,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("compras").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = parse(&["product", "add", "Milk", "2", "--json", "--db", "x.db"]);

        assert!(cli.json);
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        assert!(matches!(
            cli.command,
            Command::Product(commands::product::ProductCommand::Add { quantity: 2, .. })
        ));
    }

    #[test]
    fn test_negative_quantity_reaches_validation() {
        let cli = parse(&["product", "add", "Milk", "-1"]);

        assert!(matches!(
            cli.command,
            Command::Product(commands::product::ProductCommand::Add { quantity: -1, .. })
        ));
    }

    #[tokio::test]
    async fn test_run_against_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("compras.db");
        let db_arg = db.to_str().unwrap();

        let out = run(parse(&["--db", db_arg, "list", "add", "Groceries"]))
            .await
            .unwrap();
        assert_eq!(out, "Created shopping list #1");

        run(parse(&["--db", db_arg, "product", "add", "Milk", "2", "--list", "1"]))
            .await
            .unwrap();
        let out = run(parse(&["--db", db_arg, "product", "toggle", "1"]))
            .await
            .unwrap();
        assert_eq!(out, "[x] #1 Milk x2 (list #1)");

        let out = run(parse(&["--db", db_arg, "--json", "product", "list"]))
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "id": 1,
                "name": "Milk",
                "quantity": 2,
                "isCompleted": true,
                "shoppingListId": 1
            }])
        );
    }

    #[tokio::test]
    async fn test_run_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("compras.db");

        let err = run(parse(&["--db", db.to_str().unwrap(), "product", "show", "3"]))
            .await
            .unwrap_err();

        assert_eq!(err.code, error::ErrorCode::NotFound);
    }
}
