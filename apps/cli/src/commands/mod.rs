//! # Commands Module
//!
//! Every subcommand of `compras`.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs            ◄─── You are here (dispatch, output, status)
//! ├── product.rs        ◄─── compras product ...
//! └── shopping_list.rs  ◄─── compras list ...
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  $ compras product toggle 3                                             │
//! │         │                                                               │
//! │         │ (clap)                                                        │
//! │         ▼                                                               │
//! │  Command::Product(ProductCommand::Toggle { id: 3 })                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(&db, command) ──► product::toggle(&db, 3)                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Output::Product(..) ──► text (Display) or JSON (--json)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
pub mod shopping_list;

use std::fmt;

use clap::Subcommand;
use compras_core::{Product, ShoppingList};
use compras_db::Database;
use serde::Serialize;

use crate::error::CommandError;
use product::ProductCommand;
use shopping_list::ListCommand;

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show where the store is and what it holds
    Status,

    /// Add, edit, tick off and remove products
    #[command(subcommand)]
    Product(ProductCommand),

    /// Manage saved shopping lists
    #[command(subcommand)]
    List(ListCommand),
}

/// Runs one command against an open store.
pub async fn dispatch(db: &Database, command: Command) -> Result<Output, CommandError> {
    match command {
        Command::Status => status(db).await,
        Command::Product(cmd) => product::dispatch(db, cmd).await,
        Command::List(cmd) => shopping_list::dispatch(db, cmd).await,
    }
}

// =============================================================================
// Output
// =============================================================================

/// Result of a command, rendered as text or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Product(Product),
    Products(Vec<Product>),
    List(ShoppingList),
    Lists(Vec<ShoppingList>),
    Created(Receipt),
    Deleted(Receipt),
    Status(StatusReport),
}

/// Which entity a create/delete touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub entity: &'static str,
    pub id: i64,
}

/// Store diagnostics for `compras status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub healthy: bool,
    pub schema_complete: bool,
    pub products: i64,
    pub shopping_lists: i64,
}

impl Output {
    /// Renders the output for the terminal.
    pub fn render(&self, json: bool) -> Result<String, CommandError> {
        if json {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(self.to_string())
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Product(p) => write_product(f, p),
            Output::Products(products) if products.is_empty() => write!(f, "No products."),
            Output::Products(products) => {
                for (i, p) in products.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write_product(f, p)?;
                }
                Ok(())
            }
            Output::List(list) => write_list(f, list),
            Output::Lists(lists) if lists.is_empty() => write!(f, "No shopping lists."),
            Output::Lists(lists) => {
                for (i, list) in lists.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write_list(f, list)?;
                }
                Ok(())
            }
            Output::Created(r) => write!(f, "Created {} #{}", r.entity, r.id),
            Output::Deleted(r) => write!(f, "Deleted {} #{}", r.entity, r.id),
            Output::Status(s) => {
                writeln!(f, "healthy:        {}", s.healthy)?;
                let schema = if s.schema_complete { "ok" } else { "incomplete" };
                writeln!(f, "schema:         {}", schema)?;
                writeln!(f, "products:       {}", s.products)?;
                write!(f, "shopping lists: {}", s.shopping_lists)
            }
        }
    }
}

fn write_product(f: &mut fmt::Formatter<'_>, p: &Product) -> fmt::Result {
    let check = if p.is_completed { "[x]" } else { "[ ]" };
    write!(f, "{} #{} {} x{}", check, p.id, p.name, p.quantity)?;
    if let Some(list_id) = p.shopping_list_id {
        write!(f, " (list #{})", list_id)?;
    }
    Ok(())
}

fn write_list(f: &mut fmt::Formatter<'_>, list: &ShoppingList) -> fmt::Result {
    let star = if list.is_favorite { "★" } else { "☆" };
    write!(f, "{} #{} {}", star, list.id, list.name)
}

// =============================================================================
// Status
// =============================================================================

async fn status(db: &Database) -> Result<Output, CommandError> {
    let healthy = db.health_check().await;
    let schema = db.schema_status().await?;

    Ok(Output::Status(StatusReport {
        healthy,
        schema_complete: schema.is_complete(),
        products: db.products().count().await?,
        shopping_lists: db.shopping_lists().count().await?,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
