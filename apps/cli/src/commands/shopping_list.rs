//! # Shopping List Commands
//!
//! `compras list ...`: the saved-lists screen.
//!
//! Deleting a list keeps its products; `compras product list --list <id>`
//! still finds them afterwards.

use clap::Subcommand;
use compras_core::ShoppingList;
use compras_db::Database;
use tracing::info;

use super::{Output, Receipt};
use crate::error::CommandError;

/// Shopping list subcommands.
#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// Save a new list
    Add { name: String },

    /// Show every saved list
    All,

    /// Rename a list
    Rename { id: i64, name: String },

    /// Star or un-star a list
    Favorite { id: i64 },

    /// Delete a list (its products are kept)
    Delete { id: i64 },
}

pub async fn dispatch(db: &Database, command: ListCommand) -> Result<Output, CommandError> {
    match command {
        ListCommand::Add { name } => add(db, &name).await,
        ListCommand::All => Ok(Output::Lists(db.shopping_lists().fetch_all().await?)),
        ListCommand::Rename { id, name } => rename(db, id, &name).await,
        ListCommand::Favorite { id } => favorite(db, id).await,
        ListCommand::Delete { id } => delete(db, id).await,
    }
}

async fn fetch(db: &Database, id: i64) -> Result<ShoppingList, CommandError> {
    db.shopping_lists()
        .get_by_id(id)
        .await?
        .ok_or_else(|| CommandError::not_found("ShoppingList", id))
}

async fn add(db: &Database, name: &str) -> Result<Output, CommandError> {
    let id = db.shopping_lists().insert(name).await?;

    info!(id, "Shopping list saved");
    Ok(Output::Created(Receipt {
        entity: "shopping list",
        id,
    }))
}

async fn rename(db: &Database, id: i64, name: &str) -> Result<Output, CommandError> {
    fetch(db, id).await?;

    db.shopping_lists().update(id, name).await?;

    Ok(Output::List(fetch(db, id).await?))
}

async fn favorite(db: &Database, id: i64) -> Result<Output, CommandError> {
    let list = fetch(db, id).await?;

    db.shopping_lists()
        .toggle_favorite(id, list.is_favorite)
        .await?;

    Ok(Output::List(fetch(db, id).await?))
}

async fn delete(db: &Database, id: i64) -> Result<Output, CommandError> {
    db.shopping_lists().delete(id).await?;

    Ok(Output::Deleted(Receipt {
        entity: "shopping list",
        id,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
