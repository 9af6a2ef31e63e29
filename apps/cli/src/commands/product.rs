//! # Product Commands
//!
//! `compras product ...`: the home screen and the add/edit product screens,
//! as subcommands.

use clap::Subcommand;
use compras_core::Product;
use compras_db::Database;
use tracing::{debug, info};

use super::{Output, Receipt};
use crate::error::CommandError;

/// Product subcommands.
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// Add a product, optionally to a saved list
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        /// Shopping list id to add the product to
        #[arg(long)]
        list: Option<i64>,
    },

    /// List products, optionally only those of one list
    List {
        #[arg(long)]
        list: Option<i64>,
    },

    /// Show one product
    Show { id: i64 },

    /// Change name, quantity or completion; omitted fields keep their value
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,
        #[arg(long)]
        completed: Option<bool>,
    },

    /// Tick a product off, or un-tick it
    Toggle { id: i64 },

    /// Move a product to a list, or out of any list when --list is omitted
    Assign {
        id: i64,
        #[arg(long)]
        list: Option<i64>,
    },

    /// Delete a product (no-op if it does not exist)
    Delete { id: i64 },
}

pub async fn dispatch(db: &Database, command: ProductCommand) -> Result<Output, CommandError> {
    match command {
        ProductCommand::Add {
            name,
            quantity,
            list,
        } => add(db, &name, quantity, list).await,
        ProductCommand::List { list } => list_products(db, list).await,
        ProductCommand::Show { id } => Ok(Output::Product(fetch(db, id).await?)),
        ProductCommand::Edit {
            id,
            name,
            quantity,
            completed,
        } => edit(db, id, name, quantity, completed).await,
        ProductCommand::Toggle { id } => toggle(db, id).await,
        ProductCommand::Assign { id, list } => assign(db, id, list).await,
        ProductCommand::Delete { id } => delete(db, id).await,
    }
}

async fn fetch(db: &Database, id: i64) -> Result<Product, CommandError> {
    db.products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| CommandError::not_found("Product", id))
}

async fn add(
    db: &Database,
    name: &str,
    quantity: i64,
    list: Option<i64>,
) -> Result<Output, CommandError> {
    let id = match list {
        Some(list_id) => db.products().insert_in_list(name, quantity, list_id).await?,
        None => db.products().insert(name, quantity).await?,
    };

    info!(id, "Product added");
    Ok(Output::Created(Receipt {
        entity: "product",
        id,
    }))
}

async fn list_products(db: &Database, list: Option<i64>) -> Result<Output, CommandError> {
    let products = match list {
        Some(list_id) => db.products().fetch_by_list(list_id).await?,
        None => db.products().fetch_all().await?,
    };

    Ok(Output::Products(products))
}

async fn edit(
    db: &Database,
    id: i64,
    name: Option<String>,
    quantity: Option<i64>,
    completed: Option<bool>,
) -> Result<Output, CommandError> {
    let current = fetch(db, id).await?;

    let name = name.unwrap_or(current.name);
    let quantity = quantity.unwrap_or(current.quantity);
    let is_completed = completed.unwrap_or(current.is_completed);

    debug!(id, "Editing product");
    db.products()
        .update(id, &name, quantity, is_completed)
        .await?;

    Ok(Output::Product(fetch(db, id).await?))
}

async fn toggle(db: &Database, id: i64) -> Result<Output, CommandError> {
    let product = fetch(db, id).await?;

    db.products().toggle_completed(&product).await?;

    Ok(Output::Product(fetch(db, id).await?))
}

async fn assign(db: &Database, id: i64, list: Option<i64>) -> Result<Output, CommandError> {
    fetch(db, id).await?;

    db.products().assign_to_list(id, list).await?;

    Ok(Output::Product(fetch(db, id).await?))
}

async fn delete(db: &Database, id: i64) -> Result<Output, CommandError> {
    db.products().delete(id).await?;

    Ok(Output::Deleted(Receipt {
        entity: "product",
        id,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
